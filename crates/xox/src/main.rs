//! Xox - terminal front end for the rules engine.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;
use xox_internals::{XoxConfig, XoxManager};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Demo { scenario } => console::run_demo(&XoxManager::new(), scenario),
        Command::Play { config } => {
            let config = match config {
                Some(path) => XoxConfig::from_file(path)?,
                None => XoxConfig::default(),
            };
            let manager = XoxManager::from_config(&config);
            let stdin = std::io::stdin();
            console::run_session(&manager, stdin.lock(), std::io::stdout())
        }
    }
}
