//! Command-line interface for xox.

use clap::{Parser, Subcommand, ValueEnum};

/// Xox - tic-tac-toe rules engine on the terminal
#[derive(Parser, Debug)]
#[command(name = "xox")]
#[command(about = "Drive the Xox rules engine from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a scripted game and print the outcome
    Demo {
        /// Which scripted game to replay
        #[arg(value_enum, default_value_t = Scenario::Draw)]
        scenario: Scenario,
    },

    /// Read manager requests line by line from stdin
    Play {
        /// Path to a TOML engine config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },
}

/// Scripted games for the demo command
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    /// Nine moves, no completed line
    Draw,
    /// First player takes the middle column
    Vertical,
}
