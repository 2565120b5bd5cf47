//! Xox internals - rules engine for two-player tic-tac-toe.
//!
//! Built for hosting frameworks with a blackboard architecture: clients
//! ask for the actions available to them and submit their choice by
//! index, they never touch game state directly.
//!
//! # Architecture
//!
//! - **Model**: [`Board`], [`Player`], [`XoxGame`] and the creation payload
//!   [`XoxInitSettings`]
//! - **Controller**: [`XoxActionGenerator`] lists legal moves,
//!   [`XoxActionInterpreter`] validates and applies them,
//!   [`XoxEndingAnalyzer`] flags finished games, [`XoxRankingGenerator`]
//!   scores them
//! - **Manager**: [`XoxManager`], the keyed registry of running games and
//!   the only contract a host needs
//!
//! # Example
//!
//! ```
//! use xox_internals::{GameId, XoxManager};
//!
//! let manager = XoxManager::new();
//! let sample = GameId::from(42);
//!
//! let actions = manager.actions(sample, "Max");
//! assert_eq!(actions.len(), 9);
//!
//! manager.perform_action(sample, "Max", 4);
//! assert!(!manager.board(sample).unwrap().is_free(1, 1));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod error;
mod model;

// Crate-level exports - Configuration
pub use config::{SampleGameConfig, XoxConfig};

// Crate-level exports - Errors
pub use error::{ConfigError, LogicError, ModelAccessError, XoxError};

// Crate-level exports - Model
pub use model::{BOARD_SIZE, Board, Cell, Player, Seat, XoxGame, XoxInitSettings};

// Crate-level exports - Controller
pub use controller::{
    ActionGenerator, ActionInterpreter, ClaimFieldAction, EndingAnalyzer, GameId,
    RankingGenerator, Ranking, XoxActionGenerator, XoxActionInterpreter, XoxEndingAnalyzer,
    XoxManager, XoxRankingGenerator,
};
