//! Error types for the Xox rules engine.
//!
//! Two tiers exist. A [`LogicError`] is a rejected request (illegal move,
//! unknown player, bad coordinates) and leaves the game untouched. A
//! [`ModelAccessError`] is internal misuse of the model (writing an
//! occupied cell, an out-of-range seat index) and carries the source
//! location it was raised from.

use derive_more::{Display, Error, From};
use tracing::instrument;

/// A request the rules refuse to carry out.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LogicError {
    /// Coordinates outside of `[0, 2]`.
    #[display("Coordinates ({}, {}) are out of bounds", x, y)]
    CoordinateOutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
    },

    /// The player does not take part in the game.
    #[display("Player {} is not a participant of this game", _0)]
    UnknownPlayer(String),

    /// The game already ended.
    #[display("Game is already finished")]
    GameFinished,

    /// The action is not among the currently legal actions.
    #[display("Provided action can not be applied on game - is not a valid action")]
    InvalidAction,

    /// Game creation settings are unusable.
    #[display("Invalid game settings: {}", _0)]
    InvalidSettings(String),
}

impl std::error::Error for LogicError {}

/// Model modification that would lead to an inconsistent state.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Model access error: {} at {}:{}", message, file, line)]
pub struct ModelAccessError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ModelAccessError {
    /// Creates a new model access error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Any failure raised while interpreting an action.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum XoxError {
    /// Rejected request.
    #[display("{}", _0)]
    Logic(LogicError),
    /// Internal model misuse.
    #[display("{}", _0)]
    Access(ModelAccessError),
}

impl std::error::Error for XoxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            XoxError::Logic(e) => Some(e),
            XoxError::Access(e) => Some(e),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
