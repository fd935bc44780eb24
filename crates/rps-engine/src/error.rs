//! Error types

use thiserror::Error;

/// A string that does not name one of the three moves
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown move: {0:?} (expected rock, paper or scissors)")]
pub struct ParseMoveError(pub String);

/// Engine configuration could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be a percentage in 0..=100 (got {value})")]
    OutOfRange { field: &'static str, value: u8 },
}

/// A session refused a round
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("match is over after {rounds} rounds")]
    MatchOver { rounds: u32 },
}
