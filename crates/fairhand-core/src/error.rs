//! Error types for core operations.

use thiserror::Error;

/// Errors from fairhand core operations
#[derive(Debug, Error)]
pub enum GameError {
    /// The move list failed construction-time validation. Never raised
    /// later; a built [`crate::MoveSet`] is always valid.
    #[error("Invalid move set: {0}")]
    InvalidMoveSet(String),

    /// A move name that is not part of the active move set was passed
    /// to the core. Indicates a caller bug; fatal to the round.
    #[error("Unknown move: {0}")]
    UnknownMove(String),

    /// The secure random source failed. Fatal; never substituted with
    /// a weaker source.
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}
