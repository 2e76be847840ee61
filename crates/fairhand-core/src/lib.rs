//! Fairhand Core Library
//!
//! This crate provides the logic for a generalized N-way hand game
//! (rock-paper-scissors with any odd number of moves) played fairly
//! against an automated opponent: the house commits to its move with a
//! keyed digest before the player chooses, and reveals the key
//! afterwards so the commitment can be checked independently.

pub mod crypto;
pub mod error;
pub mod game;
pub mod round;

pub use crypto::{Commitment, EntropySource, OsEntropy, Secret};
pub use error::GameError;
pub use game::{MoveSet, Outcome, OutcomeMatrix};
pub use round::{Round, RoundId, RoundReport};
