//! Cryptographic primitives for the commit-reveal scheme.
//!
//! This module provides:
//! - Secret and Commitment for the HMAC commitment scheme
//! - EntropySource for injectable secure randomness

mod commitment;
mod entropy;

pub use commitment::{Commitment, Secret};
pub use entropy::{EntropySource, OsEntropy};
