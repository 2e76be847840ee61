//! The half-range cyclic win rule.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::MoveSet;
use crate::error::GameError;

/// Result of comparing two moves, from the first move's perspective
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Draw,
}

impl Outcome {
    /// Convert to string for display
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::FirstWins => "First wins",
            Outcome::SecondWins => "Second wins",
            Outcome::Draw => "Draw",
        }
    }

    /// The same comparison seen from the other side
    pub fn flipped(&self) -> Outcome {
        match self {
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl MoveSet {
    /// Decide `first` vs `second` under the cyclic rule.
    ///
    /// With `N` moves and `half = (N - 1) / 2`, a move beats the `half`
    /// moves that precede it cyclically and loses to the `half` that
    /// follow it, the classic rock-paper-scissors pattern (paper comes
    /// after rock and beats it). Total and antisymmetric: for distinct
    /// moves exactly one side wins, and swapping the arguments flips
    /// the outcome.
    pub fn outcome(&self, first: &str, second: &str) -> Result<Outcome, GameError> {
        let ia = self.position(first)?;
        let ib = self.position(second)?;
        Ok(self.outcome_by_index(ia, ib))
    }

    /// Index-based form of [`MoveSet::outcome`]; indices must be in range
    pub(crate) fn outcome_by_index(&self, ia: usize, ib: usize) -> Outcome {
        if ia == ib {
            return Outcome::Draw;
        }
        // Cyclic distance from `first` forward to `second`; the far
        // half of the cycle is the losing side for `second`.
        let ahead = (ib + self.len() - ia) % self.len();
        if ahead > self.half() {
            Outcome::FirstWins
        } else {
            Outcome::SecondWins
        }
    }
}
