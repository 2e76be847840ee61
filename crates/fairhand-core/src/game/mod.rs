//! Move sets, the cyclic win rule, and the outcome matrix.

mod matrix;
mod moves;
mod rules;

pub use matrix::OutcomeMatrix;
pub use moves::MoveSet;
pub use rules::Outcome;
