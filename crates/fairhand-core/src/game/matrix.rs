//! Pairwise outcome table for help and inspection.

use serde::{Deserialize, Serialize};

use super::{MoveSet, Outcome};

/// N×N table of outcomes, each cell from the row move's perspective.
///
/// Built through the same rule as live rounds, so the table a player
/// inspects can never disagree with the result they are dealt.
/// Recomputed on demand; nothing is cached between invocations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeMatrix {
    moves: Vec<String>,
    // Row-major, moves.len()^2 cells.
    cells: Vec<Outcome>,
}

impl OutcomeMatrix {
    /// Compute the full table for `move_set`
    pub fn build(move_set: &MoveSet) -> Self {
        let n = move_set.len();
        let mut cells = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                cells.push(move_set.outcome_by_index(row, col));
            }
        }
        Self {
            moves: move_set.names().to_vec(),
            cells,
        }
    }

    /// Moves labelling the rows and columns, in cyclic order
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// Side length of the table
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Never true for a built matrix; present for API completeness
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Outcome at `(row, col)`; panics if out of range
    pub fn get(&self, row: usize, col: usize) -> Outcome {
        self.cells[row * self.moves.len() + col]
    }

    /// Iterate rows as `(row move, cells)` pairs
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Outcome])> {
        let n = self.moves.len();
        self.moves
            .iter()
            .enumerate()
            .map(move |(i, name)| (name.as_str(), &self.cells[i * n..(i + 1) * n]))
    }
}
