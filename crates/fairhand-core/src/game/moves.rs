//! Validated move sets.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Ordered, duplicate-free collection of move names.
///
/// The order defines cyclic adjacency: each move beats the half of the
/// set that precedes it and loses to the half that follows it, which is
/// why the cardinality must be odd and at least 3. Immutable once
/// built; every other core operation takes the set by reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSet {
    moves: Vec<String>,
}

impl MoveSet {
    /// Validate and build a move set
    pub fn new<I, S>(moves: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();

        if moves.len() < 3 {
            return Err(GameError::InvalidMoveSet(format!(
                "need at least 3 moves, got {}",
                moves.len()
            )));
        }
        if moves.len() % 2 == 0 {
            return Err(GameError::InvalidMoveSet(format!(
                "move count must be odd, got {}",
                moves.len()
            )));
        }
        if moves.iter().any(|m| m.is_empty()) {
            return Err(GameError::InvalidMoveSet("empty move name".to_string()));
        }
        for (i, m) in moves.iter().enumerate() {
            if moves[..i].contains(m) {
                return Err(GameError::InvalidMoveSet(format!("duplicate move: {m}")));
            }
        }

        Ok(Self { moves })
    }

    /// Number of moves (always odd, >= 3)
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Never true for a constructed set; present for API completeness
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// How many moves each move beats (and loses to)
    pub fn half(&self) -> usize {
        (self.moves.len() - 1) / 2
    }

    /// Cyclic index of a move name
    pub fn position(&self, name: &str) -> Result<usize, GameError> {
        self.moves
            .iter()
            .position(|m| m == name)
            .ok_or_else(|| GameError::UnknownMove(name.to_string()))
    }

    /// Move name at `index`; panics if out of range
    pub fn name(&self, index: usize) -> &str {
        &self.moves[index]
    }

    /// All move names in cyclic order
    pub fn names(&self) -> &[String] {
        &self.moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_move_set() {
        let set = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.half(), 1);
        assert_eq!(set.name(1), "paper");
        assert_eq!(set.position("scissors").unwrap(), 2);
    }

    #[test]
    fn test_rejects_even_count() {
        let err = MoveSet::new(["a", "b"]).unwrap_err();
        assert!(matches!(err, GameError::InvalidMoveSet(_)));

        let err = MoveSet::new(["a", "b", "c", "d"]).unwrap_err();
        assert!(matches!(err, GameError::InvalidMoveSet(_)));
    }

    #[test]
    fn test_rejects_too_few() {
        assert!(matches!(
            MoveSet::new(["a"]).unwrap_err(),
            GameError::InvalidMoveSet(_)
        ));
        assert!(matches!(
            MoveSet::new(Vec::<String>::new()).unwrap_err(),
            GameError::InvalidMoveSet(_)
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = MoveSet::new(["a", "a", "b"]).unwrap_err();
        assert!(matches!(err, GameError::InvalidMoveSet(_)));
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = MoveSet::new(["a", "", "b"]).unwrap_err();
        assert!(matches!(err, GameError::InvalidMoveSet(_)));
    }

    #[test]
    fn test_unknown_move() {
        let set = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        let err = set.position("spock").unwrap_err();
        assert!(matches!(err, GameError::UnknownMove(_)));
    }

    #[test]
    fn test_order_is_preserved() {
        let names = ["rock", "spock", "paper", "lizard", "scissors"];
        let set = MoveSet::new(names).unwrap();
        for (i, name) in names.iter().enumerate() {
            assert_eq!(set.name(i), *name);
            assert_eq!(set.position(name).unwrap(), i);
        }
    }
}
