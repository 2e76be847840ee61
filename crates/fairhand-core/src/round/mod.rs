//! Round orchestration: commit, choose, reveal.
//!
//! A [`Round`] owns everything one round needs, so independent rounds
//! (or tests) never share state. Opening a round picks the house move
//! and publishes its commitment; playing it consumes the round,
//! resolves the outcome, and reveals the secret in a [`RoundReport`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::crypto::{Commitment, EntropySource, Secret};
use crate::error::GameError;
use crate::game::{MoveSet, Outcome};

/// Unique round identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    /// Create a new random round ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for RoundId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Debug for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundId({})", self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One round in progress: the house has committed, the player has not
/// yet chosen.
///
/// Holds the only copy of the secret. [`Round::play`] takes the round
/// by value, so a secret is revealed at most once and never reused.
#[derive(Debug)]
pub struct Round {
    id: RoundId,
    move_set: MoveSet,
    house_index: usize,
    secret: Secret,
    commitment: Commitment,
}

impl Round {
    /// Open a round: pick the house move uniformly and commit to it
    pub fn open<E: EntropySource + ?Sized>(
        move_set: MoveSet,
        entropy: &mut E,
    ) -> Result<Self, GameError> {
        let house_index = entropy.pick_index(move_set.len())?;
        let secret = Secret::generate(entropy)?;
        let commitment = Commitment::new(&secret, move_set.name(house_index));
        Ok(Self {
            id: RoundId::new(),
            move_set,
            house_index,
            secret,
            commitment,
        })
    }

    /// Round identifier
    pub fn id(&self) -> RoundId {
        self.id
    }

    /// The digest to show the player before they choose
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// The move set this round is played over
    pub fn move_set(&self) -> &MoveSet {
        &self.move_set
    }

    /// Resolve the round against the player's move and reveal the secret.
    ///
    /// Fails with [`GameError::UnknownMove`] if `player_move` is not in
    /// the move set; the round is spent either way.
    pub fn play(self, player_move: &str) -> Result<RoundReport, GameError> {
        let player_index = self.move_set.position(player_move)?;
        let outcome = self.move_set.outcome_by_index(player_index, self.house_index);
        Ok(RoundReport {
            id: self.id,
            commitment: self.commitment,
            player_move: self.move_set.name(player_index).to_string(),
            house_move: self.move_set.name(self.house_index).to_string(),
            outcome,
            secret: self.secret,
        })
    }
}

/// Everything revealed at the end of a round.
///
/// Carries what an external verifier needs: the digest that was
/// published before the player chose, both moves, and the secret key.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundReport {
    pub id: RoundId,
    pub commitment: Commitment,
    pub player_move: String,
    pub house_move: String,
    /// From the player's perspective: `FirstWins` means the player won
    pub outcome: Outcome,
    pub secret: Secret,
}

impl RoundReport {
    /// Recompute the digest from the revealed secret and house move
    pub fn verify(&self) -> bool {
        self.commitment.verify(&self.secret, &self.house_move)
    }
}
