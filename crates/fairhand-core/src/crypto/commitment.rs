//! Secret and Commitment for the HMAC commit-reveal scheme.
//!
//! The house publishes `HMAC-SHA-256(secret, move name)` before the
//! player chooses, and reveals the secret afterwards. Anyone holding
//! the revealed secret and move can recompute the digest and confirm
//! the committed move never changed.

use std::fmt;
use std::str::FromStr;

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::crypto::EntropySource;
use crate::error::GameError;

type HmacSha256 = Hmac<Sha256>;

/// HMAC key for the commitment scheme: 256 bits, fresh per round
#[derive(Clone, Serialize, Deserialize)]
pub struct Secret([u8; 32]);

impl Secret {
    /// Generate a new random secret from the given entropy source
    pub fn generate<E: EntropySource + ?Sized>(entropy: &mut E) -> Result<Self, GameError> {
        let mut bytes = [0u8; 32];
        entropy.fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for Secret {
    // Redacted: the key must stay hidden until the reveal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(..)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Commitment = HMAC-SHA-256(secret, move name)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment([u8; 32]);

impl Commitment {
    /// Commit to a move name under the given secret
    pub fn new(secret: &Secret, move_name: &str) -> Self {
        let mut mac =
            HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
        mac.update(move_name.as_bytes());
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given secret and move name produce this commitment
    pub fn verify(&self, secret: &Secret, move_name: &str) -> bool {
        *self == Self::new(secret, move_name)
    }
}

impl FromStr for Commitment {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; 32] = hex::decode(s)?
            .try_into()
            .map_err(|_| hex::FromHexError::InvalidStringLength)?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::OsEntropy;

    fn random_secret() -> Secret {
        Secret::generate(&mut OsEntropy).unwrap()
    }

    #[test]
    fn test_commitment_verification() {
        let secret = random_secret();
        let commitment = Commitment::new(&secret, "rock");

        assert!(commitment.verify(&secret, "rock"));
    }

    #[test]
    fn test_commitment_deterministic() {
        let secret = Secret::from_bytes([7u8; 32]);
        let a = Commitment::new(&secret, "rock");
        let b = Commitment::new(&secret, "rock");

        assert_eq!(a, b);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_different_moves_different_commitments() {
        let secret = random_secret();
        let commitment1 = Commitment::new(&secret, "rock");
        let commitment2 = Commitment::new(&secret, "paper");

        assert_ne!(commitment1, commitment2);
    }

    #[test]
    fn test_different_secrets_different_commitments() {
        let secret1 = random_secret();
        let secret2 = random_secret();
        let commitment1 = Commitment::new(&secret1, "rock");
        let commitment2 = Commitment::new(&secret2, "rock");

        assert_ne!(commitment1, commitment2);
    }

    #[test]
    fn test_wrong_move_fails_verification() {
        let secret = random_secret();
        let commitment = Commitment::new(&secret, "rock");

        assert!(!commitment.verify(&secret, "paper"));
    }

    #[test]
    fn test_wrong_secret_fails_verification() {
        let secret1 = random_secret();
        let secret2 = random_secret();
        let commitment = Commitment::new(&secret1, "rock");

        assert!(!commitment.verify(&secret2, "rock"));
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        let secret = Secret::from_bytes([0xAB; 32]);
        let commitment = Commitment::new(&secret, "rock");

        let shown = commitment.to_string();
        assert_eq!(shown.len(), 64);
        assert!(shown.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

        assert_eq!(secret.to_string(), "ab".repeat(32));
    }

    #[test]
    fn test_commitment_hex_round_trip() {
        let secret = random_secret();
        let commitment = Commitment::new(&secret, "lizard");

        let parsed: Commitment = commitment.to_string().parse().unwrap();
        assert_eq!(parsed, commitment);
        assert!(parsed.verify(&secret, "lizard"));
    }

    #[test]
    fn test_commitment_rejects_bad_hex() {
        assert!("zz".repeat(32).parse::<Commitment>().is_err());
        assert!("ab".parse::<Commitment>().is_err());
    }

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret = Secret::from_bytes([0x11; 32]);
        assert_eq!(format!("{:?}", secret), "Secret(..)");
    }
}
