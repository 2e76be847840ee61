//! Injectable source of cryptographically secure randomness.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::GameError;

/// Capability for secure random bytes and uniform selection.
///
/// Production code uses [`OsEntropy`]; tests substitute a deterministic
/// implementation. Uniform selection is built on `fill_bytes`, so a
/// scripted source drives move selection too.
pub trait EntropySource {
    /// Fill `dest` with cryptographically secure random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), GameError>;

    /// Pick a uniform index in `0..n`.
    fn pick_index(&mut self, n: usize) -> Result<usize, GameError> {
        debug_assert!(n > 0 && n <= u32::MAX as usize);
        // Rejection sampling: draws past the largest multiple of n
        // would bias the modulus and are redrawn.
        let limit = (1u64 << 32) - ((1u64 << 32) % n as u64);
        loop {
            let mut buf = [0u8; 4];
            self.fill_bytes(&mut buf)?;
            let draw = u32::from_le_bytes(buf) as u64;
            if draw < limit {
                return Ok((draw % n as u64) as usize);
            }
        }
    }
}

/// Operating-system CSPRNG
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), GameError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| GameError::EntropyUnavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ByteStream {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl EntropySource for ByteStream {
        fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), GameError> {
            for b in dest.iter_mut() {
                *b = self.bytes.get(self.pos).copied().unwrap_or(0);
                self.pos += 1;
            }
            Ok(())
        }
    }

    #[test]
    fn test_pick_index_in_range() {
        let mut entropy = OsEntropy;
        for _ in 0..100 {
            let idx = entropy.pick_index(5).unwrap();
            assert!(idx < 5);
        }
    }

    #[test]
    fn test_pick_index_follows_bytes() {
        // Little-endian draw of 3, well inside the acceptance zone.
        let mut entropy = ByteStream {
            bytes: vec![3, 0, 0, 0],
            pos: 0,
        };
        assert_eq!(entropy.pick_index(5).unwrap(), 3);
    }

    #[test]
    fn test_pick_index_rejects_biased_draws() {
        // First draw is u32::MAX, which falls in the rejection zone for
        // n = 5; the second draw (7) must be used instead.
        let mut entropy = ByteStream {
            bytes: vec![0xff, 0xff, 0xff, 0xff, 7, 0, 0, 0],
            pos: 0,
        };
        assert_eq!(entropy.pick_index(5).unwrap(), 2); // 7 % 5
    }

    #[test]
    fn test_os_entropy_fills() {
        let mut entropy = OsEntropy;
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        entropy.fill_bytes(&mut a).unwrap();
        entropy.fill_bytes(&mut b).unwrap();
        // 2^-256 false-failure probability.
        assert_ne!(a, b);
    }
}
