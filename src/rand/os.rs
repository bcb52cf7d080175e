//! Operating-system CSPRNG.

use ::rand::RngCore;
use ::rand::rngs::OsRng;

use super::{RandomSource, reduce};
use crate::error::Result;

/// Draws from the OS generator (`getrandom`, `/dev/urandom`, `BCryptGenRandom`).
///
/// Holds no state and cannot be seeded, so nothing a caller does can replay its output.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl OsRandom {
    pub fn new() -> Self {
        OsRandom
    }

    pub fn source_name() -> &'static str {
        "OS CSPRNG"
    }

    #[inline]
    fn next_word() -> Result<u64> {
        let mut bytes = [0u8; 8];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(u64::from_le_bytes(bytes))
    }
}

impl RandomSource for OsRandom {
    #[inline]
    fn uniform(&mut self, bound: usize) -> Result<usize> {
        reduce(bound, Self::next_word)
    }
}
