//! Uniform random integers for password generation.
//!
//! Every draw in the generator goes through [`RandomSource`]. Production code uses
//! [`OsRandom`]; tests plug in scripted sources.

mod os;

pub use os::OsRandom;

use crate::error::{Error, Result};

// =============================================================================
// Source trait
// =============================================================================

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns an integer in `[0, bound)`.
    ///
    /// Fails with [`Error::EmptyRange`] when `bound` is zero.
    fn uniform(&mut self, bound: usize) -> Result<usize>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn uniform(&mut self, bound: usize) -> Result<usize> {
        (**self).uniform(bound)
    }
}

// =============================================================================
// Range reduction
// =============================================================================

/// Map 64-bit words from `next_word` onto `[0, bound)` without modulo bias.
///
/// Words in the top `2^64 mod bound` values are rejected and redrawn, so every
/// residue is backed by the same number of accepted words.
pub fn reduce<F>(bound: usize, mut next_word: F) -> Result<usize>
where
    F: FnMut() -> Result<u64>,
{
    if bound == 0 {
        return Err(Error::EmptyRange);
    }

    let bound = bound as u64;
    // 2^64 mod bound
    let tail = (u64::MAX % bound + 1) % bound;

    loop {
        let word = next_word()?;
        if tail == 0 || word < u64::MAX - tail + 1 {
            return Ok((word % bound) as usize);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(words: &[u64]) -> impl FnMut() -> Result<u64> + '_ {
        let mut it = words.iter();
        move || Ok(*it.next().expect("script exhausted"))
    }

    #[test]
    fn zero_bound_is_rejected() {
        assert!(matches!(reduce(0, scripted(&[1])), Err(Error::EmptyRange)));
    }

    #[test]
    fn power_of_two_bound_never_rejects() {
        assert_eq!(reduce(16, scripted(&[u64::MAX])).unwrap(), 15);
        assert_eq!(reduce(1, scripted(&[u64::MAX])).unwrap(), 0);
    }

    #[test]
    fn biased_tail_is_redrawn() {
        // 2^64 mod 3 == 1, so only u64::MAX falls in the tail.
        assert_eq!(reduce(3, scripted(&[u64::MAX, 7])).unwrap(), 1);
        assert_eq!(reduce(3, scripted(&[u64::MAX - 1])).unwrap(), ((u64::MAX - 1) % 3) as usize);
    }

    #[test]
    fn source_errors_propagate() {
        let result = reduce(10, || Err(Error::EmptyRange));
        assert!(matches!(result, Err(Error::EmptyRange)));
    }

    #[test]
    fn os_random_stays_in_range() {
        let mut rng = OsRandom::new();
        for bound in [1usize, 2, 3, 10, 26, 61, 94, 1000] {
            for _ in 0..200 {
                assert!(rng.uniform(bound).unwrap() < bound);
            }
        }
        assert!(matches!(rng.uniform(0), Err(Error::EmptyRange)));
    }

    #[test]
    fn os_random_hits_every_value() {
        let mut rng = OsRandom::new();
        let mut seen = [false; 10];
        for _ in 0..2_000 {
            seen[rng.uniform(10).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
