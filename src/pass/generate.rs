//! Password generation.

use tracing::debug;
use zeroize::Zeroizing;

use super::charset::{self, Alphabet};
use super::{GenerationRequest, Password};
use crate::error::{Error, Result};
use crate::rand::{OsRandom, RandomSource};

/// Generate a password with the OS random source.
///
/// Returns an empty password when the length is zero or no class is left to draw from.
pub fn generate(request: &GenerationRequest) -> Result<Password> {
    generate_with(request, &mut OsRandom::new())
}

/// [`generate`] with an injected random source.
pub fn generate_with<R: RandomSource>(request: &GenerationRequest, rng: &mut R) -> Result<Password> {
    match try_generate_with(request, rng) {
        Err(Error::NoClassSelected) => {
            debug!("no character classes to draw from, returning empty password");
            Ok(Password::empty())
        }
        result => result,
    }
}

/// Like [`generate_with`], but reports [`Error::NoClassSelected`] instead of returning empty.
pub fn try_generate_with<R: RandomSource>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Password> {
    let alphabets = charset::compose(request.classes, request.exclude_similar)?;
    assemble(request.length, &alphabets, rng)
}

/// Draw one character per alphabet, pad from their union, then shuffle.
///
/// When `length` is below the number of alphabets the shuffled buffer is
/// truncated, so the result always has exactly `length` characters.
pub fn assemble<R: RandomSource>(
    length: usize,
    alphabets: &[Alphabet],
    rng: &mut R,
) -> Result<Password> {
    if length == 0 || alphabets.is_empty() {
        return Ok(Password::empty());
    }

    let mut buf = Zeroizing::new(Vec::with_capacity(length.max(alphabets.len())));

    for alphabet in alphabets {
        buf.push(pick(alphabet, rng)?);
    }

    let pool = charset::union(alphabets);
    while buf.len() < length {
        buf.push(pick(&pool, rng)?);
    }

    shuffle(&mut buf, rng)?;
    buf.truncate(length);

    debug!(
        length,
        classes = alphabets.len(),
        pool = pool.len(),
        "assembled password"
    );
    Ok(Password::from(&buf[..]))
}

#[inline]
fn pick<R: RandomSource>(chars: &[char], rng: &mut R) -> Result<char> {
    assert!(!chars.is_empty(), "draw from an empty alphabet");
    Ok(chars[rng.uniform(chars.len())?])
}

/// Fisher-Yates, back to front.
#[inline]
fn shuffle<R: RandomSource>(chars: &mut [char], rng: &mut R) -> Result<()> {
    for i in (1..chars.len()).rev() {
        let j = rng.uniform(i + 1)?;
        chars.swap(i, j);
    }
    Ok(())
}
