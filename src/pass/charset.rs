//! Character set building for password generation.

use tracing::trace;

use super::ClassSelection;
use crate::error::{Error, Result};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

/// Characters dropped by the exclude-similar option.
pub const SIMILAR: &str = "lI10Oo";

/// Filtered characters of one class. Never empty once returned by [`compose`].
pub type Alphabet = Vec<char>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Composition order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lower => "Lowercase (a-z)",
            CharacterClass::Upper => "Uppercase (A-Z)",
            CharacterClass::Digit => "Digits (0-9)",
            CharacterClass::Symbol => "Symbols (!@#$%)",
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }
}

#[inline]
pub fn is_similar(c: char) -> bool {
    SIMILAR.contains(c)
}

/// Build one alphabet per selected class, in [`CharacterClass::ALL`] order.
///
/// Classes left empty by the similar filter are skipped. Fails with
/// [`Error::NoClassSelected`] when nothing remains to draw from.
pub fn compose(classes: ClassSelection, exclude_similar: bool) -> Result<Vec<Alphabet>> {
    let alphabets: Vec<Alphabet> = CharacterClass::ALL
        .into_iter()
        .filter(|&class| classes.includes(class))
        .map(|class| {
            class
                .chars()
                .chars()
                .filter(|&c| !(exclude_similar && is_similar(c)))
                .collect::<Alphabet>()
        })
        .filter(|alphabet| !alphabet.is_empty())
        .collect();

    if alphabets.is_empty() {
        return Err(Error::NoClassSelected);
    }

    trace!(classes = alphabets.len(), exclude_similar, "composed alphabets");
    Ok(alphabets)
}

/// Concatenate alphabets into the padding pool. Duplicates are kept.
pub fn union(alphabets: &[Alphabet]) -> Vec<char> {
    alphabets.iter().flatten().copied().collect()
}
