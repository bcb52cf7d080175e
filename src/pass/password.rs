//! Generated password handle.

use std::fmt;
use std::ops::Deref;

use zeroize::Zeroizing;

/// A generated password. The buffer is zeroed when dropped.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<&[char]> for Password {
    fn from(chars: &[char]) -> Self {
        Password(Zeroizing::new(chars.iter().collect()))
    }
}

impl Deref for Password {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password({} chars)", self.char_count())
    }
}
