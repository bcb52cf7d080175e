//! Generation parameters.

use super::charset::CharacterClass;
use crate::error::{Error, Result};

/// Which character classes to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSelection {
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl ClassSelection {
    pub const fn all() -> Self {
        Self {
            lower: true,
            upper: true,
            digits: true,
            symbols: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            lower: false,
            upper: false,
            digits: false,
            symbols: false,
        }
    }

    /// Lowercase only. Used when a selection produces nothing.
    pub const fn fallback() -> Self {
        Self {
            lower: true,
            ..Self::none()
        }
    }

    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lower => self.lower,
            CharacterClass::Upper => self.upper,
            CharacterClass::Digit => self.digits,
            CharacterClass::Symbol => self.symbols,
        }
    }

    pub fn with(mut self, class: CharacterClass, on: bool) -> Self {
        self.set(class, on);
        self
    }

    pub fn set(&mut self, class: CharacterClass, on: bool) {
        match class {
            CharacterClass::Lower => self.lower = on,
            CharacterClass::Upper => self.upper = on,
            CharacterClass::Digit => self.digits = on,
            CharacterClass::Symbol => self.symbols = on,
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.set(class, !self.includes(class));
    }

    pub fn is_empty(&self) -> bool {
        !(self.lower || self.upper || self.digits || self.symbols)
    }

    pub fn count(&self) -> usize {
        CharacterClass::ALL
            .into_iter()
            .filter(|&class| self.includes(class))
            .count()
    }
}

impl Default for ClassSelection {
    fn default() -> Self {
        Self::all()
    }
}

/// One password's worth of parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSelection,
    pub exclude_similar: bool,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSelection, exclude_similar: bool) -> Self {
        Self {
            length,
            classes,
            exclude_similar,
        }
    }

    /// Build a request from a signed length, as typed by a user.
    pub fn try_new(length: i64, classes: ClassSelection, exclude_similar: bool) -> Result<Self> {
        let length = usize::try_from(length).map_err(|_| Error::InvalidLength(length))?;
        Ok(Self::new(length, classes, exclude_similar))
    }

    /// Same length and exclusion, lowercase only.
    pub fn with_fallback_classes(&self) -> Self {
        Self {
            classes: ClassSelection::fallback(),
            ..*self
        }
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(16, ClassSelection::all(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_length_is_rejected() {
        let err = GenerationRequest::try_new(-1, ClassSelection::all(), false).unwrap_err();
        assert!(matches!(err, Error::InvalidLength(-1)));
    }

    #[test]
    fn zero_and_positive_lengths_convert() {
        let req = GenerationRequest::try_new(0, ClassSelection::all(), true).unwrap();
        assert_eq!(req.length, 0);
        assert!(req.exclude_similar);
        let req = GenerationRequest::try_new(64, ClassSelection::none(), false).unwrap();
        assert_eq!(req.length, 64);
    }

    #[test]
    fn toggling_flips_one_class() {
        let mut sel = ClassSelection::all();
        sel.toggle(CharacterClass::Digit);
        assert!(!sel.digits);
        assert_eq!(sel.count(), 3);
        sel.toggle(CharacterClass::Digit);
        assert_eq!(sel, ClassSelection::all());
    }

    #[test]
    fn fallback_is_lowercase_only() {
        let req = GenerationRequest::new(12, ClassSelection::none(), true).with_fallback_classes();
        assert_eq!(req.length, 12);
        assert!(req.exclude_similar);
        assert!(req.classes.lower);
        assert_eq!(req.classes.count(), 1);
    }

    #[test]
    fn none_is_empty() {
        assert!(ClassSelection::none().is_empty());
        assert!(!ClassSelection::fallback().is_empty());
    }
}
