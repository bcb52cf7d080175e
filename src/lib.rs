//! Password generation from selectable character classes.
//!
//! Every selected class is represented at least once, look-alike characters
//! (`l I 1 0 O o`) can be excluded, and all randomness comes from the OS CSPRNG
//! through the [`RandomSource`] seam.

pub mod error;
pub mod pass;
pub mod rand;

pub use error::{Error, Result};
pub use pass::{
    CharacterClass, ClassSelection, GenerationRequest, Password, assemble, compose, generate,
    generate_with, try_generate_with,
};
pub use crate::rand::{OsRandom, RandomSource};
