//! Password generation.

pub mod charset;
mod generate;
mod password;
mod request;

pub use charset::{Alphabet, CharacterClass, compose};
pub use generate::{assemble, generate, generate_with, try_generate_with};
pub use password::Password;
pub use request::{ClassSelection, GenerationRequest};
