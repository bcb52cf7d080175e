//! Error type shared by the generator and its callers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid password length: {0}")]
    InvalidLength(i64),

    #[error("No character classes selected")]
    NoClassSelected,

    #[error("Cannot draw from an empty range")]
    EmptyRange,

    #[error("Secure random source unavailable: {0}")]
    RandomSourceUnavailable(#[from] ::rand::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
