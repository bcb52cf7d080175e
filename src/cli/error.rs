use thiserror::Error;

/// Failures of the binary, on top of the generator's own.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Generate(#[from] passgen::Error),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    #[error("Interactive mode needs a terminal")]
    NoTerminal,
}

impl CliError {
    /// Process exit status: 2 for bad input, 1 for everything else.
    pub fn exit_status(&self) -> u8 {
        match self {
            CliError::Generate(passgen::Error::InvalidLength(_)) | CliError::NoTerminal => 2,
            _ => 1,
        }
    }
}
