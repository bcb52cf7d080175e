mod args;
mod context;
mod error;
pub mod output;
pub mod prompts;

use std::process::ExitCode;

use tracing::info;

pub use args::Args;
pub use context::Context;
pub use error::CliError;
use passgen::{GenerationRequest, Password};

/// Generate one password; an empty result for a non-zero length is retried
/// with lowercase only.
pub fn generate_with_fallback(request: &GenerationRequest) -> passgen::Result<Password> {
    let pass = passgen::generate(request)?;
    if !pass.is_empty() || request.length == 0 {
        return Ok(pass);
    }

    info!(classes = request.classes.count(), "falling back to lowercase");
    prompts::no_classes_fallback();
    passgen::generate(&request.with_fallback_classes())
}

/// Run CLI mode with already parsed arguments.
pub fn run(args: Args) -> ExitCode {
    prompts::set_quiet(args.quiet);

    let result = Context::new(args)
        .map_err(CliError::from)
        .and_then(|mut ctx| ctx.run());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

/// Report `err` on stderr and turn it into the process exit code.
pub fn fail(err: &CliError) -> ExitCode {
    prompts::error(&err.to_string());
    ExitCode::from(err.exit_status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use passgen::{ClassSelection, Error};

    #[test]
    fn fallback_fills_an_empty_selection() {
        prompts::set_quiet(true);
        let request = GenerationRequest::new(12, ClassSelection::none(), false);
        let pass = generate_with_fallback(&request).unwrap();
        assert_eq!(pass.char_count(), 12);
        assert!(pass.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn zero_length_skips_the_fallback() {
        let request = GenerationRequest::new(0, ClassSelection::none(), false);
        assert!(generate_with_fallback(&request).unwrap().is_empty());
    }

    #[test]
    fn invalid_length_exits_with_usage_code() {
        assert_eq!(CliError::from(Error::InvalidLength(-1)).exit_status(), 2);
        assert_eq!(CliError::from(Error::EmptyRange).exit_status(), 1);
    }

    #[test]
    fn clipboard_failure_is_not_a_success() {
        let err = CliError::Clipboard("no display".into());
        assert_eq!(err.exit_status(), 1);
        assert_eq!(err.to_string(), "Clipboard error: no display");
    }

    #[test]
    fn missing_terminal_is_a_usage_error() {
        assert_eq!(CliError::NoTerminal.exit_status(), 2);
    }
}
