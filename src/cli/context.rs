//! CLI context - bundles parsed arguments and clipboard state.

use std::io;

use copypasta::ClipboardContext;
use tracing::{debug, info};

use super::{Args, CliError, generate_with_fallback, output, prompts};
use passgen::{GenerationRequest, Password};

/// Application context for CLI mode.
pub struct Context {
    pub args: Args,
    pub request: GenerationRequest,
    pub clipboard: Option<ClipboardContext>,
}

impl Context {
    /// Build the generation request from parsed arguments.
    pub fn new(args: Args) -> passgen::Result<Self> {
        let request = args.request()?;
        debug!(?request, number = args.number, "cli request");
        Ok(Self {
            args,
            request,
            clipboard: None,
        })
    }

    /// Run CLI. Declining the clipboard fallback ends the run without output.
    pub fn run(&mut self) -> Result<(), CliError> {
        if !self.open_clipboard() {
            return Ok(());
        }
        self.generate_output()
    }

    /// Returns false when the user aborts.
    fn open_clipboard(&mut self) -> bool {
        if !self.args.board {
            return true;
        }
        match ClipboardContext::new() {
            Ok(ctx) => {
                self.clipboard = Some(ctx);
                true
            }
            Err(e) => {
                info!(error = %e, "clipboard unavailable");
                prompts::clipboard_fallback_prompt()
            }
        }
    }

    /// Generate passwords and handle output. Stdout gets each password as it
    /// is made; the clipboard takes the whole batch at once.
    pub fn generate_output(&mut self) -> Result<(), CliError> {
        let request = &self.request;
        let next = || generate_with_fallback(request);

        match self.clipboard.as_mut() {
            Some(ctx) => {
                let passwords = (0..self.args.number)
                    .map(|_| next())
                    .collect::<passgen::Result<Vec<Password>>>()?;
                output::copy(ctx, &passwords)
            }
            None => Ok(output::stream(io::stdout().lock(), self.args.number, next)?),
        }
    }
}
