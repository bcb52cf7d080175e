use std::env;
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod exits;
mod logging;
mod terminal;
mod tui;

use cli::{Args, CliError};

/// Where a run goes once arguments are parsed.
#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Form,
    Cli,
    NoTerminal,
}

impl Mode {
    /// `-i` insists on the form; a bare run only opens it on a terminal.
    fn pick(interactive: bool, bare: bool, terminal: bool) -> Self {
        match (interactive, bare, terminal) {
            (true, _, false) => Mode::NoTerminal,
            (true, _, true) | (false, true, true) => Mode::Form,
            _ => Mode::Cli,
        }
    }
}

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();

    let bare = env::args_os().len() == 1;
    let args = Args::parse();
    logging::init(args.verbose);

    match Mode::pick(args.interactive, bare, cli::prompts::is_interactive()) {
        Mode::Form => tui::run(&args),
        Mode::Cli => cli::run(args),
        Mode::NoTerminal => cli::fail(&CliError::NoTerminal),
    }
}
