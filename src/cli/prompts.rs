//! Warning and prompt messages for CLI output, and the global quiet flag.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

// =============================================================================
// Quiet mode
// =============================================================================

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Prompts are skipped when quiet or when stdin is not a tty.
pub fn skip_prompt() -> bool {
    quiet() || !is_interactive()
}

// =============================================================================
// Messages
// =============================================================================

/// Yellow, stderr, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red, stderr, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn no_classes_fallback() {
    warn("Warning: no character classes available, using lowercase (a-z)");
}

pub fn clipboard_copied() {
    if !quiet() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Ask whether to print when the clipboard is unavailable. Returns true to print.
/// Quiet or non-interactive runs print without asking.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }

    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}
