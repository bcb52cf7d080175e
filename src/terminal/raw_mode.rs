//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use std::io;

/// Enables raw mode for its lifetime. Leaves raw mode alone on drop if it was
/// already on when the guard was created.
pub struct RawModeGuard {
    restore: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        let already_raw = is_raw_mode_enabled().unwrap_or(false);
        if !already_raw {
            enable_raw_mode()?;
        }
        Ok(Self {
            restore: !already_raw,
        })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.restore {
            let _ = disable_raw_mode();
        }
    }
}
