//! Password output to stdout and the clipboard.

use std::io::{self, Write};

use copypasta::ClipboardProvider;
use passgen::Password;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use super::{CliError, prompts};

/// Buffered writer that wipes its buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    const CAPACITY: usize = 8 * 1024;

    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(Self::CAPACITY),
        }
    }

    /// Write one password followed by a newline.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.write_all(line.as_bytes())?;
        self.write_all(b"\n")
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > self.buf.capacity() {
            self.flush()?;
        }
        // Never grow the buffer: a reallocation leaves an unwiped copy behind.
        if data.len() > self.buf.capacity() {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Write `count` passwords from `next` to `out`, one per line, as they are
/// generated. A failed write (closed pipe) ends the run early without error.
pub fn stream<W, F>(out: W, count: usize, mut next: F) -> passgen::Result<()>
where
    W: Write,
    F: FnMut() -> passgen::Result<Password>,
{
    let mut out = SecureBufWriter::new(out);
    for _ in 0..count {
        let pass = next()?;
        if let Err(e) = out.write_line(&pass) {
            debug!(error = %e, "stdout write failed");
            return Ok(());
        }
    }
    if let Err(e) = out.flush() {
        debug!(error = %e, "stdout write failed");
    }
    Ok(())
}

/// Copy passwords, newline separated, to the clipboard.
pub fn copy<C>(clipboard: &mut C, passwords: &[Password]) -> Result<(), CliError>
where
    C: ClipboardProvider + ?Sized,
{
    let joined = Zeroizing::new(
        passwords
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    );

    clipboard
        .set_contents(joined.to_string())
        .map_err(|e| CliError::Clipboard(e.to_string()))?;

    // Read back so the provider's copy is the only one left
    if let Ok(mut retrieved) = clipboard.get_contents() {
        retrieved.zeroize();
    }
    prompts::clipboard_copied();
    Ok(())
}
