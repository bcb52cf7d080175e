use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// What a key press did to the line being edited.
enum Edit {
    Continue,
    Submit,
    Cancel,
}

/// Single-line editor state.
struct Line {
    text: String,
    cursor: usize, // char index
}

impl Line {
    fn new(initial: &str) -> Self {
        Self {
            text: initial.to_string(),
            cursor: initial.chars().count(),
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn apply(&mut self, key: KeyEvent, accept: impl Fn(char) -> bool) -> Edit {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                // process::exit skips destructors
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') if ctrl => return Edit::Cancel,
            KeyCode::Char('u') if ctrl => {
                self.text.clear();
                self.cursor = 0;
            }
            KeyCode::Esc => return Edit::Cancel,
            KeyCode::Enter => return Edit::Submit,
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.text.remove(at);
            }
            KeyCode::Delete if self.cursor < self.len() => {
                let at = self.byte_index(self.cursor);
                self.text.remove(at);
            }
            KeyCode::Left if self.cursor > 0 => self.cursor -= 1,
            KeyCode::Right if self.cursor < self.len() => self.cursor += 1,
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.len(),
            KeyCode::Char(c) if !ctrl && accept(c) => {
                let at = self.byte_index(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Edit::Continue
    }
}

/// `Ok(None)` when cancelled. Without a usable terminal (raw mode refused,
/// event read failed) the error is returned so callers can stop prompting.
fn edit_line(
    prompt: &str,
    initial: &str,
    accept: impl Fn(char) -> bool,
) -> io::Result<Option<String>> {
    let mut line = Line::new(initial);

    // Restores cooked mode on every return path
    let guard = RawModeGuard::new()?;

    print!("{}: {}", prompt, line.text);
    flush();

    let mut drawn = line.len();
    let outcome = loop {
        let event = match read() {
            Ok(event) => event,
            Err(e) => {
                drop(guard);
                println!();
                return Err(e);
            }
        };
        let Event::Key(key) = event else { continue };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        match line.apply(key, &accept) {
            Edit::Continue => {}
            Edit::Submit => break Some(()),
            Edit::Cancel => break None,
        }
        print!("\r{}: {}", prompt, " ".repeat(drawn + 1));
        print!("\r{}: {}", prompt, line.text);
        print!("\x1b[{}G", prompt.chars().count() + 3 + line.cursor);
        flush();
        drawn = line.len();
    };

    drop(guard);
    println!();
    Ok(outcome.map(|_| line.text))
}

/// Free text input. `Ok(None)` when cancelled with Esc.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> io::Result<Option<String>> {
    edit_line(prompt, initial_value, |_| true)
}

/// Digits-only input. `Ok(None)` when cancelled or left empty.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> io::Result<Option<usize>> {
    let digits = edit_line(prompt, &initial_value.to_string(), |c| c.is_ascii_digit())?;
    Ok(digits.and_then(|d| d.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_keys(line: &mut Line, codes: &[KeyCode]) {
        for &code in codes {
            line.apply(key(code), |c| c.is_ascii_digit());
        }
    }

    #[test]
    fn digits_only_filter() {
        let mut line = Line::new("1");
        type_keys(&mut line, &[KeyCode::Char('a'), KeyCode::Char('6')]);
        assert_eq!(line.text, "16");
    }

    #[test]
    fn cursor_edits_in_place() {
        let mut line = Line::new("24");
        type_keys(
            &mut line,
            &[KeyCode::Left, KeyCode::Backspace, KeyCode::Char('3'), KeyCode::End, KeyCode::Char('2')],
        );
        assert_eq!(line.text, "342");
        type_keys(&mut line, &[KeyCode::Home, KeyCode::Delete]);
        assert_eq!(line.text, "42");
    }

    #[test]
    fn enter_and_esc_end_editing() {
        let mut line = Line::new("");
        assert!(matches!(line.apply(key(KeyCode::Enter), |_| true), Edit::Submit));
        assert!(matches!(line.apply(key(KeyCode::Esc), |_| true), Edit::Cancel));
    }
}
