//! Terminal output utilities.
//!
//! Box drawing and ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const RED: &str = "\x1b[38;5;9m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and reset colors.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// ┌─ Title ─────┐
pub fn box_top(title: &str) {
    println!("{}", top_border(title));
}

fn top_border(title: &str) -> String {
    if title.is_empty() {
        return format!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    }
    let title_part = format!("─ {} ", title);
    let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
    format!("┌{}{}┐", title_part, "─".repeat(remaining))
}

/// │ content        │
pub fn box_line(content: &str) {
    println!("{}", padded_line(content));
}

fn padded_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// │    content     │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    println!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    );
}

/// └──────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, wrapping the description.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 26;
    let desc_col = inner_width - flag_col;

    let mut lines = wrap(desc, desc_col).into_iter();
    let first = lines.next().unwrap_or_default();
    println!("{}", padded_line(&format!("{:<flag_col$}{}", flag, first)));

    let indent = " ".repeat(flag_col);
    for line in lines {
        println!("{}", padded_line(&format!("{}{}", indent, line)));
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Display width, ignoring ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_have_no_width() {
        assert_eq!(console_width(&format!("{GREEN}on{RESET}")), 2);
        assert_eq!(console_width("plain"), 5);
    }

    #[test]
    fn lines_fill_the_box() {
        assert_eq!(padded_line("abc").chars().count(), BOX_WIDTH);
        assert_eq!(top_border("Passgen").chars().count(), BOX_WIDTH);
        assert_eq!(top_border("").chars().count(), BOX_WIDTH);
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
    }
}
