use passgen::CharacterClass;
use passgen::pass::charset::SIMILAR;

use super::form::{Form, MAX_LENGTH, MIN_LENGTH, Status};
use crate::terminal::{
    BOLD, DIM, GREEN, RED, RESET, box_bottom, box_line, box_line_center, box_opt, box_top,
    print_rule,
};

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate)"
}

fn on_off(on: bool) -> String {
    if on {
        format!("{GREEN}on{RESET}")
    } else {
        format!("{DIM}off{RESET}")
    }
}

fn similar_list() -> String {
    SIMILAR
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_form(form: &Form) {
    let title = match form.status {
        Status::Copied => "Copied!",
        _ => "Passgen",
    };
    box_top(title);
    box_line(&format!(
        "  1) Length ({MIN_LENGTH}-{MAX_LENGTH}): {BOLD}{}{RESET}",
        form.length
    ));
    for (n, class) in CharacterClass::ALL.into_iter().enumerate() {
        box_line(&format!(
            "  {}) {}: {}",
            n + 2,
            class.label(),
            on_off(form.classes.includes(class))
        ));
    }
    box_line(&format!(
        "  6) Exclude similar ({}): {}",
        similar_list(),
        on_off(form.exclude_similar)
    ));
    print_rule();
    box_line("  c) Copy   a) About   h) Help   q) Quit");
    print_rule();
    match &form.password {
        Some(pass) => box_line(&format!("  {BOLD}{}{RESET}", pass.as_str())),
        None => box_line(&format!("  {DIM}(press Enter to generate){RESET}")),
    }
    box_bottom();

    match &form.status {
        Status::Fallback => println!(
            "{RED}No character classes selected, used lowercase (a-z){RESET}"
        ),
        Status::Error(msg) => println!("{RED}{msg}{RESET}"),
        Status::Idle | Status::Copied => println!(),
    }
}

pub fn print_about() {
    box_top("About");
    box_line_center(&format!("passgen v{}", env!("CARGO_PKG_VERSION")));
    box_line_center(&format!("Randomness: {}", passgen::OsRandom::source_name()));
    box_bottom();
    println!();
}

pub fn print_help() {
    box_top("Passgen");
    box_line_center("Password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments to open this form.");
    box_line("  2) Client: pass flags (e.g. -l 20 -D) to print passwords.");
    box_line("");
    box_line("USAGE:");
    box_line("  passgen [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_opt("  -l, --length <N>", "Characters per password (default: 16)");
    box_opt("  -n, --number <N>", "How many passwords (default: 1)");
    box_opt("  -L, --lower", "Lowercase letters");
    box_opt("  -U, --upper", "Uppercase letters");
    box_opt("  -D, --digits", "Digits");
    box_opt("  -S, --symbols", "Symbols");
    box_opt(
        "  -x, --exclude-similar",
        "Drop look-alike characters l I 1 0 O o",
    );
    box_opt("  -b, --board", "Copy to the clipboard");
    box_opt("  -q, --quiet", "Suppress warnings");
    box_opt("  -v, --verbose", "Debug logging on stderr (or set PASSGEN_LOG)");
    box_opt("  -i, --interactive", "Open this form");
    box_line("");
    box_line("No class flag selects all four classes. Every selected class");
    box_line("appears at least once in each password.");
    box_line("");
    box_line("The form starts from PASSGEN_LENGTH and");
    box_line("PASSGEN_EXCLUDE_SIMILAR. With -i it also takes -l, -x");
    box_line("and the class flags.");
    box_bottom();
    println!();
}
