use clap::Parser;

use passgen::{CharacterClass, ClassSelection, GenerationRequest};

/// Generate passwords from selected character classes.
///
/// Every selected class appears at least once. Without class flags all four
/// classes are used.
#[derive(Parser, Debug)]
#[command(name = "passgen", version, about, long_about = None)]
pub struct Args {
    /// Characters per password
    #[arg(
        short,
        long,
        env = "PASSGEN_LENGTH",
        default_value_t = 16,
        allow_negative_numbers = true
    )]
    pub length: i64,

    /// How many passwords to generate
    #[arg(short, long, env = "PASSGEN_NUMBER", default_value_t = 1)]
    pub number: usize,

    /// Include lowercase letters (a-z)
    #[arg(short = 'L', long)]
    pub lower: bool,

    /// Include uppercase letters (A-Z)
    #[arg(short = 'U', long)]
    pub upper: bool,

    /// Include digits (0-9)
    #[arg(short = 'D', long)]
    pub digits: bool,

    /// Include symbols (!@#$%^&*()-_=+[]{}|;:,.<>?)
    #[arg(short = 'S', long)]
    pub symbols: bool,

    /// Leave out look-alike characters: l I 1 0 O o
    #[arg(short = 'x', long, env = "PASSGEN_EXCLUDE_SIMILAR")]
    pub exclude_similar: bool,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long)]
    pub board: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long, env = "PASSGEN_QUIET")]
    pub quiet: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Open the interactive form
    #[arg(short, long)]
    pub interactive: bool,
}

impl Args {
    /// Selected classes; all of them when no class flag is given.
    pub fn classes(&self) -> ClassSelection {
        let selection = ClassSelection::none()
            .with(CharacterClass::Lower, self.lower)
            .with(CharacterClass::Upper, self.upper)
            .with(CharacterClass::Digit, self.digits)
            .with(CharacterClass::Symbol, self.symbols);

        if selection.is_empty() {
            ClassSelection::all()
        } else {
            selection
        }
    }

    pub fn request(&self) -> passgen::Result<GenerationRequest> {
        GenerationRequest::try_new(self.length, self.classes(), self.exclude_similar)
    }
}
