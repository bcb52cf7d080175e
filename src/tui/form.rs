//! Form state for the interactive mode.

use passgen::{CharacterClass, ClassSelection, GenerationRequest, Password};

use crate::cli::{Args, generate_with_fallback};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 64;
pub const DEFAULT_LENGTH: usize = 16;

/// Line shown under the form after the last action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Copied,
    Fallback,
    Error(String),
}

pub struct Form {
    pub length: usize,
    pub classes: ClassSelection,
    pub exclude_similar: bool,
    pub password: Option<Password>,
    pub status: Status,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: ClassSelection::all(),
            exclude_similar: false,
            password: None,
            status: Status::Idle,
        }
    }
}

impl Form {
    /// Start from the command line and `PASSGEN_*` settings. A length outside
    /// the form's range keeps the default and shows why.
    pub fn from_args(args: &Args) -> Self {
        let mut form = Self {
            classes: args.classes(),
            exclude_similar: args.exclude_similar,
            ..Self::default()
        };
        form.set_length(usize::try_from(args.length).unwrap_or(0));
        form
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length, self.classes, self.exclude_similar)
    }

    /// Accepts lengths in `MIN_LENGTH..=MAX_LENGTH`.
    pub fn set_length(&mut self, length: usize) {
        if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            self.length = length;
            self.status = Status::Idle;
        } else {
            self.status = Status::Error(format!(
                "Length must be between {MIN_LENGTH} and {MAX_LENGTH}"
            ));
        }
    }

    /// "Copied!" lasts for one redraw.
    pub fn settle(&mut self) {
        if self.status == Status::Copied {
            self.status = Status::Idle;
        }
    }

    /// Menu options 2-5 toggle a class, 6 toggles similar-character exclusion.
    /// Returns false for any other option.
    pub fn toggle(&mut self, option: u32) -> bool {
        let class = match option {
            2 => CharacterClass::Lower,
            3 => CharacterClass::Upper,
            4 => CharacterClass::Digit,
            5 => CharacterClass::Symbol,
            6 => {
                self.exclude_similar = !self.exclude_similar;
                self.status = Status::Idle;
                return true;
            }
            _ => return false,
        };
        self.classes.toggle(class);
        self.status = Status::Idle;
        true
    }

    /// Generate into `password`. An empty selection falls back to lowercase.
    pub fn generate(&mut self) {
        let request = self.request();
        match generate_with_fallback(&request) {
            Ok(pass) => {
                self.status = if request.classes.is_empty() {
                    Status::Fallback
                } else {
                    Status::Idle
                };
                self.password = Some(pass);
            }
            Err(e) => {
                self.password = None;
                self.status = Status::Error(e.to_string());
            }
        }
    }
}
