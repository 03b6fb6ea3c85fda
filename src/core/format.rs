//! Notation tags.

use std::fmt;

/// Notation detected for a converter's input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Hex,
    Rgb,
    /// A named color such as `navy` or `ivory`.
    String,
    Ansi,
    Unknown,
}

impl Format {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "HEX",
            Self::Rgb => "RGB",
            Self::String => "STRING",
            Self::Ansi => "ANSI",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
