//! Definition source formats.

use std::fmt;
use std::path::Path;

/// The syntax of a definition source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Line-based annotated text.
    Text,
    Json,
    Toml,
}

impl Format {
    /// Pick a format from a file extension; anything unrecognized is text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Text,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => f.write_str("text"),
            Format::Json => f.write_str("JSON"),
            Format::Toml => f.write_str("TOML"),
        }
    }
}
