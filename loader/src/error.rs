//! Error types for definition loading.

use std::path::PathBuf;
use thiserror::Error;
use wprof_registry::RegistryError;
use wprof_store::StoreError;

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur while reading or applying definitions.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read a file.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed line in an annotated text source.
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// Malformed JSON or TOML document.
    #[error("failed to parse {format} definitions: {message}")]
    Document {
        format: &'static str,
        message: String,
    },

    /// A source file failed to parse.
    #[error("failed to parse definitions file '{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: Box<LoadError>,
    },

    /// Marker or profile definition rejected by the registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Rule rejected by the store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LoadError {
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }

    pub fn document(format: &'static str, message: impl Into<String>) -> Self {
        Self::Document {
            format,
            message: message.into(),
        }
    }

    pub fn in_file(path: impl Into<PathBuf>, source: LoadError) -> Self {
        Self::File {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::document("JSON", e.to_string())
    }
}

impl From<toml::de::Error> for LoadError {
    fn from(e: toml::de::Error) -> Self {
        Self::document("TOML", e.to_string())
    }
}
