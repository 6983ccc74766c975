//! Common error types for wprof.

use thiserror::Error;

/// Errors raised while validating identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Identifier is empty or contains whitespace or a reserved character.
    #[error("Invalid {kind} identifier: {name:?}")]
    InvalidIdentifier { kind: &'static str, name: String },

    /// Unrecognized rule kind.
    #[error("Unknown rule kind: {0} (expected 'grammar' or 'semantic')")]
    UnknownRuleKind(String),
}

impl CoreError {
    pub fn invalid_identifier(kind: &'static str, name: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind,
            name: name.into(),
        }
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Characters the text format uses as separators or comment starts.
pub const RESERVED_CHARS: &[char] = &[',', '[', ']', ':', '#'];

/// Check that `name` is usable as a marker, rule or profile identifier.
///
/// Identifiers must be non-empty and free of whitespace and of
/// [`RESERVED_CHARS`], so every name loaded from any format can be written
/// back in the text format.
pub fn validate_identifier(kind: &'static str, name: &str) -> CoreResult<()> {
    if name.is_empty()
        || name
            .chars()
            .any(|c| c.is_whitespace() || RESERVED_CHARS.contains(&c))
    {
        return Err(CoreError::invalid_identifier(kind, name));
    }
    Ok(())
}
