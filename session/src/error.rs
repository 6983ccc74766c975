//! Session error types.

use thiserror::Error;
use wprof_loader::LoadError;
use wprof_registry::RegistryError;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Definitions could not be read or applied.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Unknown marker or profile reference.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Unknown rule reference.
    #[error("Unknown rule: {id}")]
    UnknownRule { id: String },
}

impl SessionError {
    pub fn unknown_rule(id: impl Into<String>) -> Self {
        Self::UnknownRule { id: id.into() }
    }

    /// Returns true for errors caused by a reference to an undefined
    /// identifier rather than by malformed definitions.
    pub fn is_unknown_reference(&self) -> bool {
        matches!(
            self,
            SessionError::UnknownRule { .. }
                | SessionError::Registry(RegistryError::UnknownProfile { .. })
                | SessionError::Registry(RegistryError::UnknownMarker { .. })
        )
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
