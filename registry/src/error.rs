//! Registry error types.

use thiserror::Error;
use wprof_core::{CoreError, MarkerSet};

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur while defining or looking up markers and profiles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Profile '{name}' is already defined as {existing}, cannot redefine as {requested}")]
    DuplicateProfile {
        name: String,
        existing: MarkerSet,
        requested: MarkerSet,
    },

    #[error("Profile '{name}' is reserved and must keep an empty marker set")]
    ReservedProfile { name: String },

    #[error("Unknown profile: {name}")]
    UnknownProfile { name: String },

    #[error("Unknown marker: {name}")]
    UnknownMarker { name: String },

    #[error(transparent)]
    Invalid(#[from] CoreError),
}

impl RegistryError {
    pub fn duplicate_profile(
        name: impl Into<String>,
        existing: MarkerSet,
        requested: MarkerSet,
    ) -> Self {
        Self::DuplicateProfile {
            name: name.into(),
            existing,
            requested,
        }
    }

    pub fn reserved_profile(name: impl Into<String>) -> Self {
        Self::ReservedProfile { name: name.into() }
    }

    pub fn unknown_profile(name: impl Into<String>) -> Self {
        Self::UnknownProfile { name: name.into() }
    }

    pub fn unknown_marker(name: impl Into<String>) -> Self {
        Self::UnknownMarker { name: name.into() }
    }
}
