//! Store error types.

use thiserror::Error;
use wprof_core::{CoreError, RuleId};
use wprof_registry::RegistryError;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while loading rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Duplicate rule: {id}")]
    DuplicateRule { id: RuleId },

    #[error("Rule '{rule}' references unknown marker: {marker}")]
    UnknownMarker { rule: RuleId, marker: String },

    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl StoreError {
    pub fn duplicate_rule(id: impl Into<RuleId>) -> Self {
        Self::DuplicateRule { id: id.into() }
    }

    pub fn unknown_marker(rule: impl Into<RuleId>, marker: impl Into<String>) -> Self {
        Self::UnknownMarker {
            rule: rule.into(),
            marker: marker.into(),
        }
    }
}
