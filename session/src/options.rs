//! Load-phase options.

use serde::Deserialize;
use wprof_registry::MarkerPolicy;

/// Options controlling how definitions are loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Reject markers that were not declared before use.
    pub strict_markers: bool,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            strict_markers: true,
        }
    }

    pub fn marker_policy(&self) -> MarkerPolicy {
        if self.strict_markers {
            MarkerPolicy::Strict
        } else {
            MarkerPolicy::AutoRegister
        }
    }
}
