//! Named profiles.

use serde::Serialize;
use std::fmt;
use wprof_core::{MarkerSet, Rule, FULL_PROFILE};

/// A named set of markers defining a language subset by exclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    name: String,
    markers: MarkerSet,
}

impl Profile {
    pub fn new(name: impl Into<String>, markers: MarkerSet) -> Self {
        Self {
            name: name.into(),
            markers,
        }
    }

    /// The profile that excludes nothing.
    pub fn full() -> Self {
        Self::new(FULL_PROFILE, MarkerSet::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// Returns true if the profile has an empty marker set.
    pub fn is_full(&self) -> bool {
        self.markers.is_empty()
    }

    /// The profile supporting only the common subset of `self` and `other`.
    ///
    /// Its marker set is the union of both marker sets; its name joins both
    /// names with `+`.
    pub fn union(&self, other: &Profile) -> Profile {
        Profile {
            name: format!("{}+{}", self.name, other.name),
            markers: self.markers.union(&other.markers),
        }
    }

    /// Returns true if the rule is excluded under this profile.
    pub fn excludes(&self, rule: &Rule) -> bool {
        !rule.markers.is_disjoint(&self.markers)
    }

    /// Markers of `rule` that are active in this profile.
    pub fn excluding_markers(&self, rule: &Rule) -> MarkerSet {
        rule.markers.intersection(&self.markers)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.markers)
    }
}
