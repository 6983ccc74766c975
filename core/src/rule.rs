//! Rule identity and rule records.

use crate::{CoreError, Marker, MarkerSet};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a rule (its name or rule numbering).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RuleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RuleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// What part of a language definition a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// A grammar production (binary or text format).
    Grammar,
    /// A semantic, validation or execution clause.
    Semantic,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Grammar => "grammar",
            RuleKind::Semantic => "semantic",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grammar" => Ok(RuleKind::Grammar),
            "semantic" => Ok(RuleKind::Semantic),
            other => Err(CoreError::UnknownRuleKind(other.to_string())),
        }
    }
}

/// One annotated production or semantic rule.
///
/// A rule tagged with several markers is excluded as soon as any one of them
/// is active in a profile. A rule with no markers is universal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub id: RuleId,
    pub kind: RuleKind,
    pub markers: MarkerSet,
}

impl Rule {
    /// Create an untagged rule.
    pub fn new(id: impl Into<RuleId>, kind: RuleKind) -> Self {
        Self {
            id: id.into(),
            kind,
            markers: MarkerSet::new(),
        }
    }

    pub fn grammar(id: impl Into<RuleId>) -> Self {
        Self::new(id, RuleKind::Grammar)
    }

    pub fn semantic(id: impl Into<RuleId>) -> Self {
        Self::new(id, RuleKind::Semantic)
    }

    /// Tag the rule with a marker.
    pub fn marker(mut self, marker: Marker) -> Self {
        self.markers.insert(marker);
        self
    }

    /// Replace the rule's marker set.
    pub fn with_markers(mut self, markers: MarkerSet) -> Self {
        self.markers = markers;
        self
    }

    /// Returns true if no profile can exclude this rule.
    pub fn is_universal(&self) -> bool {
        self.markers.is_empty()
    }

    /// Returns true if the rule carries the given marker.
    pub fn is_tagged_with(&self, marker: &Marker) -> bool {
        self.markers.contains(marker)
    }
}
