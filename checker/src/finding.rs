//! Consistency findings and the aggregated report.

use serde::Serialize;
use std::fmt;
use wprof_core::{Marker, RuleId};

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// An invariant is broken.
    Error,
    /// Probably a mistake in the definitions, but possibly intentional.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// What a finding is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code")]
pub enum FindingKind {
    /// A profile keeps a rule the full profile does not.
    #[serde(rename = "subset")]
    ProfileNotSubset { profile: String, rule: RuleId },

    /// The union profile of a pair disagrees with the intersection of the
    /// pair's resolutions on one rule.
    #[serde(rename = "composability")]
    ComposabilityViolation {
        rule: RuleId,
        profiles: (String, String),
        /// True if the rule is active under the union profile but not in the
        /// intersection; false for the opposite disagreement.
        active_in_union: bool,
    },

    /// A profile that does not exclude every marker still resolves to nothing.
    #[serde(rename = "empty-profile")]
    SuspiciousEmptyProfile { profile: String },

    /// A marker tags rules but belongs to no profile.
    #[serde(rename = "unused-marker")]
    UnusedMarker { marker: Marker },
}

impl FindingKind {
    /// Stable short code for this kind of finding.
    pub fn code(&self) -> &'static str {
        match self {
            FindingKind::ProfileNotSubset { .. } => "subset",
            FindingKind::ComposabilityViolation { .. } => "composability",
            FindingKind::SuspiciousEmptyProfile { .. } => "empty-profile",
            FindingKind::UnusedMarker { .. } => "unused-marker",
        }
    }
}

/// A single consistency finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// The severity of the finding.
    pub severity: Severity,
    /// What was found.
    #[serde(flatten)]
    pub kind: FindingKind,
    /// Human-readable description.
    pub message: String,
}

impl Finding {
    pub fn new(severity: Severity, kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            severity,
            kind,
            message: message.into(),
        }
    }

    pub fn profile_not_subset(profile: &str, rule: &RuleId) -> Self {
        Self::new(
            Severity::Error,
            FindingKind::ProfileNotSubset {
                profile: profile.to_string(),
                rule: rule.clone(),
            },
            format!(
                "Profile '{}' keeps rule '{}' which the full profile does not",
                profile, rule
            ),
        )
    }

    pub fn composability_violation(
        rule: &RuleId,
        first: &str,
        second: &str,
        active_in_union: bool,
    ) -> Self {
        let detail = if active_in_union {
            "active under the combined profile but excluded by one of the pair"
        } else {
            "active under both profiles but excluded by the combined profile"
        };
        Self::new(
            Severity::Error,
            FindingKind::ComposabilityViolation {
                rule: rule.clone(),
                profiles: (first.to_string(), second.to_string()),
                active_in_union,
            },
            format!(
                "Profiles '{}' and '{}' do not compose: rule '{}' is {}",
                first, second, rule, detail
            ),
        )
    }

    pub fn suspicious_empty_profile(profile: &str) -> Self {
        Self::new(
            Severity::Warning,
            FindingKind::SuspiciousEmptyProfile {
                profile: profile.to_string(),
            },
            format!("Profile '{}' excludes every rule", profile),
        )
    }

    pub fn unused_marker(marker: &Marker) -> Self {
        Self::new(
            Severity::Warning,
            FindingKind::UnusedMarker {
                marker: marker.clone(),
            },
            format!("Marker '{}' tags rules but is part of no profile", marker),
        )
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Check if this is an error-level finding.
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Check if this is a warning-level finding.
    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code(), self.message)
    }
}

/// Ordered collection of findings from one checker pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    findings: Vec<Finding>,
}

impl Report {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finding.
    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Check if there are any findings.
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Check if there are any error-level findings.
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.is_error())
    }

    /// Check if there are any warning-level findings.
    pub fn has_warnings(&self) -> bool {
        self.findings.iter().any(|f| f.is_warning())
    }

    /// Check if there are only warnings.
    pub fn has_only_warnings(&self) -> bool {
        !self.findings.is_empty() && !self.has_errors()
    }

    /// Get all findings in order.
    pub fn all(&self) -> &[Finding] {
        &self.findings
    }

    /// Get error-level findings.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_error())
    }

    /// Get warning-level findings.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_warning())
    }

    /// Get the number of findings.
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Append another report's findings after this one's.
    pub fn merge(&mut self, other: Report) {
        self.findings.extend(other.findings);
    }
}

impl FromIterator<Finding> for Report {
    fn from_iter<I: IntoIterator<Item = Finding>>(iter: I) -> Self {
        Self {
            findings: iter.into_iter().collect(),
        }
    }
}

impl Extend<Finding> for Report {
    fn extend<I: IntoIterator<Item = Finding>>(&mut self, iter: I) {
        self.findings.extend(iter);
    }
}

impl IntoIterator for Report {
    type Item = Finding;
    type IntoIter = std::vec::IntoIter<Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.into_iter()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.iter()
    }
}
