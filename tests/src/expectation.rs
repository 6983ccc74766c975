//! Expectations on resolutions and checker reports.

use std::collections::BTreeSet;

use wprof_checker::Report;

use crate::error::{ScenarioError, ScenarioResult};

/// What a resolution must produce.
#[derive(Debug, Default, Clone)]
pub struct ResolutionExpectation {
    /// Exact active set.
    pub active: Option<BTreeSet<String>>,
    /// Rules that must be active.
    pub includes: Vec<String>,
    /// Rules that must not be active.
    pub excludes: Vec<String>,
    pub count: Option<usize>,
    pub empty: Option<bool>,
}

impl ResolutionExpectation {
    /// Verify against the active rule ids.
    pub fn verify(&self, profile: &str, active: &BTreeSet<String>) -> ScenarioResult<()> {
        let fail = |message: String| Err(ScenarioError::resolution_mismatch(profile, message));

        if let Some(expected) = &self.active {
            if expected != active {
                return fail(format!("expected {:?}, got {:?}", expected, active));
            }
        }

        for id in &self.includes {
            if !active.contains(id) {
                return fail(format!("expected '{}' to be active in {:?}", id, active));
            }
        }

        for id in &self.excludes {
            if active.contains(id) {
                return fail(format!("expected '{}' to be excluded", id));
            }
        }

        if let Some(count) = self.count {
            if active.len() != count {
                return fail(format!("expected {} rules, got {}", count, active.len()));
            }
        }

        if let Some(empty) = self.empty {
            if active.is_empty() != empty {
                return fail(format!("expected empty={}, got {:?}", empty, active));
            }
        }

        Ok(())
    }
}

/// Fluent builder for [`ResolutionExpectation`].
#[derive(Debug, Default)]
pub struct ResolutionBuilder {
    expectation: ResolutionExpectation,
}

impl ResolutionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active set must be exactly these rules.
    pub fn active<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expectation.active = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn includes(mut self, id: impl Into<String>) -> Self {
        self.expectation.includes.push(id.into());
        self
    }

    pub fn excludes(mut self, id: impl Into<String>) -> Self {
        self.expectation.excludes.push(id.into());
        self
    }

    pub fn count(mut self, n: usize) -> Self {
        self.expectation.count = Some(n);
        self
    }

    pub fn empty(mut self) -> Self {
        self.expectation.empty = Some(true);
        self
    }

    pub fn build(self) -> ResolutionExpectation {
        self.expectation
    }
}

/// What the checker report must contain.
#[derive(Debug, Default, Clone)]
pub struct FindingsExpectation {
    pub errors: Option<usize>,
    pub warnings: Option<usize>,
    /// Finding codes in report order.
    pub codes: Option<Vec<String>>,
    /// Substrings that must appear in some finding message.
    pub mentions: Vec<String>,
}

impl FindingsExpectation {
    pub fn verify(&self, report: &Report) -> ScenarioResult<()> {
        let fail = |message: String| Err(ScenarioError::findings_mismatch(message));

        if let Some(errors) = self.errors {
            let actual = report.errors().count();
            if actual != errors {
                return fail(format!("expected {} errors, got {}", errors, actual));
            }
        }

        if let Some(warnings) = self.warnings {
            let actual = report.warnings().count();
            if actual != warnings {
                return fail(format!("expected {} warnings, got {}", warnings, actual));
            }
        }

        if let Some(codes) = &self.codes {
            let actual: Vec<&str> = report.all().iter().map(|f| f.code()).collect();
            if actual != *codes {
                return fail(format!("expected codes {:?}, got {:?}", codes, actual));
            }
        }

        for needle in &self.mentions {
            if !report.all().iter().any(|f| f.message.contains(needle.as_str())) {
                return fail(format!("no finding mentions '{}'", needle));
            }
        }

        Ok(())
    }
}

/// Fluent builder for [`FindingsExpectation`].
#[derive(Debug, Default)]
pub struct FindingsBuilder {
    expectation: FindingsExpectation,
}

impl FindingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The report must be empty.
    pub fn none(self) -> Self {
        self.codes(Vec::<String>::new())
    }

    pub fn errors(mut self, n: usize) -> Self {
        self.expectation.errors = Some(n);
        self
    }

    pub fn warnings(mut self, n: usize) -> Self {
        self.expectation.warnings = Some(n);
        self
    }

    pub fn codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expectation.codes = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    pub fn mentions(mut self, needle: impl Into<String>) -> Self {
        self.expectation.mentions.push(needle.into());
        self
    }

    pub fn build(self) -> FindingsExpectation {
        self.expectation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wprof_checker::Finding;

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_exact_active_set() {
        let expectation = ResolutionBuilder::new().active(["r1", "r3"]).build();

        assert!(expectation.verify("p", &set(&["r1", "r3"])).is_ok());
        assert!(expectation.verify("p", &set(&["r1"])).is_err());
    }

    #[test]
    fn test_includes_and_excludes() {
        let expectation = ResolutionBuilder::new()
            .includes("r1")
            .excludes("r4")
            .count(2)
            .build();

        assert!(expectation.verify("p", &set(&["r1", "r2"])).is_ok());
        let err = expectation
            .verify("p", &set(&["r1", "r4"]))
            .unwrap_err();
        assert!(err.to_string().contains("'r4'"));
    }

    #[test]
    fn test_findings_codes_in_order() {
        let report: Report = vec![
            Finding::suspicious_empty_profile("a"),
            Finding::suspicious_empty_profile("b"),
        ]
        .into_iter()
        .collect();

        let expectation = FindingsBuilder::new()
            .warnings(2)
            .errors(0)
            .codes(["empty-profile", "empty-profile"])
            .mentions("'b'")
            .build();

        assert!(expectation.verify(&report).is_ok());
        assert!(FindingsBuilder::new().none().build().verify(&report).is_err());
    }
}
