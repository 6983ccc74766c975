//! Scenario definition and builder.

use std::path::{Path, PathBuf};

use wprof_checker::CheckerConfig;
use wprof_loader::Format;
use wprof_session::LoadOptions;

use crate::error::{ScenarioError, ScenarioResult};
use crate::expectation::{
    FindingsBuilder, FindingsExpectation, ResolutionBuilder, ResolutionExpectation,
};
use crate::runner::Runner;

/// One resolution to perform, with its expectation.
#[derive(Debug)]
pub struct Resolution {
    /// Profile names; more than one resolves their union.
    pub profiles: Vec<String>,
    pub expectation: ResolutionExpectation,
}

impl Resolution {
    /// Display label, `a+b` for unions.
    pub fn label(&self) -> String {
        self.profiles.join("+")
    }
}

/// Where the definitions come from.
#[derive(Debug, Clone)]
pub(crate) enum Source {
    Fixture(PathBuf),
    Inline(String, Format),
}

/// A complete test scenario.
#[derive(Debug)]
pub struct Scenario {
    /// Scenario name (for reporting).
    name: String,
    source: Option<Source>,
    options: LoadOptions,
    resolutions: Vec<Resolution>,
    /// Checker run, if requested.
    findings: Option<(CheckerConfig, FindingsExpectation)>,
    /// Expected load failure substring.
    load_error: Option<String>,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
            options: LoadOptions::default(),
            resolutions: Vec::new(),
            findings: None,
            load_error: None,
        }
    }

    /// Load definitions from a fixture file (relative to `fixtures/`).
    pub fn fixture(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(Source::Fixture(path.into()));
        self
    }

    /// Load definitions from a string.
    pub fn source(mut self, source: impl Into<String>, format: Format) -> Self {
        self.source = Some(Source::Inline(source.into(), format));
        self
    }

    /// Require markers to be declared before use.
    pub fn strict(mut self) -> Self {
        self.options = LoadOptions::strict();
        self
    }

    /// Resolve one profile and check the result.
    pub fn resolves<F>(self, profile: impl Into<String>, expect: F) -> Self
    where
        F: FnOnce(ResolutionBuilder) -> ResolutionBuilder,
    {
        self.resolves_union([profile.into()], expect)
    }

    /// Resolve the union of several profiles and check the result.
    pub fn resolves_union<I, S, F>(mut self, profiles: I, expect: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: FnOnce(ResolutionBuilder) -> ResolutionBuilder,
    {
        self.resolutions.push(Resolution {
            profiles: profiles.into_iter().map(Into::into).collect(),
            expectation: expect(ResolutionBuilder::new()).build(),
        });
        self
    }

    /// Run the checker with default configuration and check the report.
    pub fn findings<F>(self, expect: F) -> Self
    where
        F: FnOnce(FindingsBuilder) -> FindingsBuilder,
    {
        self.findings_with(CheckerConfig::default(), expect)
    }

    /// Run the checker with `config` and check the report.
    pub fn findings_with<F>(mut self, config: CheckerConfig, expect: F) -> Self
    where
        F: FnOnce(FindingsBuilder) -> FindingsBuilder,
    {
        self.findings = Some((config, expect(FindingsBuilder::new()).build()));
        self
    }

    /// Loading must fail with an error whose message contains `needle`.
    pub fn fails_to_load(mut self, needle: impl Into<String>) -> Self {
        self.load_error = Some(needle.into());
        self
    }

    /// Run the scenario.
    pub fn run(&self) -> ScenarioResult<()> {
        Runner::new(self).run()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    pub fn resolutions(&self) -> &[Resolution] {
        &self.resolutions
    }

    pub fn checker(&self) -> Option<&(CheckerConfig, FindingsExpectation)> {
        self.findings.as_ref()
    }

    pub fn expected_load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// The definitions source, with fixture paths resolved.
    pub(crate) fn resolved_source(&self) -> ScenarioResult<Source> {
        match &self.source {
            Some(Source::Fixture(path)) => {
                let path = Self::resolve_path(path);
                if !path.exists() {
                    return Err(ScenarioError::missing_fixture(path));
                }
                Ok(Source::Fixture(path))
            }
            Some(inline) => Ok(inline.clone()),
            None => Err(ScenarioError::missing_definitions(&self.name)),
        }
    }

    fn resolve_path(path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            fixtures_root().join(path)
        }
    }
}

/// The `fixtures/` directory of this crate.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scenario_builder() {
        let scenario = Scenario::new("test")
            .fixture("wasm.wprof")
            .resolves("deterministic", |e| e.includes("r1"))
            .resolves_union(["deterministic", "scalar"], |e| e.count(1));

        assert_eq!(scenario.name(), "test");
        assert_eq!(scenario.resolutions().len(), 2);
        assert_eq!(scenario.resolutions()[1].label(), "deterministic+scalar");
        assert!(scenario.checker().is_none());
    }

    #[test]
    fn test_missing_source_is_error() {
        let err = Scenario::new("empty").run().unwrap_err();
        assert!(matches!(err, ScenarioError::MissingDefinitions { .. }));
    }

    #[test]
    fn test_missing_fixture_is_error() {
        let err = Scenario::new("gone")
            .fixture("does-not-exist.wprof")
            .run()
            .unwrap_err();
        assert!(matches!(err, ScenarioError::MissingFixture { .. }));
    }
}
