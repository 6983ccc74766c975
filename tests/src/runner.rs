//! Scenario runner.

use std::collections::BTreeSet;

use wprof_loader::Definitions;
use wprof_session::Session;

use crate::error::{ScenarioError, ScenarioResult};
use crate::scenario::{Scenario, Source};

/// Runs a scenario against a freshly loaded session.
pub struct Runner<'s> {
    scenario: &'s Scenario,
}

impl<'s> Runner<'s> {
    pub fn new(scenario: &'s Scenario) -> Self {
        Self { scenario }
    }

    pub fn run(&self) -> ScenarioResult<()> {
        // 1. Load the definitions
        let loaded = match self.scenario.resolved_source()? {
            Source::Fixture(path) => Session::from_file(&path, self.scenario.options()),
            Source::Inline(source, format) => {
                let definitions = Definitions::parse(&source, format)?;
                Session::load(&definitions, self.scenario.options())
            }
        };

        // 2. A scenario expecting a load failure stops here
        if let Some(needle) = self.scenario.expected_load_error() {
            return match loaded {
                Ok(_) => Err(ScenarioError::load_succeeded(self.scenario.name(), needle)),
                Err(err) if err.to_string().contains(needle) => Ok(()),
                Err(err) => Err(err.into()),
            };
        }
        let session = loaded?;

        // 3. Resolve each profile or union and compare
        for resolution in self.scenario.resolutions() {
            let active = session.resolve_combined(&resolution.profiles)?;
            let ids: BTreeSet<String> = active.ids().map(ToString::to_string).collect();
            resolution.expectation.verify(&resolution.label(), &ids)?;
        }

        // 4. Run the checker if requested
        if let Some((config, expectation)) = self.scenario.checker() {
            let report = session.check(config.clone());
            expectation.verify(&report)?;
        }

        Ok(())
    }
}
