//! Session over one loaded set of definitions.

use std::path::Path;

use tracing::info;
use wprof_checker::{CheckerConfig, ConsistencyChecker, Report};
use wprof_core::{MarkerSet, Rule};
use wprof_loader::Definitions;
use wprof_registry::{MarkerRegistry, Profile};
use wprof_resolver::{self as resolver, ActiveRules, Exclusion, ResolutionCache};
use wprof_store::RuleStore;

use crate::error::{SessionError, SessionResult};
use crate::options::LoadOptions;

/// A loaded, read-only snapshot of markers, profiles and rules.
#[derive(Debug)]
pub struct Session {
    /// Markers and profiles.
    registry: MarkerRegistry,
    /// Annotated rules.
    store: RuleStore,
}

impl Session {
    /// Build a session from already-populated components.
    pub fn from_parts(registry: MarkerRegistry, store: RuleStore) -> Self {
        Self { registry, store }
    }

    /// Load a session from parsed definitions.
    pub fn load(definitions: &Definitions, options: &LoadOptions) -> SessionResult<Self> {
        let mut registry = MarkerRegistry::with_policy(options.marker_policy());
        let store = definitions.populate(&mut registry)?;
        info!(
            markers = registry.marker_count(),
            profiles = registry.profile_count(),
            rules = store.len(),
            "session loaded"
        );
        Ok(Self::from_parts(registry, store))
    }

    /// Load a session from a definitions file.
    pub fn from_file(path: &Path, options: &LoadOptions) -> SessionResult<Self> {
        let definitions = Definitions::load(path)?;
        Self::load(&definitions, options)
    }

    /// Get the registry.
    pub fn registry(&self) -> &MarkerRegistry {
        &self.registry
    }

    /// Get the rule store.
    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    /// Look up a profile by name.
    pub fn profile(&self, name: &str) -> SessionResult<&Profile> {
        Ok(self.registry.profile(name)?)
    }

    /// The profile supporting only the common subset of several profiles.
    ///
    /// No names yields the full profile; one name yields that profile.
    pub fn combined_profile<S: AsRef<str>>(&self, names: &[S]) -> SessionResult<Profile> {
        let mut combined: Option<Profile> = None;
        for name in names {
            let profile = self.profile(name.as_ref())?;
            combined = Some(match combined {
                None => profile.clone(),
                Some(acc) => acc.union(profile),
            });
        }
        Ok(combined.unwrap_or_else(|| self.registry.full_profile().clone()))
    }

    /// Resolve a named profile.
    pub fn resolve(&self, name: &str) -> SessionResult<ActiveRules<'_>> {
        let profile = self.profile(name)?;
        Ok(resolver::resolve(profile, &self.store))
    }

    /// Resolve the union of several named profiles.
    pub fn resolve_combined<S: AsRef<str>>(&self, names: &[S]) -> SessionResult<ActiveRules<'_>> {
        let profile = self.combined_profile(names)?;
        Ok(resolver::resolve(&profile, &self.store))
    }

    /// Rules excluded under a named profile, with the responsible markers.
    pub fn excluded(&self, name: &str) -> SessionResult<Vec<Exclusion<'_>>> {
        let profile = self.profile(name)?;
        Ok(resolver::excluded(profile, &self.store))
    }

    /// The markers that exclude `rule_id` under the named profile.
    ///
    /// Empty when the rule is active.
    pub fn explain(&self, profile: &str, rule_id: &str) -> SessionResult<MarkerSet> {
        let profile = self.profile(profile)?;
        let rule = self.rule(rule_id)?;
        Ok(resolver::explain(rule, profile))
    }

    /// Look up a rule by identifier.
    pub fn rule(&self, id: &str) -> SessionResult<&Rule> {
        self.store
            .rule(id)
            .ok_or_else(|| SessionError::unknown_rule(id))
    }

    /// All rules tagged with the named marker.
    pub fn rules_tagged_with(&self, marker: &str) -> SessionResult<Vec<&Rule>> {
        let marker = self.registry.marker(marker)?;
        Ok(self.store.rules_tagged_with(&marker))
    }

    /// A resolution cache bound to this session's store.
    pub fn cache(&self) -> ResolutionCache<'_> {
        ResolutionCache::new(&self.store)
    }

    /// Run the consistency checker.
    pub fn check(&self, config: CheckerConfig) -> Report {
        ConsistencyChecker::new(&self.registry, &self.store)
            .with_config(config)
            .check_all()
    }
}
