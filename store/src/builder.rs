//! RuleStoreBuilder for constructing an immutable RuleStore.

use crate::{RuleStore, StoreError, StoreResult};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;
use wprof_core::{validate_identifier, Marker, Rule, RuleId};
use wprof_registry::{MarkerPolicy, MarkerRegistry};

/// Builder collecting rules before they are validated into a `RuleStore`.
#[derive(Debug, Default)]
pub struct RuleStoreBuilder {
    /// Rules in the order they were added.
    rules: Vec<Rule>,
}

impl RuleStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add several rules.
    pub fn extend(&mut self, rules: impl IntoIterator<Item = Rule>) -> &mut Self {
        self.rules.extend(rules);
        self
    }

    /// Validate the rules and build the immutable store.
    ///
    /// Every rule is validated before the registry is touched, so a failed
    /// build leaves `registry` unchanged. Rule markers are then interned
    /// through `registry`, which registers unknown markers or rejects them
    /// depending on its policy. The first invalid rule aborts the build.
    pub fn build(self, registry: &mut MarkerRegistry) -> StoreResult<RuleStore> {
        self.validate(registry)?;

        let mut rules: BTreeMap<RuleId, Rule> = BTreeMap::new();
        let mut by_marker: BTreeMap<Marker, Vec<RuleId>> = BTreeMap::new();

        for rule in self.rules {
            let interned = rule
                .markers
                .iter()
                .map(|marker| registry.intern(marker.name()))
                .collect::<Result<Vec<_>, _>>()?;

            for marker in &interned {
                by_marker
                    .entry(marker.clone())
                    .or_default()
                    .push(rule.id.clone());
            }

            let rule = Rule {
                markers: interned.into_iter().collect(),
                ..rule
            };
            rules.insert(rule.id.clone(), rule);
        }

        // Keep each marker's rule list in identifier order.
        for ids in by_marker.values_mut() {
            ids.sort();
        }

        debug!(
            rules = rules.len(),
            markers = by_marker.len(),
            "built rule store"
        );
        Ok(RuleStore::new(rules, by_marker))
    }

    /// Check identifiers, duplicates and marker references without
    /// registering anything.
    fn validate(&self, registry: &MarkerRegistry) -> StoreResult<()> {
        let mut seen: BTreeSet<&RuleId> = BTreeSet::new();

        for rule in &self.rules {
            validate_identifier("rule", rule.id.as_str())?;
            if !seen.insert(&rule.id) {
                return Err(StoreError::duplicate_rule(rule.id.clone()));
            }

            for marker in &rule.markers {
                if registry.contains_marker(marker.name()) {
                    continue;
                }
                match registry.policy() {
                    MarkerPolicy::AutoRegister => validate_identifier("marker", marker.name())?,
                    MarkerPolicy::Strict => {
                        return Err(StoreError::unknown_marker(rule.id.clone(), marker.name()))
                    }
                }
            }
        }

        Ok(())
    }
}
