//! The RuleStore - immutable rule lookup.

use crate::{RuleStoreBuilder, StoreResult};
use std::collections::BTreeMap;
use wprof_core::{Marker, MarkerSet, Rule, RuleId, RuleKind};
use wprof_registry::MarkerRegistry;

/// The RuleStore holds every annotated rule, keyed by identifier.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct RuleStore {
    /// Rules by identifier.
    rules: BTreeMap<RuleId, Rule>,
    /// Rule identifiers indexed by marker.
    by_marker: BTreeMap<Marker, Vec<RuleId>>,
}

impl RuleStore {
    pub(crate) fn new(
        rules: BTreeMap<RuleId, Rule>,
        by_marker: BTreeMap<Marker, Vec<RuleId>>,
    ) -> Self {
        Self { rules, by_marker }
    }

    /// An empty store.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a sequence of rules into a new store.
    pub fn load(
        rules: impl IntoIterator<Item = Rule>,
        registry: &mut MarkerRegistry,
    ) -> StoreResult<Self> {
        let mut builder = RuleStoreBuilder::new();
        builder.extend(rules);
        builder.build(registry)
    }

    // ==================== Rule Lookups ====================

    /// Get a rule by identifier.
    pub fn rule(&self, id: &str) -> Option<&Rule> {
        self.rules.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rules.contains_key(id)
    }

    /// All rules in identifier order.
    pub fn all_rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    /// All rule identifiers in order.
    pub fn ids(&self) -> impl Iterator<Item = &RuleId> {
        self.rules.keys()
    }

    /// All rules of one kind, in identifier order.
    pub fn rules_of_kind(&self, kind: RuleKind) -> impl Iterator<Item = &Rule> {
        self.rules.values().filter(move |r| r.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    // ==================== Marker Queries ====================

    /// All rules carrying `marker`, in identifier order.
    pub fn rules_tagged_with(&self, marker: &Marker) -> Vec<&Rule> {
        self.by_marker
            .get(marker)
            .map(|ids| ids.iter().filter_map(|id| self.rules.get(id)).collect())
            .unwrap_or_default()
    }

    /// Every marker that tags at least one rule.
    pub fn markers_in_use(&self) -> MarkerSet {
        self.by_marker.keys().cloned().collect()
    }
}
