//! Active rule sets produced by resolution.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use wprof_core::{MarkerSet, Rule, RuleId};

/// The rules active under one profile.
///
/// A view borrowing from the store it was resolved against; rules are kept in
/// identifier order, keyed by the borrowed identifier text.
#[derive(Debug, Clone)]
pub struct ActiveRules<'s> {
    profile: String,
    rules: BTreeMap<&'s str, &'s Rule>,
}

impl<'s> ActiveRules<'s> {
    pub fn new(profile: impl Into<String>, rules: impl IntoIterator<Item = &'s Rule>) -> Self {
        Self {
            profile: profile.into(),
            rules: rules.into_iter().map(|r| (r.id.as_str(), r)).collect(),
        }
    }

    /// Name of the profile this set was resolved for.
    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rules.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&'s Rule> {
        self.rules.get(id).copied()
    }

    /// Active rules in identifier order.
    pub fn rules(&self) -> impl Iterator<Item = &'s Rule> + '_ {
        self.rules.values().copied()
    }

    /// Active rule identifiers in order.
    pub fn ids(&self) -> impl Iterator<Item = &'s RuleId> + '_ {
        self.rules.values().map(|rule| &rule.id)
    }

    /// Owned copy of the active identifiers.
    pub fn id_set(&self) -> BTreeSet<RuleId> {
        self.ids().cloned().collect()
    }

    /// Returns true if every active rule here is also active in `other`.
    pub fn is_subset_of(&self, other: &ActiveRules<'_>) -> bool {
        self.rules.keys().all(|id| other.rules.contains_key(*id))
    }

    /// Rules active in both sets.
    pub fn intersection(&self, other: &ActiveRules<'_>) -> ActiveRules<'s> {
        ActiveRules {
            profile: format!("{}&{}", self.profile, other.profile),
            rules: self
                .rules
                .iter()
                .map(|(&id, &rule)| (id, rule))
                .filter(|(id, _)| other.rules.contains_key(*id))
                .collect(),
        }
    }

    /// Identifiers active here but not in `other`.
    pub fn difference(&self, other: &ActiveRules<'_>) -> Vec<&'s RuleId> {
        self.rules
            .values()
            .filter(|rule| !other.rules.contains_key(rule.id.as_str()))
            .map(|rule| &rule.id)
            .collect()
    }
}

/// Two active sets are equal when they hold the same rule identifiers.
impl PartialEq for ActiveRules<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.rules.len() == other.rules.len() && self.is_subset_of(other)
    }
}

impl Eq for ActiveRules<'_> {}

/// A rule left out of a resolution, with the profile markers that excluded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion<'s> {
    pub rule: &'s Rule,
    pub markers: MarkerSet,
}
