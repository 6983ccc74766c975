//! Exclusion-by-any-marker resolution.

use crate::{ActiveRules, Exclusion};
use tracing::trace;
use wprof_core::{MarkerSet, Rule};
use wprof_registry::Profile;
use wprof_store::RuleStore;

/// Resolve the rules active under `profile`.
///
/// Every rule whose marker set is disjoint from the profile's marker set is
/// kept. The full profile therefore keeps every rule, and an untagged rule is
/// kept by every profile.
pub fn resolve<'s>(profile: &Profile, store: &'s RuleStore) -> ActiveRules<'s> {
    let active = ActiveRules::new(
        profile.name(),
        store.all_rules().filter(|rule| !profile.excludes(rule)),
    );
    trace!(
        profile = profile.name(),
        active = active.len(),
        total = store.len(),
        "resolved profile"
    );
    active
}

/// Rules excluded under `profile`, each with the markers responsible.
pub fn excluded<'s>(profile: &Profile, store: &'s RuleStore) -> Vec<Exclusion<'s>> {
    store
        .all_rules()
        .filter_map(|rule| {
            let markers = explain(rule, profile);
            (!markers.is_empty()).then_some(Exclusion { rule, markers })
        })
        .collect()
}

/// The markers of `rule` that exclude it under `profile`.
///
/// Empty when the rule is active.
pub fn explain(rule: &Rule, profile: &Profile) -> MarkerSet {
    profile.excluding_markers(rule)
}

/// Strategy for turning a profile into an active rule set.
///
/// The consistency checker resolves profiles through this seam so it can
/// validate alternative resolution strategies.
pub trait Resolve {
    fn resolve<'s>(&self, profile: &Profile, store: &'s RuleStore) -> ActiveRules<'s>;
}

/// The standard exclusion-only resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExclusionResolver;

impl Resolve for ExclusionResolver {
    fn resolve<'s>(&self, profile: &Profile, store: &'s RuleStore) -> ActiveRules<'s> {
        resolve(profile, store)
    }
}
