//! Memoized resolution keyed by marker set.

use crate::resolve;
use std::collections::{BTreeSet, HashMap};
use tracing::trace;
use wprof_core::{MarkerSet, RuleId};
use wprof_registry::Profile;
use wprof_store::RuleStore;

/// Caches active rule identifiers per profile marker set.
///
/// Bound to one immutable store; two profiles with the same marker set share
/// an entry since they resolve identically.
#[derive(Debug)]
pub struct ResolutionCache<'s> {
    store: &'s RuleStore,
    entries: HashMap<MarkerSet, BTreeSet<RuleId>>,
    hits: usize,
    misses: usize,
}

impl<'s> ResolutionCache<'s> {
    pub fn new(store: &'s RuleStore) -> Self {
        Self {
            store,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Active rule identifiers for `profile`, resolving on first request.
    pub fn get_or_resolve(&mut self, profile: &Profile) -> &BTreeSet<RuleId> {
        if self.entries.contains_key(profile.markers()) {
            self.hits += 1;
        } else {
            self.misses += 1;
            trace!(profile = profile.name(), "resolution cache miss");
            let ids = resolve(profile, self.store).id_set();
            self.entries.insert(profile.markers().clone(), ids);
        }
        &self.entries[profile.markers()]
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
