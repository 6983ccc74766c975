//! Consistency checking.

use std::thread;

use tracing::debug;
use wprof_core::{MarkerSet, RuleId};
use wprof_registry::{MarkerRegistry, Profile};
use wprof_resolver::{ActiveRules, ExclusionResolver, Resolve};
use wprof_store::RuleStore;

use crate::config::CheckerConfig;
use crate::finding::{Finding, Report};

/// Consistency checker.
///
/// Runs over an immutable registry and store. Every check returns a report
/// instead of failing, so callers see all inconsistencies from one pass.
pub struct ConsistencyChecker<'a, R = ExclusionResolver> {
    registry: &'a MarkerRegistry,
    store: &'a RuleStore,
    resolver: R,
    config: CheckerConfig,
}

impl<'a> ConsistencyChecker<'a, ExclusionResolver> {
    /// Create a checker using the standard exclusion resolver.
    pub fn new(registry: &'a MarkerRegistry, store: &'a RuleStore) -> Self {
        Self::with_resolver(registry, store, ExclusionResolver)
    }
}

impl<'a, R: Resolve + Sync> ConsistencyChecker<'a, R> {
    /// Create a checker resolving profiles through `resolver`.
    pub fn with_resolver(
        registry: &'a MarkerRegistry,
        store: &'a RuleStore,
        resolver: R,
    ) -> Self {
        Self {
            registry,
            store,
            resolver,
            config: CheckerConfig::default(),
        }
    }

    /// Replace the checker configuration.
    pub fn with_config(mut self, config: CheckerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Run every enabled check.
    ///
    /// Findings are ordered by check (subset, composability, empty profiles,
    /// unused markers), then by profile name and rule identifier.
    pub fn check_all(&self) -> Report {
        let mut report = Report::new();

        if self.config.check_subset {
            report.merge(self.check_subset());
        }
        if self.config.check_composability {
            report.merge(self.check_composability());
        }
        if self.config.check_empty_profiles {
            report.merge(self.check_no_empty_profile());
        }
        if self.config.report_unused_markers {
            report.merge(self.check_unused_markers());
        }

        debug!(
            profiles = self.registry.profile_count(),
            rules = self.store.len(),
            errors = report.errors().count(),
            warnings = report.warnings().count(),
            "consistency check finished"
        );
        report
    }

    /// Every profile must resolve to a subset of the full profile.
    pub fn check_subset(&self) -> Report {
        let full = self.resolver.resolve(self.registry.full_profile(), self.store);
        let mut report = Report::new();

        for profile in self.registry.profiles() {
            let active = self.resolver.resolve(profile, self.store);
            for rule in active.difference(&full) {
                report.push(Finding::profile_not_subset(profile.name(), rule));
            }
        }

        report
    }

    /// For every pair of profiles, the union profile must resolve to exactly
    /// the intersection of the pair's resolutions.
    pub fn check_composability(&self) -> Report {
        let profiles: Vec<&Profile> = self.registry.profiles().collect();
        let resolved: Vec<ActiveRules<'a>> = profiles
            .iter()
            .map(|p| self.resolver.resolve(p, self.store))
            .collect();

        let mut pairs = Vec::new();
        for i in 0..profiles.len() {
            for j in (i + 1)..profiles.len() {
                pairs.push((i, j));
            }
        }

        let threads = self.worker_count(profiles.len(), pairs.len());
        debug!(pairs = pairs.len(), threads, "checking composability");

        let check_pair = |&(i, j): &(usize, usize)| {
            self.check_pair(profiles[i], profiles[j], &resolved[i], &resolved[j])
        };

        if threads <= 1 {
            return pairs.iter().flat_map(check_pair).collect();
        }

        // Each worker takes a contiguous run of pairs; joining in spawn order
        // keeps the merged report identical to the sequential one.
        let per_thread = pairs.len().div_ceil(threads);
        let mut report = Report::new();
        thread::scope(|s| {
            let tasks: Vec<_> = pairs
                .chunks(per_thread)
                .map(|chunk| {
                    s.spawn(move || chunk.iter().flat_map(check_pair).collect::<Vec<_>>())
                })
                .collect();

            for task in tasks {
                let findings = task
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload));
                report.extend(findings);
            }
        });
        report
    }

    /// A profile that leaves at least one known marker active must keep at
    /// least one rule.
    pub fn check_no_empty_profile(&self) -> Report {
        let known = self.registry.all_markers().union(&self.store.markers_in_use());
        let mut report = Report::new();

        for profile in self.registry.profiles() {
            if profile.markers() == &known {
                continue;
            }
            if self.resolver.resolve(profile, self.store).is_empty() {
                report.push(Finding::suspicious_empty_profile(profile.name()));
            }
        }

        report
    }

    /// Markers that tag rules but belong to no profile.
    pub fn check_unused_markers(&self) -> Report {
        let mut in_profiles = MarkerSet::new();
        for profile in self.registry.profiles() {
            in_profiles.extend(profile.markers().iter().cloned());
        }

        self.store
            .markers_in_use()
            .iter()
            .filter(|marker| !in_profiles.contains(marker))
            .map(Finding::unused_marker)
            .collect()
    }

    // ========== Internal checking methods ==========

    /// Compare one pair's union resolution against the intersection of the
    /// pair's resolutions.
    fn check_pair(
        &self,
        first: &Profile,
        second: &Profile,
        first_active: &ActiveRules<'a>,
        second_active: &ActiveRules<'a>,
    ) -> Vec<Finding> {
        let combined = self.resolver.resolve(&first.union(second), self.store);
        let expected = first_active.intersection(second_active);

        let mut disagreements: Vec<(&RuleId, bool)> = combined
            .difference(&expected)
            .into_iter()
            .map(|rule| (rule, true))
            .chain(expected.difference(&combined).into_iter().map(|rule| (rule, false)))
            .collect();
        disagreements.sort();

        disagreements
            .into_iter()
            .map(|(rule, active_in_union)| {
                Finding::composability_violation(rule, first.name(), second.name(), active_in_union)
            })
            .collect()
    }

    /// Number of workers for the pairwise check; 1 means sequential.
    fn worker_count(&self, profiles: usize, pairs: usize) -> usize {
        if !self.config.parallel || profiles < self.config.parallel_threshold || pairs < 2 {
            return 1;
        }
        let available = thread::available_parallelism().map_or(1, |n| n.get());
        let limit = if self.config.max_threads == 0 {
            available
        } else {
            self.config.max_threads.min(available)
        };
        limit.clamp(1, pairs)
    }
}
