//! Configuration for consistency checking

use serde::Deserialize;

/// Which checks run and how the pairwise check is scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Assert every profile resolves to a subset of the full profile
    pub check_subset: bool,
    /// Verify pairwise composability
    pub check_composability: bool,
    /// Warn about profiles that resolve to nothing
    pub check_empty_profiles: bool,
    /// Warn about markers that tag rules but belong to no profile
    pub report_unused_markers: bool,
    /// Spread the pairwise check over worker threads
    pub parallel: bool,
    /// Minimum profile count before the pairwise check goes parallel
    pub parallel_threshold: usize,
    /// Upper bound on worker threads (0 = available parallelism)
    pub max_threads: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            check_subset: true,
            check_composability: true,
            check_empty_profiles: true,
            report_unused_markers: false,
            parallel: true,
            parallel_threshold: 8,
            max_threads: 0,
        }
    }
}

impl CheckerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unused_markers(mut self, enabled: bool) -> Self {
        self.report_unused_markers = enabled;
        self
    }

    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    pub fn with_parallel_threshold(mut self, profiles: usize) -> Self {
        self.parallel_threshold = profiles;
        self
    }

    pub fn with_max_threads(mut self, threads: usize) -> Self {
        self.max_threads = threads;
        self
    }

    /// Every check on, pairwise check always sequential.
    pub fn exhaustive() -> Self {
        Self {
            report_unused_markers: true,
            parallel: false,
            ..Self::default()
        }
    }
}
