//! wprof Checker
//!
//! Validate cross-profile invariants over a loaded registry and store.
//!
//! Responsibilities:
//! - Assert every profile resolves to a subset of the full profile
//! - Verify pairwise composability of profiles
//! - Warn about profiles that exclude every rule
//! - Optionally warn about markers no profile uses
//! - Aggregate every finding into one ordered report, never failing early

mod checker;
mod config;
mod finding;

pub use checker::ConsistencyChecker;
pub use config::CheckerConfig;
pub use finding::{Finding, FindingKind, Report, Severity};
