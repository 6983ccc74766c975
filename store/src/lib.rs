//! wprof Store
//!
//! The authoritative set of annotated rules.
//!
//! Responsibilities:
//! - Load rules, rejecting duplicate identifiers
//! - Intern rule markers through the marker registry
//! - Index rules by marker for tag queries
//! - Stay immutable after load

mod builder;
mod error;
mod store;

pub use builder::RuleStoreBuilder;
pub use error::{StoreError, StoreResult};
pub use store::RuleStore;
