//! wprof Resolver
//!
//! Compute the rules active under a profile.
//!
//! A rule is excluded iff at least one of its markers is in the profile's
//! marker set. Resolution is pure: the same profile and store always yield
//! the same active set, and the store is never modified.

mod active;
mod cache;
mod resolve;

pub use active::{ActiveRules, Exclusion};
pub use cache::ResolutionCache;
pub use resolve::{excluded, explain, resolve, ExclusionResolver, Resolve};
