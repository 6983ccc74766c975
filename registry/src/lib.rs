//! wprof Registry
//!
//! Canonical set of known markers and named profile definitions.
//!
//! Responsibilities:
//! - Intern markers so repeated definitions share one identity
//! - Define profiles idempotently, rejecting conflicting redefinitions
//! - Reserve the `full` profile (empty marker set)
//! - Answer marker and profile lookups by name

mod error;
mod profile;
mod registry;

pub use error::{RegistryError, RegistryResult};
pub use profile::Profile;
pub use registry::{MarkerPolicy, MarkerRegistry};
