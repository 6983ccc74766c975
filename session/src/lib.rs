//! wprof Session
//!
//! One immutable snapshot of loaded markers, profiles and rules.
//!
//! Responsibilities:
//! - Load definitions into a registry and store (load phase)
//! - Resolve profiles, and unions of profiles, by name
//! - Explain why a rule is excluded under a profile
//! - Run the consistency checker over the snapshot

mod error;
mod options;
mod session;

pub use error::{SessionError, SessionResult};
pub use options::LoadOptions;
pub use session::Session;
