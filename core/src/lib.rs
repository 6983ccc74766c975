//! wprof Core Types
//!
//! This crate provides the foundational types used throughout wprof:
//! - Markers (interned identifiers tagging optional features) and marker sets
//! - Rule identity and kind
//! - Rules (grammar productions or semantic/validation clauses)
//! - Identifier validation shared by the registry and the store

mod error;
mod marker;
mod rule;

pub use error::*;
pub use marker::*;
pub use rule::*;

/// Name of the implicitly defined profile that excludes nothing.
pub const FULL_PROFILE: &str = "full";
