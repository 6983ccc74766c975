//! wprof Loader
//!
//! Turn an external definition source into marker, profile and rule records,
//! and populate a registry and store from them.
//!
//! Supported sources:
//! - Annotated text (`.wprof`): one declaration per line
//! - JSON and TOML documents with `markers`, `profiles` and `rules` arrays

mod error;
mod format;
mod records;
mod text;

pub use error::{LoadError, LoadResult};
pub use format::Format;
pub use records::{Definitions, ProfileRecord, RuleRecord};
