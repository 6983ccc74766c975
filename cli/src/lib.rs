//! wprof CLI library - command-line front end for profile resolution.
//!
//! - `config`: `wprof.toml` loading
//! - `format`: text and JSON rendering of resolutions and reports
//! - `commands`: subcommand execution

pub mod commands;
pub mod config;
pub mod format;

pub use commands::{hint, Command, ExitStatus, Outcome};
pub use config::{CliConfig, ConfigError, OutputFormat};
