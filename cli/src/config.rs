//! `wprof.toml` configuration.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use wprof_checker::CheckerConfig;
use wprof_session::LoadOptions;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "wprof.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// `[check]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckSection {
    #[serde(flatten)]
    pub checker: CheckerConfig,
    /// Treat warnings as failures for the exit status.
    pub fail_on_warnings: bool,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub format: OutputFormat,
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub load: LoadOptions,
    pub check: CheckSection,
    pub output: OutputSection,
}

impl CliConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `wprof.toml` in `dir` is used
    /// when present, otherwise defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = dir.join(CONFIG_FILE);
                if !candidate.exists() {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };
        Self::from_file(&path)
    }

    /// Apply command-line flags, which take precedence over the file.
    ///
    /// Flags only switch settings on; an unset flag keeps the file's value.
    pub fn apply_flags(&mut self, strict: bool, json: bool) {
        if strict {
            self.load.strict_markers = true;
        }
        if json {
            self.output.format = OutputFormat::Json;
        }
    }

    /// Read and parse one configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }
}
