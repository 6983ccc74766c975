//! Error types for the scenario framework.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scenario runs.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur when running a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Neither a fixture nor an inline source was given.
    #[error("definitions not specified for scenario '{scenario}'")]
    MissingDefinitions { scenario: String },

    /// The fixture file does not exist.
    #[error("fixture not found: {path}")]
    MissingFixture { path: PathBuf },

    /// The scenario expected loading to fail, but it succeeded.
    #[error("scenario '{scenario}' expected load to fail with '{expected}'")]
    LoadSucceeded { scenario: String, expected: String },

    /// A resolution expectation did not hold.
    #[error("resolution of '{profile}' failed: {message}")]
    ResolutionMismatch { profile: String, message: String },

    /// A findings expectation did not hold.
    #[error("findings check failed: {message}")]
    FindingsMismatch { message: String },

    /// Loading or resolving failed.
    #[error("session error: {0}")]
    Session(#[from] wprof_session::SessionError),

    /// Inline source did not parse.
    #[error("load error: {0}")]
    Load(#[from] wprof_loader::LoadError),
}

impl ScenarioError {
    pub fn missing_definitions(scenario: impl Into<String>) -> Self {
        Self::MissingDefinitions {
            scenario: scenario.into(),
        }
    }

    pub fn missing_fixture(path: impl Into<PathBuf>) -> Self {
        Self::MissingFixture { path: path.into() }
    }

    pub fn load_succeeded(scenario: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::LoadSucceeded {
            scenario: scenario.into(),
            expected: expected.into(),
        }
    }

    pub fn resolution_mismatch(profile: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ResolutionMismatch {
            profile: profile.into(),
            message: message.into(),
        }
    }

    pub fn findings_mismatch(message: impl Into<String>) -> Self {
        Self::FindingsMismatch {
            message: message.into(),
        }
    }
}
