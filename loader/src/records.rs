//! Structured definition records.

use crate::{text, Format, LoadError, LoadResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use wprof_core::{Rule, RuleKind};
use wprof_registry::MarkerRegistry;
use wprof_store::RuleStore;

/// A `{profileName, markers[]}` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(rename = "profileName", alias = "name")]
    pub name: String,
    #[serde(default)]
    pub markers: Vec<String>,
}

impl ProfileRecord {
    pub fn new<I, S>(name: impl Into<String>, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }
}

/// A `{ruleId, kind, markers[]}` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    #[serde(rename = "ruleId", alias = "id")]
    pub id: String,
    pub kind: RuleKind,
    #[serde(default)]
    pub markers: Vec<String>,
}

impl RuleRecord {
    pub fn new<I, S>(id: impl Into<String>, kind: RuleKind, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            kind,
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Everything a definition source declares, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definitions {
    /// Explicitly declared markers.
    #[serde(default)]
    pub markers: Vec<String>,
    #[serde(default)]
    pub profiles: Vec<ProfileRecord>,
    #[serde(default)]
    pub rules: Vec<RuleRecord>,
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse definitions from a string in the given format.
    pub fn parse(source: &str, format: Format) -> LoadResult<Self> {
        match format {
            Format::Text => text::parse(source),
            Format::Json => Ok(serde_json::from_str(source)?),
            Format::Toml => Ok(toml::from_str(source)?),
        }
    }

    /// Load and parse a definitions file, choosing the format by extension.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| LoadError::file_read(path, e))?;
        let format = Format::from_path(path);
        let definitions =
            Self::parse(&source, format).map_err(|e| LoadError::in_file(path, e))?;
        debug!(
            path = %path.display(),
            %format,
            markers = definitions.markers.len(),
            profiles = definitions.profiles.len(),
            rules = definitions.rules.len(),
            "loaded definitions"
        );
        Ok(definitions)
    }

    /// Populate `registry` and build the rule store.
    ///
    /// Declared markers are defined first, then profiles in declaration
    /// order, then rules. Marker references in profiles and rules go through
    /// the registry's marker policy.
    pub fn populate(&self, registry: &mut MarkerRegistry) -> LoadResult<RuleStore> {
        for marker in &self.markers {
            registry.define_marker(marker)?;
        }

        for profile in &self.profiles {
            let markers = registry.intern_set(profile.markers.iter().map(String::as_str))?;
            registry.define_profile(&profile.name, markers)?;
        }

        let rules = self.rules.iter().map(|record| {
            let rule = Rule::new(record.id.as_str(), record.kind);
            rule.with_markers(
                record
                    .markers
                    .iter()
                    .map(wprof_core::Marker::new)
                    .collect(),
            )
        });
        Ok(RuleStore::load(rules, registry)?)
    }
}
