//! The MarkerRegistry - markers and profile definitions.

use crate::{Profile, RegistryError, RegistryResult};
use std::collections::BTreeMap;
use tracing::debug;
use wprof_core::{validate_identifier, Marker, MarkerSet, FULL_PROFILE};

/// How references to markers that were never defined are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkerPolicy {
    /// Register unknown markers on first sight.
    #[default]
    AutoRegister,
    /// Reject unknown markers with `RegistryError::UnknownMarker`.
    Strict,
}

/// The MarkerRegistry holds every known marker and every named profile.
///
/// It is populated during the load phase and read-only afterwards. The `full`
/// profile is defined at construction.
#[derive(Debug)]
pub struct MarkerRegistry {
    /// Interned markers by name.
    markers: BTreeMap<String, Marker>,
    /// Profiles by name.
    profiles: BTreeMap<String, Profile>,
    /// Handling of undefined marker references.
    policy: MarkerPolicy,
}

impl MarkerRegistry {
    /// Create a registry containing only the `full` profile.
    pub fn new() -> Self {
        Self::with_policy(MarkerPolicy::default())
    }

    /// Create a registry with an explicit marker policy.
    pub fn with_policy(policy: MarkerPolicy) -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(FULL_PROFILE.to_string(), Profile::full());
        Self {
            markers: BTreeMap::new(),
            profiles,
            policy,
        }
    }

    pub fn policy(&self) -> MarkerPolicy {
        self.policy
    }

    // ==================== Markers ====================

    /// Define a marker, returning the interned instance.
    ///
    /// Defining a known marker returns the existing instance.
    pub fn define_marker(&mut self, name: &str) -> RegistryResult<Marker> {
        if let Some(existing) = self.markers.get(name) {
            return Ok(existing.clone());
        }
        validate_identifier("marker", name)?;

        let marker = Marker::new(name);
        self.markers.insert(name.to_string(), marker.clone());
        debug!(marker = name, "defined marker");
        Ok(marker)
    }

    /// Look up a marker by name.
    pub fn marker(&self, name: &str) -> RegistryResult<Marker> {
        self.markers
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::unknown_marker(name))
    }

    /// Map a marker reference onto its interned instance, applying the
    /// registry's marker policy to markers that were never defined.
    pub fn intern(&mut self, name: &str) -> RegistryResult<Marker> {
        match self.policy {
            MarkerPolicy::AutoRegister => self.define_marker(name),
            MarkerPolicy::Strict => self.marker(name),
        }
    }

    /// Intern every marker of a set.
    pub fn intern_set<'a, I>(&mut self, names: I) -> RegistryResult<MarkerSet>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().map(|name| self.intern(name)).collect()
    }

    pub fn contains_marker(&self, name: &str) -> bool {
        self.markers.contains_key(name)
    }

    /// All markers in name order.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    /// All known markers as a set.
    pub fn all_markers(&self) -> MarkerSet {
        self.markers.values().cloned().collect()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    // ==================== Profiles ====================

    /// Define a named profile.
    ///
    /// Redefining a profile with the same marker set is a no-op; a different
    /// set fails with `DuplicateProfile`. The `full` profile only accepts the
    /// empty set.
    pub fn define_profile(&mut self, name: &str, markers: MarkerSet) -> RegistryResult<Profile> {
        validate_identifier("profile", name)?;

        if name == FULL_PROFILE && !markers.is_empty() {
            return Err(RegistryError::reserved_profile(name));
        }

        let markers = self.intern_set(markers.iter().map(|m| m.name()))?;

        if let Some(existing) = self.profiles.get(name) {
            if existing.markers() == &markers {
                return Ok(existing.clone());
            }
            return Err(RegistryError::duplicate_profile(
                name,
                existing.markers().clone(),
                markers,
            ));
        }

        let profile = Profile::new(name, markers);
        debug!(profile = name, markers = %profile.markers(), "defined profile");
        self.profiles.insert(name.to_string(), profile.clone());
        Ok(profile)
    }

    /// Look up a profile by name.
    pub fn profile(&self, name: &str) -> RegistryResult<&Profile> {
        self.profiles
            .get(name)
            .ok_or_else(|| RegistryError::unknown_profile(name))
    }

    /// The implicitly defined `full` profile.
    pub fn full_profile(&self) -> &Profile {
        &self.profiles[FULL_PROFILE]
    }

    pub fn contains_profile(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// All profiles in name order, `full` included.
    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.values()
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }
}

impl Default for MarkerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
