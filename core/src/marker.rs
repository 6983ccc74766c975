//! Markers and marker sets.
//!
//! A marker is an opaque short identifier (`N`, `T`, `V`, ...) that tags a
//! rule as belonging to an optional feature. Markers are interned by the
//! registry, so two markers obtained for the same name share one allocation.
//! Equality, ordering and hashing are by string value.

use serde::{Serialize, Serializer};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// An interned marker identifier.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Marker(Arc<str>);

impl Marker {
    /// Create a marker outside any registry.
    ///
    /// Prefer `MarkerRegistry::define_marker`, which interns the name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Get the marker name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns true if both markers share the same interned allocation.
    pub fn same_identity(&self, other: &Marker) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Marker({})", self.0)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Marker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Marker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// An ordered set of markers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MarkerSet(BTreeSet<Marker>);

impl MarkerSet {
    /// Create an empty marker set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a marker. Returns false if it was already present.
    pub fn insert(&mut self, marker: Marker) -> bool {
        self.0.insert(marker)
    }

    pub fn contains(&self, marker: &Marker) -> bool {
        self.0.contains(marker)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate markers in name order.
    pub fn iter(&self) -> btree_set::Iter<'_, Marker> {
        self.0.iter()
    }

    /// Returns true if the two sets share no marker.
    pub fn is_disjoint(&self, other: &MarkerSet) -> bool {
        self.0.is_disjoint(&other.0)
    }

    /// Returns true if every marker of `self` is in `other`.
    pub fn is_subset(&self, other: &MarkerSet) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Markers present in both sets.
    pub fn intersection(&self, other: &MarkerSet) -> MarkerSet {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    /// Markers present in either set.
    pub fn union(&self, other: &MarkerSet) -> MarkerSet {
        Self(self.0.union(&other.0).cloned().collect())
    }
}

impl FromIterator<Marker> for MarkerSet {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Marker> for MarkerSet {
    fn extend<I: IntoIterator<Item = Marker>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for MarkerSet {
    type Item = Marker;
    type IntoIter = btree_set::IntoIter<Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MarkerSet {
    type Item = &'a Marker;
    type IntoIter = btree_set::Iter<'a, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for MarkerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, marker) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", marker)?;
        }
        f.write_str("}")
    }
}

/// Build a `MarkerSet` from marker names.
///
/// ```
/// use wprof_core::markers;
/// let set = markers!["N", "T"];
/// assert_eq!(set.len(), 2);
/// ```
#[macro_export]
macro_rules! markers {
    () => {
        $crate::MarkerSet::new()
    };
    ($($name:expr),+ $(,)?) => {{
        let mut set = $crate::MarkerSet::new();
        $(set.insert($crate::Marker::new($name));)+
        set
    }};
}
