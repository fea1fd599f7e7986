use std::hash::Hash;

/// An insertion-ordered map, defaulting to values of f64 (prices).
///
/// Reports keyed by caller-supplied labels must list entries in the order the
/// caller gave them, and repeated runs must produce identical output, so the
/// std HashMap is replaced by indexmap::IndexMap with a fixed hasher. The
/// newtype keeps that choice out of the public API.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Map<K: Eq + Hash, V = f64>(Ordered<K, V>);

type Ordered<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;

impl<K: Eq + Hash, V> Default for Map<K, V> {
    fn default() -> Self {
        Self(Ordered::default())
    }
}

// Read access (lookups, ordered iteration) is the IndexMap API itself
impl<K: Eq + Hash, V> std::ops::Deref for Map<K, V> {
    type Target = Ordered<K, V>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K: Eq + Hash, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Self(entries.into_iter().collect())
    }
}
