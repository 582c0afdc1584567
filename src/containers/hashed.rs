use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Hash-indexed mapping, keyed both by the key itself and by its string
/// projection.
///
/// The two maps isolate the cost of hashing a rich key type from the cost
/// of hashing a plain string over the same entries. Key membership is O(1)
/// amortized; value membership is O(n) by construction, and that asymmetry
/// is the comparison point against the other variants.
#[derive(Debug, Clone)]
pub struct HashContainer<K, V> {
    by_key: HashMap<K, V>,
    by_projection: HashMap<String, V>,
}

impl<K, V> HashContainer<K, V>
where
    K: Clone + Eq + Hash + Display,
    V: Clone,
{
    /// Inserts every pair into both maps. Duplicate keys overwrite
    /// silently: last write wins.
    pub fn from_pairs(pairs: &[(K, V)]) -> Self {
        let mut by_key = HashMap::with_capacity(pairs.len());
        let mut by_projection = HashMap::with_capacity(pairs.len());
        for (key, value) in pairs {
            by_projection.insert(key.to_string(), value.clone());
            by_key.insert(key.clone(), value.clone());
        }
        Self {
            by_key,
            by_projection,
        }
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// O(1) amortized hash-and-equality membership.
    pub fn contains_key(&self, key: &K) -> bool {
        self.by_key.contains_key(key)
    }

    /// O(1) amortized membership through the projection map.
    pub fn contains_projection(&self, projection: &str) -> bool {
        self.by_projection.contains_key(projection)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.by_key.get(key)
    }

    /// O(n) scan over the stored values, independent of any key lookup, so
    /// what is measured is a pure linear value scan.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.by_key.values().any(|v| v == value)
    }
}
