use std::fmt::Display;

/// Ordered key sequence with a parallel sequence of string projections.
///
/// Membership is a full equality scan over either sequence, the O(n)
/// baseline every other variant is measured against. Insertion order is
/// preserved and nothing is deduplicated; with duplicate keys the scan
/// stops at the first occurrence.
#[derive(Debug, Clone)]
pub struct LinearContainer<K> {
    keys: Vec<K>,
    projections: Vec<String>,
}

impl<K> LinearContainer<K>
where
    K: Clone + Eq + Display,
{
    /// Appends every pair in generator order.
    pub fn from_pairs<V>(pairs: &[(K, V)]) -> Self {
        let keys: Vec<K> = pairs.iter().map(|(key, _)| key.clone()).collect();
        let projections = keys.iter().map(K::to_string).collect();
        Self { keys, projections }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// O(n) scan over the key sequence.
    pub fn contains_key(&self, key: &K) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// O(n) scan over the projection sequence, independent of the key scan.
    pub fn contains_projection(&self, projection: &str) -> bool {
        self.projections.iter().any(|p| p == projection)
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }
}
