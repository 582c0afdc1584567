use std::collections::BTreeMap;

/// Array-backed sorted map: a `Vec` of pairs kept ordered by key, probed by
/// binary search.
#[derive(Debug, Clone)]
pub struct SortedVecMap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for SortedVecMap<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> SortedVecMap<K, V>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts keeping the entries ordered; an equal key replaces the
    /// existing value.
    pub fn insert(&mut self, key: K, value: V) {
        match self.entries.binary_search_by(|(k, _)| k.cmp(&key)) {
            Ok(pos) => self.entries[pos] = (key, value),
            Err(pos) => self.entries.insert(pos, (key, value)),
        }
    }

    /// O(log n) binary search.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.binary_search_by(|(k, _)| k.cmp(key)).is_ok()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .binary_search_by(|(k, _)| k.cmp(key))
            .ok()
            .map(|pos| &self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in non-decreasing order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }
}

/// Order-indexed mapping held twice: an array-backed sorted map and a
/// tree-backed map, both ordered by the key's total order.
///
/// The order relation must be a strict total order with deterministic tie
/// breaking; among equal keys insertion order is undefined, which the
/// generator's uniqueness contract makes unobservable.
#[derive(Debug, Clone)]
pub struct SortedContainer<K, V> {
    array: SortedVecMap<K, V>,
    tree: BTreeMap<K, V>,
}

impl<K, V> SortedContainer<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    /// Inserts every pair into both structures independently.
    pub fn from_pairs(pairs: &[(K, V)]) -> Self {
        let mut array = SortedVecMap::new();
        let mut tree = BTreeMap::new();
        for (key, value) in pairs {
            array.insert(key.clone(), value.clone());
            tree.insert(key.clone(), value.clone());
        }
        Self { array, tree }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// O(log n) binary search in the array-backed map.
    pub fn contains_in_array(&self, key: &K) -> bool {
        self.array.contains_key(key)
    }

    /// O(log n) traversal of the tree-backed map.
    pub fn contains_in_tree(&self, key: &K) -> bool {
        self.tree.contains_key(key)
    }

    /// Keys of the array-backed map, in non-decreasing order.
    pub fn array_keys(&self) -> impl Iterator<Item = &K> {
        self.array.keys()
    }

    /// Keys of the tree-backed map, in non-decreasing order.
    pub fn tree_keys(&self) -> impl Iterator<Item = &K> {
        self.tree.keys()
    }
}
