use im::{OrdMap, Vector};

/// Insert-only accumulator for a [`PersistentContainer`].
///
/// The build protocol is two-phase: accumulate every pair here, then freeze
/// with a single consuming [`finish`](Self::finish). The builder cannot be
/// reused and the frozen container exposes no mutating operation, so
/// immutability is enforced by the type system rather than by convention.
#[derive(Debug, Clone)]
pub struct PersistentBuilder<K, V> {
    pairs: Vec<(K, V)>,
}

impl<K, V> Default for PersistentBuilder<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PersistentBuilder<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.pairs.push((key, value));
    }

    /// Freezes the accumulated pairs into an immutable container.
    pub fn finish(self) -> PersistentContainer<K, V> {
        let mut keys = Vector::new();
        let mut map = OrdMap::new();
        for (key, value) in self.pairs {
            keys.push_back(key.clone());
            map.insert(key, value);
        }
        PersistentContainer { keys, map }
    }
}

/// Frozen, structurally immutable mapping: an ordered key sequence and a
/// balanced map over the same pairs.
///
/// Every method takes `&self`; "modification" through
/// [`with_value`](Self::with_value) yields a new container sharing
/// unchanged substructure with the original, which stays untouched.
#[derive(Clone)]
pub struct PersistentContainer<K, V> {
    keys: Vector<K>,
    map: OrdMap<K, V>,
}

impl<K, V> std::fmt::Debug for PersistentContainer<K, V>
where
    K: Ord + Clone + std::fmt::Debug,
    V: Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistentContainer")
            .field("keys", &self.keys)
            .field("map", &self.map)
            .finish()
    }
}

impl<K, V> PersistentContainer<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// O(n) scan over the frozen key sequence. Immutability alone does not
    /// improve lookup complexity; this is the demonstration.
    pub fn contains_in_sequence(&self, key: &K) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// O(log n) membership through the balanced map.
    pub fn contains_in_map(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// Keys in frozen sequence order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    /// A new container with `key` bound to `value`. `self` is not mutated;
    /// all unchanged substructure is shared between the two values.
    pub fn with_value(&self, key: K, value: V) -> Self {
        let mut keys = self.keys.clone();
        if !self.map.contains_key(&key) {
            keys.push_back(key.clone());
        }
        Self {
            keys,
            map: self.map.update(key, value),
        }
    }
}
