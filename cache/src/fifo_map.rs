use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// A map bounded to `capacity` entries that evicts in insertion order.
///
/// Lookups do not affect the eviction order, and writing to a key that is
/// already present keeps its original position.
#[derive(Debug, Clone)]
pub struct FifoMap<K, V> {
    capacity: usize,
    // Oldest key at the front
    order: VecDeque<K>,
    entries: HashMap<K, V>,
}

impl<K, V> FifoMap<K, V>
where
    K: Copy + Eq + Hash,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::with_capacity(capacity),
            entries: HashMap::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Inserts `key`, evicting the oldest entry first when the map is full.
    ///
    /// Returns the entry that was pushed out, if any. With a capacity of zero
    /// nothing can be held, so the new entry itself is handed back.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = value;
            return None;
        }
        if self.capacity == 0 {
            return Some((key, value));
        }
        let evicted = if self.entries.len() >= self.capacity {
            self.evict_oldest()
        } else {
            None
        };
        self.order.push_back(key);
        self.entries.insert(key, value);
        evicted
    }

    fn evict_oldest(&mut self) -> Option<(K, V)> {
        let oldest = self.order.pop_front()?;
        let value = self.entries.remove(&oldest)?;
        Some((oldest, value))
    }

    /// Keys from oldest to newest
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.order.iter()
    }

    /// Entries from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.entries.get_key_value(key))
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.entries.clear();
    }
}
