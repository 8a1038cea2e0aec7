//! Concurrent aggregation store.
//!
//! A sharded concurrent map from `(category, detail, keyword)` to an
//! arbitrary stored value. Writes are last-write-wins; misses are a normal
//! silent outcome, never an error. Owned by the driver, written by many
//! worker threads without external locking.

use dashmap::DashMap;

/// Composite bucket key. Ordered by category, then detail, then keyword,
/// so key listings sort deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BucketKey {
    pub category: String,
    pub detail: String,
    pub keyword: String,
}

impl BucketKey {
    pub fn new(
        category: impl Into<String>,
        detail: impl Into<String>,
        keyword: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            detail: detail.into(),
            keyword: keyword.into(),
        }
    }
}

/// Concurrent mapping from [`BucketKey`] to a stored value.
#[derive(Debug, Default)]
pub struct AggregationStore<V> {
    entries: DashMap<BucketKey, V>,
}

impl<V> AggregationStore<V> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Insert or overwrite the entry at `(category, detail, keyword)`.
    pub fn put(&self, category: &str, detail: &str, keyword: &str, value: V) {
        self.entries
            .insert(BucketKey::new(category, detail, keyword), value);
    }

    /// Apply `map` to the stored raw value, if the entry exists.
    /// Absence yields `None`; this is the typed retrieval operation.
    pub fn map_get<T>(
        &self,
        category: &str,
        detail: &str,
        keyword: &str,
        map: impl FnOnce(&V) -> T,
    ) -> Option<T> {
        self.entries
            .get(&BucketKey::new(category, detail, keyword))
            .map(|entry| map(entry.value()))
    }

    /// Whether an entry exists at the key.
    pub fn contains(&self, category: &str, detail: &str, keyword: &str) -> bool {
        self.entries
            .contains_key(&BucketKey::new(category, detail, keyword))
    }

    /// All populated keys, in no particular order.
    pub fn keys(&self) -> Vec<BucketKey> {
        self.entries.iter().map(|e| e.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> AggregationStore<V> {
    /// Clone out the stored raw value, if the entry exists.
    pub fn get(&self, category: &str, detail: &str, keyword: &str) -> Option<V> {
        self.map_get(category, detail, keyword, V::clone)
    }
}
