use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;

use crate::error::{MemoError, UtilError};

/// Caller-owned memoization cache keyed by the canonical JSON encoding of the
/// call arguments.
///
/// The cache grows without bound and is never evicted; it lives as long as the
/// owner keeps it. Reads and writes are synchronized with a `Mutex`. The lock
/// is not held while the computation runs, so two callers racing on the same
/// missing key may both compute; the later write wins and both observe an
/// equal value.
#[derive(Debug, Default)]
pub struct MemoCache<V> {
    entries: Mutex<HashMap<String, V>>,
}

impl<V: Clone> MemoCache<V> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached value for `key`, computing and storing it on a miss.
    ///
    /// When `refresh` is true the lookup is bypassed for this call only: the
    /// computation always runs and the fresh result replaces whatever was
    /// stored. Keys are any `Serialize` value; encoding failure surfaces as
    /// [`UtilError::KeySerialization`] and the computation does not run.
    pub fn get_or_compute<K, F>(&self, key: &K, refresh: bool, compute: F) -> Result<V, UtilError>
    where
        K: Serialize + ?Sized,
        F: FnOnce() -> V,
    {
        let encoded = encode_key(key)?;

        if !refresh {
            if let Some(hit) = self.lookup(&encoded) {
                return Ok(hit);
            }
        }

        let value = compute();
        self.store(encoded, value.clone());
        Ok(value)
    }

    /// Fallible twin of [`get_or_compute`](Self::get_or_compute).
    ///
    /// A failing computation propagates as [`MemoError::Compute`] and is not
    /// cached; the next call with the same key computes again.
    pub fn try_get_or_compute<K, E, F>(
        &self,
        key: &K,
        refresh: bool,
        compute: F,
    ) -> Result<V, MemoError<E>>
    where
        K: Serialize + ?Sized,
        F: FnOnce() -> Result<V, E>,
    {
        let encoded = encode_key(key).map_err(MemoError::Key)?;

        if !refresh {
            if let Some(hit) = self.lookup(&encoded) {
                return Ok(hit);
            }
        }

        let value = compute().map_err(MemoError::Compute)?;
        self.store(encoded, value.clone());
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .expect("memo cache should not be poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.entries
            .lock()
            .expect("memo cache should not be poisoned")
            .clear();
    }

    fn lookup(&self, encoded: &str) -> Option<V> {
        self.entries
            .lock()
            .expect("memo cache should not be poisoned")
            .get(encoded)
            .cloned()
    }

    fn store(&self, encoded: String, value: V) {
        self.entries
            .lock()
            .expect("memo cache should not be poisoned")
            .insert(encoded, value);
    }
}

fn encode_key<K: Serialize + ?Sized>(key: &K) -> Result<String, serde_json::Error> {
    serde_json::to_string(key)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn second_identical_call_hits_the_cache() {
        let cache = MemoCache::new();
        let runs = Cell::new(0u32);
        let compute = || {
            runs.set(runs.get() + 1);
            42
        };

        let first = cache
            .get_or_compute(&("spx", 10), false, compute)
            .expect("key should encode");
        let second = cache
            .get_or_compute(&("spx", 10), false, compute)
            .expect("key should encode");

        assert_eq!(first, 42);
        assert_eq!(second, 42);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn distinct_keys_compute_independently() {
        let cache = MemoCache::new();

        let a = cache
            .get_or_compute(&("spx", 10), false, || 1)
            .expect("key should encode");
        let b = cache
            .get_or_compute(&("spx", 20), false, || 2)
            .expect("key should encode");

        assert_eq!((a, b), (1, 2));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn refresh_bypasses_lookup_and_updates_the_entry() {
        let cache = MemoCache::new();

        cache
            .get_or_compute(&"vix", false, || 1)
            .expect("key should encode");
        let refreshed = cache
            .get_or_compute(&"vix", true, || 2)
            .expect("key should encode");
        let cached = cache
            .get_or_compute(&"vix", false, || 3)
            .expect("key should encode");

        assert_eq!(refreshed, 2);
        assert_eq!(cached, 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failed_computation_is_not_cached() {
        let cache: MemoCache<i32> = MemoCache::new();
        let runs = Cell::new(0u32);

        let err = cache
            .try_get_or_compute(&"vix", false, || {
                runs.set(runs.get() + 1);
                Err::<i32, _>("backend down")
            })
            .expect_err("computation should fail");
        assert!(matches!(err, MemoError::Compute("backend down")));
        assert!(cache.is_empty());

        let recovered = cache
            .try_get_or_compute(&"vix", false, || {
                runs.set(runs.get() + 1);
                Ok::<_, &str>(7)
            })
            .expect("computation should succeed");
        assert_eq!(recovered, 7);
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn clear_empties_the_cache() {
        let cache = MemoCache::new();
        cache
            .get_or_compute(&1, false, || "one")
            .expect("key should encode");
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }
}
