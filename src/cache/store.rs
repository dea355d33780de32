//! Cache Store Module
//!
//! Time-bounded key/value storage. Entries are never evicted for capacity,
//! only by age or an explicit clear.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, Clock};

// == TTL Cache ==
/// HashMap storage whose entries turn stale after a fixed TTL.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Lookup statistics
    stats: CacheStats,
    /// Maximum age of an entry
    ttl: Duration,
    /// Time source
    clock: Arc<dyn Clock>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
            clock,
        }
    }

    // == Insert ==
    /// Stores a value, replacing any previous entry and resetting its age.
    pub fn insert(&mut self, key: K, value: V) {
        let entry = CacheEntry::new(value, self.clock.now_ms());
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.len());
    }

    // == Get ==
    /// Returns a clone of the value if present and not expired.
    ///
    /// Expired entries are removed and counted as misses.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let now = self.clock.now_ms();

        match self.entries.get(key) {
            Some(entry) if entry.is_expired(self.ttl, now) => {
                self.entries.remove(key);
                self.stats.set_total_entries(self.len());
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Clear ==
    /// Drops every entry. Statistics counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Cleanup Expired ==
    /// Removes all expired entries, returning how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let ttl = self.ttl;
        let before = self.len();
        if self.is_empty() {
            return 0;
        }

        self.entries.retain(|_, entry| !entry.is_expired(ttl, now));

        self.stats.set_total_entries(self.len());
        before - self.len()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
