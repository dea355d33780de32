//! Cache Entry Module
//!
//! Defines a single cached value together with its insertion time.

use std::time::Duration;

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with `now_ms`.
    pub fn new(value: V, now_ms: u64) -> Self {
        Self {
            value,
            inserted_at: now_ms,
        }
    }

    // == Age ==
    /// Milliseconds since insertion. Saturates at zero if the clock moved backwards.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.inserted_at)
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl`.
    ///
    /// Boundary condition: an entry is expired as soon as its age reaches the
    /// TTL, so once the TTL has fully elapsed the next lookup misses.
    pub fn is_expired(&self, ttl: Duration, now_ms: u64) -> bool {
        self.age_ms(now_ms) >= ttl.as_millis() as u64
    }
}
