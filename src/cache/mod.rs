//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and an injectable clock.

mod clock;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::TtlCache;

// == Public Constants ==
/// Default lifetime of a cache entry in seconds
pub const DEFAULT_TTL_SECS: u64 = 300;
