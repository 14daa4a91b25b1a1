//! Cache Module
//!
//! HTTP response caching. `ResponseCache` holds payloads under fingerprint
//! keys with per-entry TTLs, `CachePolicy` decides participation and
//! retention, and `cache_middleware` wires both into the request path.

mod entry;
pub mod fingerprint;
mod middleware;
mod policy;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use middleware::{cache_middleware, HttpCacheState};
pub use policy::{CacheDirectives, CachePolicy};
pub use store::ResponseCache;

// == Public Constants ==
/// TTL in seconds applied when a request does not carry `max-age`
pub const DEFAULT_MAX_AGE: u64 = 60;
