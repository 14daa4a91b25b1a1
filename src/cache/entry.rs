//! Cache Entry Module
//!
//! Defines the structure for individual cached response payloads with TTL support.

use std::time::{Duration, Instant};

use bytes::Bytes;

// TTLs are capped at one year; Instant arithmetic overflows far beyond that.
const TTL_CEILING_SECS: u64 = 31_536_000;

// == Cache Entry ==
/// A single cached response payload with its expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored response payload
    pub payload: Bytes,
    /// Instant the entry was written
    pub stored_at: Instant,
    /// Instant the entry stops being served
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_seconds` from now.
    ///
    /// # Arguments
    /// * `payload` - The response payload to store
    /// * `ttl_seconds` - Time to live in seconds
    pub fn new(payload: Bytes, ttl_seconds: u64) -> Self {
        let now = Instant::now();
        let ttl = ttl_seconds.min(TTL_CEILING_SECS);

        Self {
            payload,
            stored_at: now,
            expires_at: now + Duration::from_secs(ttl),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is considered expired when the current
    /// time is greater than or equal to the expiration time.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    // == Remaining TTL ==
    /// Returns the remaining lifetime in seconds as a float.
    ///
    /// Returns `0.0` once the entry has expired.
    pub fn remaining_secs(&self) -> f64 {
        self.expires_at
            .saturating_duration_since(Instant::now())
            .as_secs_f64()
    }
}
