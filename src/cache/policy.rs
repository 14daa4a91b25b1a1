//! Cache Policy Module
//!
//! Decides which requests the cache layer participates in and for how long
//! responses are retained. The policy covers three questions: does the
//! method bypass the cache outright, does the path belong to a cached
//! endpoint, and should a given response be stored at all.

use axum::http::{Method, StatusCode};

// == Cache Directives ==
/// Parsed `Cache-Control` request directives relevant to this cache.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheDirectives {
    /// Client asked to skip the cache lookup for this request
    pub no_cache: bool,
    /// Client asked not to store the response
    pub no_store: bool,
    /// Client-supplied TTL override in seconds
    pub max_age: Option<u64>,
}

impl CacheDirectives {
    /// Parses the directives out of a `Cache-Control` header value.
    ///
    /// Directives are comma separated and matched case-insensitively.
    /// Unknown directives and unparseable `max-age` values are ignored,
    /// so a malformed header degrades to the defaults.
    ///
    /// # Arguments
    /// * `header` - The raw header value, if the request carried one
    pub fn parse(header: Option<&str>) -> Self {
        let mut directives = Self::default();
        let raw = match header {
            Some(raw) => raw,
            None => return directives,
        };
        for token in raw.split(',') {
            let token = token.trim().to_ascii_lowercase();
            if token == "no-cache" {
                directives.no_cache = true;
            } else if token == "no-store" {
                directives.no_store = true;
            } else if let Some(value) = token.strip_prefix("max-age=") {
                if let Ok(seconds) = value.trim().parse::<u64>() {
                    directives.max_age = Some(seconds);
                }
            }
        }
        directives
    }
}

// == Cache Policy ==
/// Configured caching rules shared by the middleware.
#[derive(Debug, Clone)]
pub struct CachePolicy {
    /// Path fragments whose requests are eligible for caching
    cached_endpoints: Vec<String>,
    /// TTL in seconds when the request does not override it
    default_max_age: u64,
}

impl CachePolicy {
    /// Creates a policy from configured endpoints and default TTL.
    ///
    /// # Arguments
    /// * `cached_endpoints` - Path fragments to match requests against
    /// * `default_max_age` - Fallback TTL in seconds
    pub fn new(cached_endpoints: Vec<String>, default_max_age: u64) -> Self {
        Self {
            cached_endpoints,
            default_max_age,
        }
    }

    // == Method Check ==
    /// Returns true for methods the cache never participates in.
    ///
    /// POST and DELETE requests mutate state and pass straight through.
    pub fn is_bypass_method(method: &Method) -> bool {
        *method == Method::POST || *method == Method::DELETE
    }

    // == Path Check ==
    /// Returns true when the path belongs to a cached endpoint.
    ///
    /// Matching is by substring, so the fragment `/project` covers both
    /// `/project/42` and `/projects/list`.
    pub fn is_cacheable_path(&self, path: &str) -> bool {
        self.cached_endpoints
            .iter()
            .any(|endpoint| path.contains(endpoint.as_str()))
    }

    // == Store Decision ==
    /// Returns the TTL to store a response under, or `None` to skip storing.
    ///
    /// Responses are stored only when the status is a success (2xx) and the
    /// request did not carry `no-store`. The TTL is the request's `max-age`
    /// when present, otherwise the configured default.
    ///
    /// # Arguments
    /// * `status` - The upstream response status
    /// * `directives` - Parsed request directives
    pub fn store_ttl(&self, status: StatusCode, directives: &CacheDirectives) -> Option<u64> {
        if directives.no_store || !status.is_success() {
            return None;
        }
        Some(directives.max_age.unwrap_or(self.default_max_age))
    }
}
