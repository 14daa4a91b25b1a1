//! Request Fingerprint Module
//!
//! Builds the cache key for an incoming request from its path, path
//! parameters, query string, and body. The inputs are canonicalized so
//! that order-insensitive variations (query parameter order, JSON key
//! order, JSON whitespace) map to the same key. The key is the concrete
//! request path joined to a SHA-256 digest of the canonical material.

use serde_json::Value;
use sha2::{Digest, Sha256};

// == Canonicalization Helpers ==

/// Renders key/value pairs as a stable `k=v&k=v` string sorted by pair.
fn canonical_pairs(pairs: &[(String, String)]) -> String {
    let mut rendered: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    rendered.sort_unstable();
    rendered.join("&")
}

/// Splits a raw query string into pairs and renders them canonically.
///
/// Segments without an `=` are treated as a key with an empty value.
/// Empty segments from doubled or trailing separators are dropped.
fn canonical_query(query: Option<&str>) -> String {
    let raw = match query {
        Some(raw) => raw,
        None => return String::new(),
    };
    let pairs: Vec<(String, String)> = raw
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (segment.to_string(), String::new()),
        })
        .collect();
    canonical_pairs(&pairs)
}

// == Canonical Body ==
/// Canonicalizes a request body for fingerprinting.
///
/// JSON bodies are parsed and re-serialized, which sorts object keys and
/// strips insignificant whitespace. Anything else is taken as lossy UTF-8
/// text. An empty body canonicalizes to the empty string. This never fails.
///
/// # Arguments
/// * `body` - The raw request body bytes
pub fn canonical_body(body: &[u8]) -> String {
    if body.is_empty() {
        return String::new();
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => serde_json::to_string(&value)
            .unwrap_or_else(|_| String::from_utf8_lossy(body).into_owned()),
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}

// == Request Fingerprint ==
/// Computes the cache key for a request.
///
/// The key is `{path}_{sha256_hex}` where the digest covers the canonical
/// path parameters, query string, and body in that order. The concrete
/// path prefix keeps keys for different resources disjoint even if their
/// hashed material were ever to collide.
///
/// # Arguments
/// * `path` - The concrete request path, for example `/project/42`
/// * `path_params` - Named path parameters extracted by the router
/// * `query` - The raw query string, if any
/// * `body` - The raw request body bytes
pub fn request_fingerprint(
    path: &str,
    path_params: &[(String, String)],
    query: Option<&str>,
    body: &[u8],
) -> String {
    let mut buf = canonical_pairs(path_params);
    buf.push_str(&canonical_query(query));
    buf.push_str(&canonical_body(body));
    format!("{}_{:x}", path, Sha256::digest(buf.as_bytes()))
}
