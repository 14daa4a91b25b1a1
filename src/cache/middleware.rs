//! HTTP Cache Middleware Module
//!
//! Response-caching layer for read endpoints. Each eligible request is
//! fingerprinted from its path, path parameters, query, and body; a live
//! cached entry short-circuits the handler, a miss forwards the request
//! and stores the first response chunk for next time. `Cache-Control`
//! request directives steer lookups (`no-cache`), storage (`no-store`),
//! and the TTL (`max-age`).

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{RawPathParams, Request, State},
    http::{header, Request as HttpRequest, Response as HttpResponse, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    RequestPartsExt,
};
use futures::{stream, StreamExt};
use tokio::sync::RwLock;
use tracing::{debug, trace, warn};

use crate::cache::{fingerprint::request_fingerprint, CacheDirectives, CachePolicy, ResponseCache};

// == Cache State ==
/// Shared state handed to the cache middleware.
#[derive(Clone)]
pub struct HttpCacheState {
    /// Cached response payloads, behind an async lock
    pub store: Arc<RwLock<ResponseCache>>,
    /// Configured caching rules
    pub policy: Arc<CachePolicy>,
}

impl HttpCacheState {
    /// Creates cache state with an empty store and the given policy.
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            store: Arc::new(RwLock::new(ResponseCache::new())),
            policy: Arc::new(policy),
        }
    }
}

// == Middleware ==
/// Serves eligible requests from the response cache, filling it on misses.
///
/// POST and DELETE requests, requests outside the configured endpoints,
/// and requests carrying `no-cache` all pass straight through to the
/// handler. Only successful responses are stored, and only their first
/// body chunk; bodyless responses are never stored.
pub async fn cache_middleware(
    State(state): State<HttpCacheState>,
    req: Request,
    next: Next,
) -> Response {
    if CachePolicy::is_bypass_method(req.method()) {
        return next.run(req).await;
    }

    let directives = CacheDirectives::parse(
        req.headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok()),
    );
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);

    // The body has to be buffered up front so it can feed the fingerprint
    // and still reach the handler afterwards.
    let (mut parts, body) = req.into_parts();
    let path_params: Vec<(String, String)> = match parts.extract::<RawPathParams>().await {
        Ok(params) => params
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
        Err(_) => Vec::new(),
    };
    let body_bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            warn!("Failed to buffer request body for caching: {}", error);
            Bytes::new()
        }
    };

    let key = request_fingerprint(&path, &path_params, query.as_deref(), &body_bytes);
    let req = HttpRequest::from_parts(parts, Body::from(body_bytes));

    if !state.policy.is_cacheable_path(&path) {
        return next.run(req).await;
    }
    if directives.no_cache {
        debug!("Cache lookup skipped for {} (no-cache)", path);
        return next.run(req).await;
    }

    if let Some((payload, remaining)) = state.store.read().await.retrieve(&key) {
        debug!("Cache hit for {} ({:.1}s remaining)", key, remaining);
        return cache_hit_response(payload, remaining);
    }
    debug!("Cache miss for {}", key);

    let response = next.run(req).await;
    let status = response.status();
    let (parts, body) = response.into_parts();

    // Pull the first chunk off the response stream. That is the unit the
    // cache stores; the chunk is then stitched back in front of the rest
    // of the stream so the client sees the response unchanged.
    let mut rest = body.into_data_stream();
    let first = rest.next().await;

    if let Some(Ok(chunk)) = &first {
        if let Some(ttl) = state.policy.store_ttl(status, &directives) {
            state.store.write().await.create(key, chunk.clone(), ttl);
            trace!("Stored response for {} (ttl: {}s)", path, ttl);
        }
    }

    let body = Body::from_stream(stream::iter(first).chain(rest));
    HttpResponse::from_parts(parts, body)
}

// == Hit Response ==
/// Builds the response served on a cache hit.
///
/// The payload was stored from a JSON endpoint, so the content type is
/// fixed and the remaining TTL is surfaced in the `Cache-Control` header.
fn cache_hit_response(payload: Bytes, remaining: f64) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CACHE_CONTROL, format!("max-age:{}", remaining)),
        ],
        payload,
    )
        .into_response()
}
