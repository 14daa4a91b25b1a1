//! API Routes
//!
//! Configures the Axum router with all project endpoints and the
//! middleware stack, response cache included.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use super::handlers::{
    about_handler, create_project_handler, delete_project_handler, healthcheck_handler,
    list_projects_handler, read_project_handler, update_project_handler, AppState,
};
use crate::cache::{cache_middleware, HttpCacheState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /project` - Create a project
/// - `GET /project/:project_id` - Retrieve a project by id
/// - `PUT /project/:project_id` - Update a project
/// - `DELETE /project/:project_id` - Delete a project
/// - `GET /projects/list` - List projects with pagination
/// - `GET /healthcheck` - Health check endpoint
/// - `GET /about` - Service metadata
///
/// # Middleware
/// - Request id: Assigns and propagates `X-Request-ID`
/// - Tracing: Logs all requests for debugging
/// - Cache: Serves eligible read requests from the response cache
/// - CORS: Allows any origin (configurable for production)
pub fn create_router(state: AppState, cache: HttpCacheState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([axum::http::HeaderName::from_static("x-request-id")]);

    // Build router with all endpoints. Later layers wrap earlier ones, so
    // the request id layer sits outermost and CORS innermost; cache hits
    // short-circuit below tracing but above the handlers.
    Router::new()
        .route("/project", post(create_project_handler))
        .route(
            "/project/:project_id",
            get(read_project_handler)
                .put(update_project_handler)
                .delete(delete_project_handler),
        )
        .route("/projects/list", get(list_projects_handler))
        .route("/healthcheck", get(healthcheck_handler))
        .route("/about", get(about_handler))
        .layer(cors)
        .layer(middleware::from_fn_with_state(cache, cache_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
