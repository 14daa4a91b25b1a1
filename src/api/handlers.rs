//! API Handlers
//!
//! HTTP request handlers for each project endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{
    AboutResponse, GeoJsonBody, HealthResponse, PageParams, ProjectCreated, ProjectParams,
    ProjectResponse,
};
use crate::repository::{ProjectStore, UpdateOutcome};

/// Largest accepted project id
pub const MAX_PROJECT_ID: u32 = 999_999;

/// Application state shared across all handlers.
///
/// Contains the project store wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe project store
    pub projects: Arc<RwLock<ProjectStore>>,
}

impl AppState {
    /// Creates a new AppState with the given project store.
    pub fn new(projects: ProjectStore) -> Self {
        Self {
            projects: Arc::new(RwLock::new(projects)),
        }
    }
}

/// Rejects ids outside the accepted range.
fn check_project_id(project_id: u32) -> Result<()> {
    if project_id > MAX_PROJECT_ID {
        return Err(ApiError::Validation(format!(
            "Project ID must be between 0 and {}",
            MAX_PROJECT_ID
        )));
    }
    Ok(())
}

/// Handler for POST /project
///
/// Creates a project from query parameters and a GeoJSON body, returning
/// the assigned id. The description is required here, unlike on update.
pub async fn create_project_handler(
    State(state): State<AppState>,
    Query(params): Query<ProjectParams>,
    Json(body): Json<GeoJsonBody>,
) -> Result<(StatusCode, Json<ProjectCreated>)> {
    if params.description.is_none() {
        return Err(ApiError::Validation("Description is required".to_string()));
    }
    if let Some(error_msg) = params.validate() {
        return Err(ApiError::Validation(error_msg));
    }
    let geojson = body.flatten().map_err(ApiError::Validation)?;

    // Acquire write lock and insert the project
    let mut projects = state.projects.write().await;
    let project_id = projects.insert(params.into_draft(geojson));

    Ok((StatusCode::CREATED, Json(ProjectCreated::new(project_id))))
}

/// Handler for GET /project/:project_id
///
/// Retrieves a single project by id.
pub async fn read_project_handler(
    State(state): State<AppState>,
    Path(project_id): Path<u32>,
) -> Result<Json<ProjectResponse>> {
    check_project_id(project_id)?;

    // Acquire read lock
    let projects = state.projects.read().await;
    let record = projects
        .get(project_id)
        .ok_or(ApiError::ProjectNotFound(project_id))?;

    Ok(Json(ProjectResponse::from_record(&record)))
}

/// Handler for PUT /project/:project_id
///
/// Replaces a project's content. Responds 200 when the record changed
/// and 204 when the submitted content matched what was already stored.
/// Both responses carry no body.
pub async fn update_project_handler(
    State(state): State<AppState>,
    Path(project_id): Path<u32>,
    Query(params): Query<ProjectParams>,
    Json(body): Json<GeoJsonBody>,
) -> Result<StatusCode> {
    check_project_id(project_id)?;
    if let Some(error_msg) = params.validate() {
        return Err(ApiError::Validation(error_msg));
    }
    let geojson = body.flatten().map_err(ApiError::Validation)?;

    // Acquire write lock and apply the update
    let mut projects = state.projects.write().await;
    match projects.update(project_id, params.into_draft(geojson)) {
        Some(UpdateOutcome::Updated) => Ok(StatusCode::OK),
        Some(UpdateOutcome::Unchanged) => Ok(StatusCode::NO_CONTENT),
        None => Err(ApiError::ProjectNotFound(project_id)),
    }
}

/// Handler for DELETE /project/:project_id
///
/// Removes a project by id. Responds 200 with no body.
pub async fn delete_project_handler(
    State(state): State<AppState>,
    Path(project_id): Path<u32>,
) -> Result<StatusCode> {
    check_project_id(project_id)?;

    // Acquire write lock
    let mut projects = state.projects.write().await;
    if projects.remove(project_id) {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::ProjectNotFound(project_id))
    }
}

/// Handler for GET /projects/list
///
/// Returns one page of projects in id order, with pagination surfaced in
/// the `Link`, `X-Page`, and `X-Size` response headers. A page past the
/// stored projects is a 404.
pub async fn list_projects_handler(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Response> {
    if let Some(error_msg) = params.validate() {
        return Err(ApiError::Validation(error_msg));
    }

    // Acquire read lock
    let projects = state.projects.read().await;
    let records = projects.page(params.page, params.size);
    if records.is_empty() {
        return Err(ApiError::NoProjects);
    }

    let last_page = projects.len().div_ceil(params.size);
    let body: Vec<ProjectResponse> = records.iter().map(ProjectResponse::from_record).collect();
    let headers = [
        (
            header::LINK,
            pagination_links(params.page, params.size, last_page),
        ),
        (HeaderName::from_static("x-page"), params.page.to_string()),
        (HeaderName::from_static("x-size"), params.size.to_string()),
    ];

    Ok((headers, Json(body)).into_response())
}

/// Renders the RFC 8288 `Link` header for a listing page.
///
/// Always emits `first` and `last`; `prev` and `next` appear only when
/// such a page exists.
fn pagination_links(page: usize, size: usize, last_page: usize) -> String {
    let base = "/projects/list";
    let mut links = vec![format!("<{}?page=1&size={}>; rel=\"first\"", base, size)];
    if page > 1 {
        links.push(format!(
            "<{}?page={}&size={}>; rel=\"prev\"",
            base,
            page - 1,
            size
        ));
    }
    if page < last_page {
        links.push(format!(
            "<{}?page={}&size={}>; rel=\"next\"",
            base,
            page + 1,
            size
        ));
    }
    links.push(format!(
        "<{}?page={}&size={}>; rel=\"last\"",
        base, last_page, size
    ));
    links.join(", ")
}

/// Handler for GET /healthcheck
///
/// Returns health status of the server.
pub async fn healthcheck_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /about
///
/// Returns the service name, version, and description.
pub async fn about_handler() -> Json<AboutResponse> {
    Json(AboutResponse::current())
}
