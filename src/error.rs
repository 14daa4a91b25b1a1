//! Error types for the project API
//!
//! Provides unified error handling using thiserror. All errors render as
//! a JSON body with a single `detail` field.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the project API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No project stored under the requested id
    #[error("Project ID: {0} Not Found")]
    ProjectNotFound(u32),

    /// The requested listing page holds no projects
    #[error("No projects found")]
    NoProjects,

    /// Request data failed validation
    #[error("{0}")]
    Validation(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::ProjectNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NoProjects => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = Json(json!({
            "detail": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the project API.
pub type Result<T> = std::result::Result<T, ApiError>;
