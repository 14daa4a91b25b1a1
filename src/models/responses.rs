//! Response DTOs for the project API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{GeoJson, ProjectRecord};

/// Response body for a single project (GET /project/:project_id)
#[derive(Debug, Clone, Serialize)]
pub struct ProjectResponse {
    /// The project identifier
    pub project_id: u32,
    /// The project name
    pub name: String,
    /// The project description, if any
    pub description: Option<String>,
    /// Start and end of the project date range
    pub date_range: (DateTime<Utc>, DateTime<Utc>),
    /// Flattened project geometry
    pub geojson: GeoJson,
}

impl ProjectResponse {
    /// Builds a response body from a stored record
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            project_id: record.project_id,
            name: record.name.clone(),
            description: record.description.clone(),
            date_range: (record.start_date, record.end_date),
            geojson: record.geojson.clone(),
        }
    }
}

/// Response body for project creation (POST /project)
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCreated {
    /// The identifier assigned to the new project
    #[serde(rename = "Project_id")]
    pub project_id: u32,
}

impl ProjectCreated {
    /// Creates a new ProjectCreated
    pub fn new(project_id: u32) -> Self {
        Self { project_id }
    }
}

/// Response body for the health endpoint (GET /healthcheck)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for the about endpoint (GET /about)
#[derive(Debug, Clone, Serialize)]
pub struct AboutResponse {
    /// Service name
    pub name: String,
    /// Service version
    pub version: String,
    /// Short service description
    pub description: String,
}

impl AboutResponse {
    /// Creates an AboutResponse from build-time package metadata
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: env!("CARGO_PKG_DESCRIPTION").to_string(),
        }
    }
}
