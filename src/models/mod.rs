//! Request and Response models for the project API
//!
//! This module defines the core project types alongside the DTOs
//! (Data Transfer Objects) used for serializing/deserializing HTTP
//! request and response bodies.

pub mod geojson;
pub mod project;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use geojson::{Coordinate, GeoJson, Geometry};
pub use project::{ProjectDraft, ProjectRecord};
pub use requests::{GeoJsonBody, GeometryBody, PageParams, ProjectParams};
pub use responses::{AboutResponse, HealthResponse, ProjectCreated, ProjectResponse};
