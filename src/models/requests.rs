//! Request DTOs for the project API
//!
//! Defines the structure of incoming query parameters and request bodies,
//! along with their validation rules. Validation reports the first
//! violation found as the message returned to the client.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::{Coordinate, GeoJson, Geometry, ProjectDraft};

// == Limits ==
/// Maximum project name length in characters
pub const MAX_NAME_LENGTH: usize = 32;

/// Maximum project description length in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 100;

// == Project Params ==
/// Query parameters shared by project creation and update.
///
/// # Fields
/// - `name`: The project name, non-blank and at most 32 characters
/// - `start_date`: Start of the project date range, RFC 3339
/// - `end_date`: End of the project date range, RFC 3339, not in the future
/// - `description`: Optional description, at most 100 characters
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectParams {
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProjectParams {
    /// Validates the parameters
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name cannot be empty or consist only of whitespace.".to_string());
        }
        if self.name.chars().count() > MAX_NAME_LENGTH {
            return Some(format!(
                "Name exceeds maximum length of {} characters",
                MAX_NAME_LENGTH
            ));
        }
        if let Some(description) = &self.description {
            if description.chars().count() > MAX_DESCRIPTION_LENGTH {
                return Some(format!(
                    "Description exceeds maximum length of {} characters",
                    MAX_DESCRIPTION_LENGTH
                ));
            }
        }
        if self.start_date > self.end_date {
            return Some(format!(
                "Start date cannot be bigger than end date. Invalid value: {}",
                self.start_date
            ));
        }
        if self.end_date > Utc::now() {
            return Some(format!(
                "End date cannot be in future. Invalid value: {}",
                self.end_date
            ));
        }
        None
    }

    /// Assembles a draft from these parameters and a flattened geometry.
    pub fn into_draft(self, geojson: GeoJson) -> ProjectDraft {
        ProjectDraft {
            name: self.name,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            geojson,
        }
    }
}

// == GeoJSON Body ==
/// Incoming GeoJSON body with nested polygon rings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoJsonBody {
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: GeometryBody,
}

/// Incoming geometry: polygons of rings of `[latitude, longitude]` pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct GeometryBody {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<Vec<Vec<[f64; 2]>>>,
}

impl GeoJsonBody {
    /// Flattens the nested geometry down to its outer ring.
    ///
    /// Only the first ring of the first polygon is kept, as a flat
    /// coordinate list. Fails when no non-empty ring exists.
    pub fn flatten(&self) -> Result<GeoJson, String> {
        let ring = self
            .geometry
            .coordinates
            .first()
            .and_then(|polygon| polygon.first())
            .filter(|ring| !ring.is_empty())
            .ok_or_else(|| "GeoJSON must contain at least one coordinate ring".to_string())?;
        let coordinates = ring
            .iter()
            .map(|pair| Coordinate {
                latitude: pair[0],
                longitude: pair[1],
            })
            .collect();
        Ok(GeoJson {
            kind: self.kind.clone(),
            geometry: Geometry {
                kind: self.geometry.kind.clone(),
                coordinates,
            },
        })
    }
}

// == Page Params ==
fn default_page() -> usize {
    1
}

fn default_size() -> usize {
    10
}

/// Pagination query parameters for the project listing.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: usize,
    /// Projects per page, between 1 and 100
    #[serde(default = "default_size")]
    pub size: usize,
}

impl PageParams {
    /// Validates the pagination bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.page < 1 {
            return Some("Page must be at least 1".to_string());
        }
        if self.size < 1 || self.size > 100 {
            return Some("Size must be between 1 and 100".to_string());
        }
        None
    }
}
