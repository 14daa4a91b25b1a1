//! Project Model Module
//!
//! Core project types: the draft assembled from a validated request and
//! the record stored in the repository.

use chrono::{DateTime, Utc};

use crate::models::GeoJson;

// == Project Draft ==
/// A validated project ready for insertion or update, before it has an id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub geojson: GeoJson,
}

// == Project Record ==
/// A stored project with its assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub project_id: u32,
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub geojson: GeoJson,
}

impl ProjectRecord {
    /// Builds a record from a draft under the given id.
    pub fn from_draft(project_id: u32, draft: ProjectDraft) -> Self {
        Self {
            project_id,
            name: draft.name,
            description: draft.description,
            start_date: draft.start_date,
            end_date: draft.end_date,
            geojson: draft.geojson,
        }
    }

    /// Returns true when the draft carries exactly this record's content.
    ///
    /// Used to detect no-op updates.
    pub fn matches(&self, draft: &ProjectDraft) -> bool {
        self.name == draft.name
            && self.description == draft.description
            && self.start_date == draft.start_date
            && self.end_date == draft.end_date
            && self.geojson == draft.geojson
    }
}
