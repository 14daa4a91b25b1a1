//! GeoJSON Model Module
//!
//! Flattened geometry types stored with each project. Incoming GeoJSON
//! carries nested coordinate rings; only the outer ring survives intake,
//! as a flat list of coordinate pairs.

use serde::{Deserialize, Serialize};

// == Coordinate ==
/// A single coordinate pair, latitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

// == Geometry ==
/// Geometry with its flattened coordinate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Geometry type label, for example `MultiPolygon`
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<Coordinate>,
}

// == GeoJson ==
/// Stored GeoJSON object for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJson {
    /// Object type label, for example `Feature`
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: Geometry,
}
