//! Project Registry - A geo-project catalog API with response caching
//!
//! Serves CRUD endpoints for projects with GeoJSON geometries, fronted by
//! a TTL-based HTTP response cache keyed on request fingerprints.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod tasks;

pub use api::AppState;
pub use cache::HttpCacheState;
pub use config::Config;
pub use tasks::spawn_sweep_task;
