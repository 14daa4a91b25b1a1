//! API Module
//!
//! HTTP handlers and routing for the project REST API.
//!
//! # Endpoints
//! - `POST /project` - Create a project
//! - `GET /project/:project_id` - Retrieve a project by id
//! - `PUT /project/:project_id` - Update a project
//! - `DELETE /project/:project_id` - Delete a project
//! - `GET /projects/list` - List projects with pagination
//! - `GET /healthcheck` - Health check endpoint
//! - `GET /about` - Service metadata

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
