//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint, cache layer
//! included.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use project_registry::{
    api::create_router, cache::CachePolicy, repository::ProjectStore, AppState, HttpCacheState,
};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

const GEOJSON_BODY: &str = r#"{"type":"Feature","geometry":{"type":"MultiPolygon","coordinates":[[[[-52.843,-5.633],[-52.828,-5.674],[-52.811,-5.666]]]]}}"#;

fn create_test_app() -> Router {
    let state = AppState::new(ProjectStore::new());
    let cache = HttpCacheState::new(CachePolicy::new(
        vec!["/project".to_string(), "/projects".to_string()],
        60,
    ));
    create_router(state, cache)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn project_uri(name: &str) -> String {
    format!(
        "/project?name={}&start_date=2024-01-01T00:00:00Z&end_date=2024-06-01T00:00:00Z&description=Pilot%20site",
        name
    )
}

async fn create_project(app: &Router, name: &str) -> Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(project_uri(name))
                .header("content-type", "application/json")
                .body(Body::from(GEOJSON_BODY))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_to_json(response.into_body()).await
}

/// GET with `no-cache` so the response reflects current store state.
async fn fresh_get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header("Cache-Control", "no-cache")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

// == Create Endpoint Tests ==

#[tokio::test]
async fn test_create_project_success() {
    let app = create_test_app();

    let json = create_project(&app, "Reforestation").await;
    assert_eq!(json["Project_id"].as_u64().unwrap(), 1);
}

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let app = create_test_app();

    let first = create_project(&app, "first").await;
    let second = create_project(&app, "second").await;
    assert_eq!(first["Project_id"].as_u64().unwrap(), 1);
    assert_eq!(second["Project_id"].as_u64().unwrap(), 2);
}

#[tokio::test]
async fn test_create_rejects_blank_name() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/project?name=%20%20&start_date=2024-01-01T00:00:00Z&end_date=2024-06-01T00:00:00Z&description=d")
                .header("content-type", "application/json")
                .body(Body::from(GEOJSON_BODY))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(
        json["detail"].as_str().unwrap(),
        "Name cannot be empty or consist only of whitespace."
    );
}

#[tokio::test]
async fn test_create_rejects_long_name() {
    let app = create_test_app();
    let name = "x".repeat(33);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(project_uri(&name))
                .header("content-type", "application/json")
                .body(Body::from(GEOJSON_BODY))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(
        json["detail"].as_str().unwrap(),
        "Name exceeds maximum length of 32 characters"
    );
}

#[tokio::test]
async fn test_create_rejects_inverted_dates() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/project?name=a&start_date=2024-06-01T00:00:00Z&end_date=2024-01-01T00:00:00Z&description=d")
                .header("content-type", "application/json")
                .body(Body::from(GEOJSON_BODY))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_to_json(response.into_body()).await;
    assert!(json["detail"]
        .as_str()
        .unwrap()
        .starts_with("Start date cannot be bigger than end date. Invalid value:"));
}

#[tokio::test]
async fn test_create_rejects_future_end_date() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/project?name=a&start_date=2024-01-01T00:00:00Z&end_date=2099-01-01T00:00:00Z&description=d")
                .header("content-type", "application/json")
                .body(Body::from(GEOJSON_BODY))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_to_json(response.into_body()).await;
    assert!(json["detail"]
        .as_str()
        .unwrap()
        .starts_with("End date cannot be in future. Invalid value:"));
}

#[tokio::test]
async fn test_create_requires_description() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/project?name=a&start_date=2024-01-01T00:00:00Z&end_date=2024-06-01T00:00:00Z")
                .header("content-type", "application/json")
                .body(Body::from(GEOJSON_BODY))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["detail"].as_str().unwrap(), "Description is required");
}

#[tokio::test]
async fn test_create_rejects_long_description() {
    let app = create_test_app();
    let description = "x".repeat(101);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!(
                    "/project?name=a&start_date=2024-01-01T00:00:00Z&end_date=2024-06-01T00:00:00Z&description={}",
                    description
                ))
                .header("content-type", "application/json")
                .body(Body::from(GEOJSON_BODY))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(
        json["detail"].as_str().unwrap(),
        "Description exceeds maximum length of 100 characters"
    );
}

#[tokio::test]
async fn test_create_rejects_empty_geometry() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(project_uri("a"))
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"type":"Feature","geometry":{"type":"MultiPolygon","coordinates":[]}}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(
        json["detail"].as_str().unwrap(),
        "GeoJSON must contain at least one coordinate ring"
    );
}

// == Read Endpoint Tests ==

#[tokio::test]
async fn test_read_project_success() {
    let app = create_test_app();
    create_project(&app, "Reforestation").await;

    let response = fresh_get(&app, "/project/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["project_id"].as_u64().unwrap(), 1);
    assert_eq!(json["name"].as_str().unwrap(), "Reforestation");
    assert_eq!(json["description"].as_str().unwrap(), "Pilot site");
    assert_eq!(json["date_range"].as_array().unwrap().len(), 2);
    assert!(json["date_range"][0]
        .as_str()
        .unwrap()
        .starts_with("2024-01-01T00:00:00"));
    assert_eq!(json["geojson"]["type"].as_str().unwrap(), "Feature");
    assert_eq!(
        json["geojson"]["geometry"]["coordinates"][0]["latitude"]
            .as_f64()
            .unwrap(),
        -52.843
    );
}

#[tokio::test]
async fn test_read_project_not_found() {
    let app = create_test_app();

    let response = fresh_get(&app, "/project/42").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["detail"].as_str().unwrap(), "Project ID: 42 Not Found");
}

#[tokio::test]
async fn test_read_rejects_oversized_id() {
    let app = create_test_app();

    let response = fresh_get(&app, "/project/1000000").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_read_rejects_non_integer_id() {
    let app = create_test_app();

    let response = fresh_get(&app, "/project/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == Cache Behavior via API ==

#[tokio::test]
async fn test_read_served_from_cache() {
    let app = create_test_app();
    create_project(&app, "cached").await;

    // First read goes to the handler
    let first = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/project/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    assert!(first.headers().get("cache-control").is_none());
    let first_body = body_to_json(first.into_body()).await;

    // Second read is a cache hit carrying the remaining TTL
    let second = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/project/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    let cache_control = second
        .headers()
        .get("cache-control")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cache_control.starts_with("max-age:"));
    let second_body = body_to_json(second.into_body()).await;

    assert_eq!(first_body, second_body);
}

#[tokio::test]
async fn test_stale_read_until_no_cache() {
    let app = create_test_app();
    create_project(&app, "before").await;

    // Prime the cache
    let primed = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/project/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(primed.status(), StatusCode::OK);

    // Rename the project
    let update = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/project/1?name=after&start_date=2024-01-01T00:00:00Z&end_date=2024-06-01T00:00:00Z&description=Pilot%20site")
                .header("content-type", "application/json")
                .body(Body::from(GEOJSON_BODY))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(update.status(), StatusCode::OK);

    // A plain read still sees the cached, pre-update name
    let stale = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/project/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let stale_body = body_to_json(stale.into_body()).await;
    assert_eq!(stale_body["name"].as_str().unwrap(), "before");

    // no-cache bypasses the stale entry
    let fresh = fresh_get(&app, "/project/1").await;
    let fresh_body = body_to_json(fresh.into_body()).await;
    assert_eq!(fresh_body["name"].as_str().unwrap(), "after");
}

// == Update Endpoint Tests ==

#[tokio::test]
async fn test_update_project_changed_and_unchanged() {
    let app = create_test_app();
    create_project(&app, "before").await;

    let uri = "/project/1?name=after&start_date=2024-01-01T00:00:00Z&end_date=2024-06-01T00:00:00Z&description=Pilot%20site";

    // Changed content responds 200 with no body
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(GEOJSON_BODY))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());

    // Identical content responds 204
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(GEOJSON_BODY))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The rename is visible on a fresh read
    let fresh = fresh_get(&app, "/project/1").await;
    let json = body_to_json(fresh.into_body()).await;
    assert_eq!(json["name"].as_str().unwrap(), "after");
}

#[tokio::test]
async fn test_update_project_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/project/42?name=a&start_date=2024-01-01T00:00:00Z&end_date=2024-06-01T00:00:00Z")
                .header("content-type", "application/json")
                .body(Body::from(GEOJSON_BODY))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["detail"].as_str().unwrap(), "Project ID: 42 Not Found");
}

// == Delete Endpoint Tests ==

#[tokio::test]
async fn test_delete_project_success() {
    let app = create_test_app();
    create_project(&app, "doomed").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/project/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());

    // Verify it's gone
    let response = fresh_get(&app, "/project/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_project_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/project/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// == List Endpoint Tests ==

#[tokio::test]
async fn test_list_projects_pagination() {
    let app = create_test_app();
    for name in ["a", "b", "c"] {
        create_project(&app, name).await;
    }

    // First page of two
    let response = fresh_get(&app, "/projects/list?page=1&size=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("x-page").unwrap(), "1");
    assert_eq!(response.headers().get("x-size").unwrap(), "2");
    let link = response
        .headers()
        .get("link")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(link.contains("rel=\"first\""));
    assert!(link.contains("rel=\"next\""));
    assert!(link.contains("rel=\"last\""));
    assert!(!link.contains("rel=\"prev\""));

    let json = body_to_json(response.into_body()).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["project_id"].as_u64().unwrap(), 1);
    assert_eq!(items[1]["project_id"].as_u64().unwrap(), 2);

    // Last page holds the remainder
    let response = fresh_get(&app, "/projects/list?page=2&size=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let link = response
        .headers()
        .get("link")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(link.contains("rel=\"prev\""));
    assert!(!link.contains("rel=\"next\""));

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_projects_defaults() {
    let app = create_test_app();
    create_project(&app, "only").await;

    let response = fresh_get(&app, "/projects/list").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("x-page").unwrap(), "1");
    assert_eq!(response.headers().get("x-size").unwrap(), "10");
}

#[tokio::test]
async fn test_list_projects_empty() {
    let app = create_test_app();

    let response = fresh_get(&app, "/projects/list").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["detail"].as_str().unwrap(), "No projects found");
}

#[tokio::test]
async fn test_list_projects_page_past_end() {
    let app = create_test_app();
    create_project(&app, "only").await;

    let response = fresh_get(&app, "/projects/list?page=5&size=10").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_projects_huge_page_number() {
    let app = create_test_app();
    for name in ["a", "b", "c"] {
        create_project(&app, name).await;
    }

    // usize::MAX passes validation; the skip offset must not wrap
    let response = fresh_get(&app, "/projects/list?page=18446744073709551615&size=2").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["detail"].as_str().unwrap(), "No projects found");

    let response = fresh_get(&app, "/projects/list?page=9223372036854775810&size=2").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_projects_invalid_params() {
    let app = create_test_app();
    create_project(&app, "only").await;

    let response = fresh_get(&app, "/projects/list?page=0").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["detail"].as_str().unwrap(), "Page must be at least 1");

    let response = fresh_get(&app, "/projects/list?size=500").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(
        json["detail"].as_str().unwrap(),
        "Size must be between 1 and 100"
    );
}

// == Service Endpoint Tests ==

#[tokio::test]
async fn test_healthcheck_endpoint() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/healthcheck")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_about_endpoint() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/about")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["name"].as_str().unwrap(), "project_registry");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/healthcheck")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().get("x-request-id").is_some());
}
