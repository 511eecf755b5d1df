//! API Module
//!
//! HTTP API layer for the status service.
//! Each submodule handles endpoints for a specific document.

pub mod error;
pub mod health;
pub mod metrics;
pub mod pipeline;

use std::any::Any;

use axum::{Router, handler::HandlerWithoutStateExt, routing::get};
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Create the main router with all endpoints
///
/// Paths without a route are looked up in the static asset directory;
/// anything missing there, or a known route hit with the wrong method,
/// gets the structured 404.
pub fn create_router(state: AppState) -> Router {
    let production = state.config().is_production();

    let static_files = ServeDir::new(&state.config().static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(error::not_found.into_service());

    let router = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Dashboard data
        .route("/api/pipeline-status", get(pipeline::pipeline_status))
        .route("/api/metrics", get(metrics::deployment_metrics))
        .method_not_allowed_fallback(error::not_found)
        // Bundled dashboard page
        .fallback_service(static_files)
        .with_state(state);

    with_middleware(router, production)
}

/// Wrap a router with panic recovery and request tracing
pub fn with_middleware(router: Router, production: bool) -> Router {
    router
        .layer(CatchPanicLayer::custom(move |panic: Box<dyn Any + Send + 'static>| {
            error::panic_response(panic, production)
        }))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt; // for `oneshot`

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        send_json(app, Method::GET, uri).await
    }

    async fn send_json(app: Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();

        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn app() -> Router {
        create_router(AppState::new(Config::default()))
    }

    fn panicking_app(production: bool) -> Router {
        async fn boom() -> &'static str {
            panic!("stage table corrupted")
        }

        with_middleware(Router::new().route("/boom", get(boom)), production)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, json) = get_json(app(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["environment"], "development");
        assert!(json["uptime"].is_number());
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_pipeline_status_endpoint() {
        let (status, json) = get_json(app(), "/api/pipeline-status").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["pipeline"], "aws-devops-pipeline");
        assert_eq!(json["status"], "Ready");

        let stages = json["stages"].as_array().unwrap();
        assert_eq!(stages.len(), 3);
        for (stage, name) in stages.iter().zip(["Source", "Build", "Deploy"]) {
            assert_eq!(stage["name"], name);
            assert!(!stage["status"].as_str().unwrap().is_empty());
            assert!(!stage["duration"].as_str().unwrap().is_empty());
            let timestamp = stage["timestamp"].as_str().unwrap();
            assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
        }
    }

    #[tokio::test]
    async fn test_metrics_endpoint() {
        let (status, json) = get_json(app(), "/api/metrics").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_object().unwrap().len(), 6);
        assert_eq!(json["deploymentsToday"], "Automated");
        assert_eq!(json["activeContainers"], "Auto-Scaled");
    }

    #[tokio::test]
    async fn test_unknown_route_is_structured_404() {
        let (status, json) = get_json(app(), "/does-not-exist").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Not Found");
        assert!(json["message"].is_string());
    }

    #[tokio::test]
    async fn test_wrong_method_is_structured_404() {
        for uri in ["/health", "/api/pipeline-status", "/api/metrics", "/nope"] {
            let (status, json) = send_json(app(), Method::POST, uri).await;

            assert_eq!(status, StatusCode::NOT_FOUND, "POST {}", uri);
            assert_eq!(json["error"], "Not Found", "POST {}", uri);
            assert!(json["message"].is_string());
        }
    }

    #[tokio::test]
    async fn test_index_page_is_served() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("source-status"));
        // slots start empty; nothing on the static page claims to be live data
        assert!(html.contains(r#"<span id="lastExecution"></span>"#));
        assert!(!html.contains("Just now"));
        assert!(!html.contains(">Configured<"));
    }

    #[tokio::test]
    async fn test_panic_shows_detail_in_development() {
        let (status, json) = get_json(panicking_app(false), "/boom").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Internal Server Error");
        assert_eq!(json["message"], "stage table corrupted");
    }

    #[tokio::test]
    async fn test_panic_hides_detail_in_production() {
        let (status, json) = get_json(panicking_app(true), "/boom").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Internal Server Error");
        assert_eq!(json["message"], "Something went wrong");
    }
}
