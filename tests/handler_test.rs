//! Handler 테스트
//!
//! axum-test를 사용한 라우터/미들웨어 레이어 테스트

use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    routing::get,
    Router,
};
use axum_test::TestServer;
use echo_bridge_server::{
    app,
    utils::error::{handle_panic, AppError},
};
use serde_json::{json, Value};
use tower_http::catch_panic::CatchPanicLayer;

mod echo_handler {
    use super::*;

    #[tokio::test]
    async fn should_return_200_for_valid_request() {
        // Arrange
        let server = TestServer::new(app()).unwrap();

        // Act
        let response = server
            .post("/api/echo")
            .json(&json!({ "message": "안녕하세요" }))
            .await;

        // Assert
        response.assert_status_ok();
        response.assert_json_contains(&json!({ "echo": "Echo: 안녕하세요" }));
    }

    #[tokio::test]
    async fn should_return_exactly_two_fields_on_success() {
        let server = TestServer::new(app()).unwrap();

        let response = server
            .post("/api/echo")
            .json(&json!({ "message": "shape" }))
            .await;

        let body: Value = response.json();
        let fields = body.as_object().unwrap();
        assert_eq!(fields.len(), 2);
        assert!(fields.contains_key("echo"));
        assert!(fields.contains_key("timestamp"));
    }

    #[tokio::test]
    async fn should_return_uniform_error_shape_on_validation_failure() {
        let server = TestServer::new(app()).unwrap();

        let response = server
            .post("/api/echo")
            .json(&json!({ "message": "" }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        let fields = body.as_object().unwrap();
        assert_eq!(fields.len(), 4);
        for key in ["error", "message", "status", "timestamp"] {
            assert!(fields.contains_key(key), "missing {}", key);
        }
    }

    #[tokio::test]
    async fn should_handle_concurrent_requests_independently() {
        let server = TestServer::new(app()).unwrap();

        let (first, second) = tokio::join!(
            async { server.post("/api/echo").json(&json!({ "message": "one" })).await },
            async { server.post("/api/echo").json(&json!({ "message": "two" })).await },
        );

        first.assert_json_contains(&json!({ "echo": "Echo: one" }));
        second.assert_json_contains(&json!({ "echo": "Echo: two" }));
    }
}

mod error_normalizer {
    use super::*;

    async fn panicking_handler() -> &'static str {
        panic!("unexpected null value")
    }

    async fn failing_handler() -> Result<&'static str, AppError> {
        Err(AppError::internal_error("storage unavailable"))
    }

    fn faulty_router() -> Router {
        Router::new()
            .route("/panic", get(panicking_handler))
            .route("/fail", get(failing_handler))
            .layer(CatchPanicLayer::custom(handle_panic))
    }

    #[tokio::test]
    async fn should_convert_panic_into_internal_error() {
        let server = TestServer::new(faulty_router()).unwrap();

        let response = server.get("/panic").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json_contains(&json!({
            "error": "Internal server error",
            "message": "unexpected null value",
            "status": 500
        }));
    }

    #[tokio::test]
    async fn should_forward_fault_text_for_internal_error() {
        let server = TestServer::new(faulty_router()).unwrap();

        let response = server.get("/fail").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json_contains(&json!({
            "error": "Internal server error",
            "message": "storage unavailable",
            "status": 500
        }));
    }
}

mod middleware {
    use super::*;

    #[tokio::test]
    async fn should_echo_incoming_request_id() {
        let server = TestServer::new(app()).unwrap();

        let response = server
            .get("/api/health")
            .add_header(
                HeaderName::from_static("x-request-id"),
                HeaderValue::from_static("trace-me-123"),
            )
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("x-request-id"), "trace-me-123");
    }

    #[tokio::test]
    async fn should_generate_request_id_when_missing() {
        let server = TestServer::new(app()).unwrap();

        let response = server.get("/api/health").await;

        let request_id = response.header("x-request-id");
        assert!(!request_id.is_empty());
    }

    #[tokio::test]
    async fn should_allow_any_origin() {
        let server = TestServer::new(app()).unwrap();

        let response = server
            .post("/api/echo")
            .add_header(
                HeaderName::from_static("origin"),
                HeaderValue::from_static("http://localhost:5173"),
            )
            .json(&json!({ "message": "cors" }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("access-control-allow-origin"), "*");
    }
}
