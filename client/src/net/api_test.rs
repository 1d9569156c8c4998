use super::*;
use crate::net::types::CaptureKind;
use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};

/// Serve `app` on an ephemeral local port and return its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });
    format!("http://{addr}")
}

fn client_for(base_url: &str) -> ApiClient {
    let config = ClientConfig::default().with_api_base_url(base_url);
    ApiClient::new(&config).expect("client builds")
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn health_endpoint_appends_path() {
    assert_eq!(health_endpoint("http://127.0.0.1:8000"), "http://127.0.0.1:8000/health");
}

#[test]
fn capture_endpoint_appends_path() {
    assert_eq!(capture_endpoint("http://127.0.0.1:8000"), "http://127.0.0.1:8000/test/capture");
}

#[test]
fn new_keeps_normalized_base_url() {
    let client = client_for("http://example.test/");
    assert_eq!(client.base_url(), "http://example.test");
}

// =============================================================
// Live calls against an in-process server
// =============================================================

#[tokio::test]
async fn health_decodes_body() {
    let app = Router::new().route(
        "/health",
        get(|| async { Json(serde_json::json!({ "status": "healthy", "service": "janus-ai-butler" })) }),
    );
    let base = serve(app).await;
    let health = client_for(&base).health().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "janus-ai-butler");
}

#[tokio::test]
async fn health_non_success_status_is_error() {
    let app = Router::new().route("/health", get(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    let base = serve(app).await;
    let err = client_for(&base).health().await.unwrap_err();
    assert!(matches!(err, ClientError::Status(503)));
}

#[tokio::test]
async fn health_invalid_json_is_decode_error() {
    let app = Router::new().route("/health", get(|| async { "not json" }));
    let base = serve(app).await;
    let err = client_for(&base).health().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn capture_posts_type_and_content() {
    let app = Router::new().route(
        "/test/capture",
        post(|Json(body): Json<serde_json::Value>| async move {
            Json(serde_json::json!({
                "id": "test-capture-123",
                "type": body["type"],
                "content": body["content"],
                "timestamp": "2024-01-01T00:00:00",
                "processed": false
            }))
        }),
    );
    let base = serve(app).await;
    let request = CaptureRequest { kind: CaptureKind::Text, content: "memo".into() };
    let receipt = client_for(&base).capture(&request).await.unwrap();
    assert_eq!(receipt.id, "test-capture-123");
    assert_eq!(receipt.kind, "text");
    assert_eq!(receipt.content, "memo");
}

#[tokio::test]
async fn unreachable_server_is_request_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let err = client_for(&format!("http://{addr}")).health().await.unwrap_err();
    assert!(matches!(err, ClientError::Request(_)));
}
