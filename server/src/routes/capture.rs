//! Capture test endpoint.
//!
//! Echoes the submitted type and content with a fixed id and timestamp.
//! Nothing is stored or summarized.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

use axum::response::Json;
use janus_client::net::types::CaptureReceipt;
use serde_json::{Map, Value};

pub const TEST_CAPTURE_ID: &str = "test-capture-123";
pub const TEST_CAPTURE_TIMESTAMP: &str = "2024-01-01T00:00:00";

/// `POST /test/capture`: accepts any JSON object.
pub async fn test_capture(Json(body): Json<Map<String, Value>>) -> Json<CaptureReceipt> {
    let receipt = receipt_for(&body);
    tracing::info!(kind = %receipt.kind, content_len = receipt.content.len(), "test capture");
    Json(receipt)
}

/// `type` defaults to `url` and `content` to empty when missing or not strings.
fn receipt_for(body: &Map<String, Value>) -> CaptureReceipt {
    let field = |key: &str| body.get(key).and_then(Value::as_str);
    CaptureReceipt {
        id: TEST_CAPTURE_ID.to_owned(),
        kind: field("type").unwrap_or("url").to_owned(),
        content: field("content").unwrap_or_default().to_owned(),
        timestamp: TEST_CAPTURE_TIMESTAMP.to_owned(),
        processed: false,
    }
}
