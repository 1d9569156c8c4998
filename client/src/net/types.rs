//! Wire and view-model types shared by the client and the API stub.
//!
//! DESIGN
//! ======
//! Records are transient: they are created by a load or capture, rendered,
//! and dropped on the next load. Timestamps stay as the strings the source
//! sent; the renderers parse them when formatting.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Source value marking a capture with no external link.
pub const PERSONAL_NOTE_SOURCE: &str = "personal_note";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by client network and data-source operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("unexpected response status: {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The capture type control held a value outside `url`/`text`/`voice`.
    #[error("unknown capture type: {0}")]
    InvalidCaptureKind(String),

    /// A data source could not produce its list.
    #[error("data source failed: {0}")]
    Source(String),
}

// =============================================================================
// CAPTURE
// =============================================================================

/// Kind of captured content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureKind {
    #[default]
    Url,
    Text,
    Voice,
    /// Any kind this client does not know. Only produced by deserialization.
    #[serde(other)]
    Other,
}

impl CaptureKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Text => "text",
            Self::Voice => "voice",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for CaptureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaptureKind {
    type Err = ClientError;

    /// Parse a capture-type control value. Only the three submittable kinds
    /// are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "url" => Ok(Self::Url),
            "text" => Ok(Self::Text),
            "voice" => Ok(Self::Voice),
            other => Err(ClientError::InvalidCaptureKind(other.to_owned())),
        }
    }
}

/// A captured piece of content with its summary, as shown in the digest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Origin URL, or [`PERSONAL_NOTE_SOURCE`] for notes without one.
    pub source: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: CaptureKind,
}

impl CaptureItem {
    /// Whether the entry should link back to its source.
    #[must_use]
    pub fn has_external_source(&self) -> bool {
        self.source != PERSONAL_NOTE_SOURCE
    }
}

/// Body of `POST /test/capture`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRequest {
    #[serde(rename = "type")]
    pub kind: CaptureKind,
    pub content: String,
}

/// Response of `POST /test/capture`. Logged by the client, never rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureReceipt {
    pub id: String,
    /// Echo of the submitted type, kept verbatim.
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub timestamp: String,
    pub processed: bool,
}

// =============================================================================
// FUTURE MODE
// =============================================================================

/// An upcoming calendar event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start_time: String,
    /// Attendee display names, in calendar order.
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// Preparatory notes generated for an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Briefing {
    pub id: String,
    pub event_title: String,
    pub briefing_content: String,
    pub created_at: String,
}

// =============================================================================
// HEALTH
// =============================================================================

/// Body of `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}
