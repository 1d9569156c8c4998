//! Pure projections from records to markup.
//!
//! DESIGN
//! ======
//! Every function here is a plain `data -> String` mapping with no access
//! to the page, so rendering is unit-tested without a document. Record text
//! is always escaped; only the markup produced here is trusted.


pub mod lists;
pub mod shell;
pub mod toast;

use chrono::{DateTime, NaiveDateTime};

use crate::messages;
use crate::net::types::CaptureKind;

pub use lists::{briefings, digest, events};
pub use toast::toasts;

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Spinner plus label for a button that is working.
pub fn busy_label(label: &str) -> String {
    format!("<span class=\"loading\"></span> {}", escape_html(label))
}

/// Placeholder written into a list region while it loads.
pub fn loading(label: &str) -> String {
    format!("<div class=\"loading\"></div> {}", escape_html(label))
}

/// Static message replacing a list region whose load failed.
pub fn failure(message: &str) -> String {
    format!("<p>{}</p>", escape_html(message))
}

pub fn type_icon(kind: CaptureKind) -> &'static str {
    match kind {
        CaptureKind::Url => "🔗",
        CaptureKind::Text => "📝",
        CaptureKind::Voice => "🎤",
        CaptureKind::Other => "📄",
    }
}

// =============================================================================
// TIMESTAMPS
// =============================================================================

/// Parse an RFC 3339 or offset-less ISO timestamp. Offsets are kept as
/// given: the wall time in the timestamp is what gets displayed.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    raw.parse::<chrono::NaiveDate>()
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn format_timestamp(raw: &str, pattern: &str) -> String {
    parse_timestamp(raw).map_or_else(|| messages::INVALID_DATE.to_owned(), |dt| dt.format(pattern).to_string())
}

/// `2024/1/20`
pub fn short_date(raw: &str) -> String {
    format_timestamp(raw, "%Y/%-m/%-d")
}

/// `09:05`
pub fn hour_minute(raw: &str) -> String {
    format_timestamp(raw, "%H:%M")
}

/// `9:05:00`
pub fn clock_time(raw: &str) -> String {
    format_timestamp(raw, "%-H:%M:%S")
}
