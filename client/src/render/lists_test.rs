use super::*;
use crate::net::source::{mock_briefing, mock_digest, mock_events};
use crate::net::types::CaptureKind;

fn count_entries(html: &str) -> usize {
    html.matches("class=\"list-item\"").count()
}

// =============================================================
// digest
// =============================================================

#[test]
fn empty_digest_renders_fallback_message() {
    assert_eq!(digest(&[]), format!("<p>{}</p>", messages::EMPTY_DIGEST));
}

#[test]
fn digest_renders_entries_in_input_order() {
    let html = digest(&mock_digest());
    assert_eq!(count_entries(&html), 2);
    let first = html.find("AI技術の最新動向").unwrap();
    let second = html.find("UXデザインのベストプラクティス").unwrap();
    assert!(first < second);
}

#[test]
fn digest_links_only_external_sources() {
    let html = digest(&mock_digest());
    assert_eq!(html.matches("<a href=").count(), 1);
    assert!(html.contains("href=\"https://example.com/ai-trends\""));
    assert!(!html.contains("personal_note"));
}

#[test]
fn digest_shows_date_icon_and_kind() {
    let html = digest(&mock_digest());
    assert!(html.contains("📅 2024/1/20"));
    assert!(html.contains("📝 🔗 url"));
    assert!(html.contains("📝 📝 text"));
}

#[test]
fn digest_escapes_record_text() {
    let item = CaptureItem {
        id: "x".into(),
        title: "<script>".into(),
        summary: "a & b".into(),
        source: "https://e.test/?q=\"x\"".into(),
        timestamp: "2024-01-01T00:00:00".into(),
        kind: CaptureKind::Voice,
    };
    let html = digest(&[item]);
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("a &amp; b"));
    assert!(html.contains("q=&quot;x&quot;"));
    assert!(html.contains("🎤 voice"));
}

// =============================================================
// events
// =============================================================

#[test]
fn empty_events_renders_fallback_message() {
    assert_eq!(events(&[]), format!("<p>{}</p>", messages::EMPTY_EVENTS));
}

#[test]
fn events_render_time_and_attendees() {
    let html = events(&mock_events());
    assert_eq!(count_entries(&html), 2);
    assert!(html.contains("🕒 10:00"));
    assert!(html.contains("👥 田中, 佐藤, 鈴木"));
    assert!(html.contains("📅 2024/1/23"));
}

// =============================================================
// briefings
// =============================================================

#[test]
fn empty_briefings_renders_fallback_message() {
    assert_eq!(briefings(&[]), format!("<p>{}</p>", messages::EMPTY_BRIEFINGS));
}

#[test]
fn briefings_keep_line_breaks_in_pre() {
    let html = briefings(&[mock_briefing("2024-01-21T08:15:00Z")]);
    assert_eq!(count_entries(&html), 1);
    assert!(html.contains("📋 プロジェクト進捗ミーティング"));
    assert!(html.contains("確認\n• Q1"));
    assert!(html.contains("🕒 8:15:00"));
}
