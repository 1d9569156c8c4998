use super::*;
use crate::dom::BusyButton;

#[test]
fn with_page_starts_in_past_mode() {
    let doc = MemoryDocument::with_page();
    assert_eq!(doc.ids_with_class(ACTIVE_CLASS), vec!["pastMode", "pastModeBtn"]);
    assert_eq!(doc.value(ids::CAPTURE_TYPE), "url");
    assert_eq!(doc.text(ids::CAPTURE_BTN), messages::CAPTURE_LABEL);
}

#[test]
fn set_html_records_writes_and_plain_text() {
    let doc = MemoryDocument::new();
    doc.set_html("x", "<p>one</p>");
    doc.set_html("x", "<b>two</b>");
    assert_eq!(doc.html("x"), "<b>two</b>");
    assert_eq!(doc.text("x"), "two");
    assert_eq!(doc.writes("x"), vec!["<p>one</p>", "<b>two</b>"]);
}

#[test]
fn set_text_escapes_markup() {
    let doc = MemoryDocument::new();
    doc.set_text("x", "a < b");
    assert_eq!(doc.text("x"), "a < b");
    assert_eq!(doc.html("x"), "a &lt; b");
}

#[test]
fn set_class_toggles() {
    let doc = MemoryDocument::new();
    doc.set_class("x", "on", true);
    assert!(doc.has_class("x", "on"));
    doc.set_class("x", "on", false);
    assert!(!doc.has_class("x", "on"));
}

#[test]
fn unknown_ids_read_as_empty() {
    let doc = MemoryDocument::new();
    assert_eq!(doc.value("missing"), "");
    assert!(!doc.is_disabled("missing"));
    assert!(doc.writes("missing").is_empty());
}

#[test]
fn busy_button_restores_label_on_drop() {
    let doc = MemoryDocument::with_page();
    {
        let _busy = BusyButton::engage(&doc, ids::CAPTURE_BTN, messages::CAPTURING);
        assert!(doc.is_disabled(ids::CAPTURE_BTN));
        assert!(doc.html(ids::CAPTURE_BTN).contains("class=\"loading\""));
        assert_eq!(doc.text(ids::CAPTURE_BTN), messages::CAPTURING);
    }
    assert!(!doc.is_disabled(ids::CAPTURE_BTN));
    assert_eq!(doc.text(ids::CAPTURE_BTN), messages::CAPTURE_LABEL);
}
