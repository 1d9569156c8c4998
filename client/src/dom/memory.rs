//! In-memory page used by tests and headless hosts.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use super::{ACTIVE_CLASS, Surface, ids};
use crate::messages;
use crate::render::escape_html;

#[derive(Clone, Debug, Default)]
struct Element {
    classes: BTreeSet<String>,
    html: String,
    text: String,
    value: String,
    disabled: bool,
    /// Every `set_html`/`set_text` payload, oldest first.
    writes: Vec<String>,
}

#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: RefCell<HashMap<String, Element>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document with the page shell's initial state: past mode active,
    /// button labels set, capture type `url`.
    pub fn with_page() -> Self {
        let doc = Self::new();
        for (id, label) in [
            (ids::PAST_MODE_BTN, messages::PAST_MODE_LABEL),
            (ids::FUTURE_MODE_BTN, messages::FUTURE_MODE_LABEL),
            (ids::CAPTURE_BTN, messages::CAPTURE_LABEL),
            (ids::REFRESH_DIGEST_BTN, messages::REFRESH_DIGEST_LABEL),
            (ids::REFRESH_EVENTS_BTN, messages::REFRESH_EVENTS_LABEL),
            (ids::GENERATE_BRIEFING_BTN, messages::GENERATE_BRIEFING_LABEL),
        ] {
            doc.seed(id, |el| {
                el.text = label.to_owned();
                el.html = escape_html(label);
            });
        }
        doc.seed(ids::CAPTURE_TYPE, |el| el.value = "url".to_owned());
        for id in [ids::CAPTURE_CONTENT, ids::DIGEST_LIST, ids::UPCOMING_EVENTS, ids::BRIEFING_LIST, ids::TOAST_STACK] {
            doc.seed(id, |_| {});
        }
        doc.set_class(ids::PAST_MODE_BTN, ACTIVE_CLASS, true);
        doc.set_class(ids::PAST_MODE, ACTIVE_CLASS, true);
        doc.seed(ids::FUTURE_MODE, |_| {});
        doc
    }

    /// Inner HTML of the element.
    pub fn html(&self, id: &str) -> String {
        self.elements
            .borrow()
            .get(id)
            .map(|el| el.html.clone())
            .unwrap_or_default()
    }

    /// All content written to the element, oldest first.
    pub fn writes(&self, id: &str) -> Vec<String> {
        self.elements
            .borrow()
            .get(id)
            .map(|el| el.writes.clone())
            .unwrap_or_default()
    }

    /// Ids currently carrying `class`, sorted.
    pub fn ids_with_class(&self, class: &str) -> Vec<String> {
        let mut found: Vec<String> = self
            .elements
            .borrow()
            .iter()
            .filter(|(_, el)| el.classes.contains(class))
            .map(|(id, _)| id.clone())
            .collect();
        found.sort();
        found
    }

    fn seed(&self, id: &str, f: impl FnOnce(&mut Element)) {
        f(self.elements.borrow_mut().entry(id.to_owned()).or_default());
    }
}

impl Surface for MemoryDocument {
    fn set_html(&self, id: &str, html: &str) {
        self.seed(id, |el| {
            el.html = html.to_owned();
            el.text = strip_tags(html);
            el.writes.push(html.to_owned());
        });
    }

    fn set_class(&self, id: &str, class: &str, enabled: bool) {
        self.seed(id, |el| {
            if enabled {
                el.classes.insert(class.to_owned());
            } else {
                el.classes.remove(class);
            }
        });
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .borrow()
            .get(id)
            .is_some_and(|el| el.classes.contains(class))
    }

    fn text(&self, id: &str) -> String {
        self.elements
            .borrow()
            .get(id)
            .map(|el| el.text.clone())
            .unwrap_or_default()
    }

    fn set_text(&self, id: &str, text: &str) {
        self.seed(id, |el| {
            el.text = text.to_owned();
            el.html = escape_html(text);
            el.writes.push(text.to_owned());
        });
    }

    fn value(&self, id: &str) -> String {
        self.elements
            .borrow()
            .get(id)
            .map(|el| el.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&self, id: &str, value: &str) {
        self.seed(id, |el| el.value = value.to_owned());
    }

    fn set_disabled(&self, id: &str, disabled: bool) {
        self.seed(id, |el| el.disabled = disabled);
    }

    fn is_disabled(&self, id: &str) -> bool {
        self.elements
            .borrow()
            .get(id)
            .is_some_and(|el| el.disabled)
    }
}

/// Drop markup, keeping text. Good enough for the controller's own output.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.trim().to_owned()
}
