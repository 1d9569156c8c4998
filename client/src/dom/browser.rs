//! Live DOM surface (`hydrate` only).
//!
//! Missing elements are ignored: the page shell defines every id, and a
//! partial page should degrade instead of aborting hydration.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use super::Surface;

pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    /// Wrap the window's document. `None` outside a browser.
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    pub fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

impl Surface for BrowserDocument {
    fn set_html(&self, id: &str, html: &str) {
        if let Some(el) = self.element(id) {
            el.set_inner_html(html);
        }
    }

    fn set_class(&self, id: &str, class: &str, enabled: bool) {
        if let Some(el) = self.element(id) {
            let _ = el.class_list().toggle_with_force(class, enabled);
        }
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.class_list().contains(class))
    }

    fn text(&self, id: &str) -> String {
        self.element(id)
            .and_then(|el| el.text_content())
            .unwrap_or_default()
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.element(id) {
            el.set_text_content(Some(text));
        }
    }

    fn value(&self, id: &str) -> String {
        let Some(el) = self.element(id) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            return input.value();
        }
        if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            return area.value();
        }
        if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            return select.value();
        }
        String::new()
    }

    fn set_value(&self, id: &str, value: &str) {
        let Some(el) = self.element(id) else {
            return;
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn set_disabled(&self, id: &str, disabled: bool) {
        if let Some(el) = self.element(id) {
            let _ = if disabled {
                el.set_attribute("disabled", "")
            } else {
                el.remove_attribute("disabled")
            };
        }
    }

    fn is_disabled(&self, id: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_attribute("disabled"))
    }
}
