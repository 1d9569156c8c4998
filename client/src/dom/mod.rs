//! Page surface abstraction.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller mutates the page only through [`Surface`]. `memory`
//! provides an in-memory document for tests and headless hosts; `browser`
//! wraps the live DOM under the `hydrate` feature. Element ids are fixed by
//! the page shell in `render::shell`.
//!
//! Methods take `&self`: a surface is shared by every event handler on the
//! single UI thread and keeps its own interior mutability.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod memory;

/// Element ids the controller reads and writes.
pub mod ids {
    pub const PAST_MODE_BTN: &str = "pastModeBtn";
    pub const FUTURE_MODE_BTN: &str = "futureModeBtn";
    pub const PAST_MODE: &str = "pastMode";
    pub const FUTURE_MODE: &str = "futureMode";
    pub const CAPTURE_TYPE: &str = "captureType";
    pub const CAPTURE_CONTENT: &str = "captureContent";
    pub const CAPTURE_BTN: &str = "captureBtn";
    pub const REFRESH_DIGEST_BTN: &str = "refreshDigestBtn";
    pub const DIGEST_LIST: &str = "digestList";
    pub const REFRESH_EVENTS_BTN: &str = "refreshEventsBtn";
    pub const UPCOMING_EVENTS: &str = "upcomingEvents";
    pub const GENERATE_BRIEFING_BTN: &str = "generateBriefingBtn";
    pub const BRIEFING_LIST: &str = "briefingList";
    pub const TOAST_STACK: &str = "toastStack";
}

/// CSS class marking the selected mode button and visible mode region.
pub const ACTIVE_CLASS: &str = "active";

pub trait Surface {
    /// Replace the element's children with `html`.
    fn set_html(&self, id: &str, html: &str);

    /// Add or remove `class` on the element.
    fn set_class(&self, id: &str, class: &str, enabled: bool);

    fn has_class(&self, id: &str, class: &str) -> bool;

    /// Text content of the element.
    fn text(&self, id: &str) -> String;

    /// Replace the element's children with plain text.
    fn set_text(&self, id: &str, text: &str);

    /// Current value of a form control. Empty for unknown ids.
    fn value(&self, id: &str) -> String;

    fn set_value(&self, id: &str, value: &str);

    fn set_disabled(&self, id: &str, disabled: bool);

    fn is_disabled(&self, id: &str) -> bool;
}

/// Puts a button into its busy state and restores label and enabled state
/// when dropped, on every exit path.
pub struct BusyButton<'a, S: Surface + ?Sized> {
    surface: &'a S,
    id: &'static str,
    label: String,
}

impl<'a, S: Surface + ?Sized> BusyButton<'a, S> {
    pub fn engage(surface: &'a S, id: &'static str, busy_label: &str) -> Self {
        let label = surface.text(id);
        surface.set_html(id, &crate::render::busy_label(busy_label));
        surface.set_disabled(id, true);
        Self { surface, id, label }
    }
}

impl<S: Surface + ?Sized> Drop for BusyButton<'_, S> {
    fn drop(&mut self) {
        self.surface.set_text(self.id, &self.label);
        self.surface.set_disabled(self.id, false);
    }
}
