//! View controller: mode toggle, list loading, capture, briefings and toasts.
//!
//! SYSTEM CONTEXT
//! ==============
//! One controller instance owns all UI state and is shared by every event
//! handler on the page. Each operation follows event -> state update ->
//! render: it reads the page through the [`Surface`], asks the injected
//! [`DataSource`] or [`Backend`], and writes markup produced by `render`.
//!
//! CONCURRENCY
//! ===========
//! Single-threaded and cooperative. Methods take `&self`; mode and toast
//! state sit in `Cell`/`RefCell` and no borrow is held across an `.await`,
//! so overlapping handlers can run on the same instance. At most one action
//! per trigger button is in flight because the button is disabled while it
//! runs.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here fails outward. Network and data-source errors are logged
//! and turned into a toast or a failure message; input errors are rejected
//! with a warning toast before any request is made.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::{Cell, RefCell};

use crate::config::ClientConfig;
use crate::dom::{ACTIVE_CLASS, BusyButton, Surface, ids};
use crate::messages;
use crate::net::api::Backend;
use crate::net::source::DataSource;
use crate::net::types::{CaptureKind, CaptureRequest};
use crate::render;
use crate::state::mode::Mode;
use crate::state::toast::{Severity, Toast, ToastQueue};
use crate::util::clock::Clock;

/// Page controller over a [`Surface`], a [`DataSource`], a [`Backend`] and
/// a [`Clock`] for toast expiry.
pub struct ViewController<S, D, B, C> {
    surface: S,
    source: D,
    backend: B,
    clock: C,
    mode: Cell<Mode>,
    toasts: RefCell<ToastQueue>,
}

impl<S, D, B, C> ViewController<S, D, B, C>
where
    S: Surface,
    D: DataSource,
    B: Backend,
    C: Clock,
{
    pub fn new(config: &ClientConfig, surface: S, source: D, backend: B, clock: C) -> Self {
        Self {
            surface,
            source,
            backend,
            clock,
            mode: Cell::new(Mode::default()),
            toasts: RefCell::new(ToastQueue::new(config.toast_timing())),
        }
    }

    pub fn current_mode(&self) -> Mode {
        self.mode.get()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Snapshot of the visible toasts, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().toasts().to_vec()
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Mark the current mode on the page, then run the startup loads.
    pub async fn init(&self) {
        self.apply_mode_markers(self.mode.get());
        self.load_initial_data().await;
    }

    /// Health check followed by the digest load.
    pub async fn load_initial_data(&self) {
        self.test_api_connection().await;
        self.load_digest().await;
    }

    /// `GET /health`. Returns whether the API answered.
    pub async fn test_api_connection(&self) -> bool {
        match self.backend.health().await {
            Ok(health) => {
                log::info!("API health check: {health:?}");
                true
            }
            Err(e) => {
                log::error!("API connection failed: {e}");
                self.show_message(messages::API_UNREACHABLE, Severity::Error);
                false
            }
        }
    }

    // =========================================================================
    // MODE
    // =========================================================================

    /// Activate `mode` and refresh its list.
    pub async fn switch_mode(&self, mode: Mode) {
        self.mode.set(mode);
        self.apply_mode_markers(mode);
        match mode {
            Mode::Past => self.load_digest().await,
            Mode::Future => self.load_upcoming_events().await,
        }
    }

    fn apply_mode_markers(&self, active: Mode) {
        for mode in Mode::ALL {
            let on = mode == active;
            self.surface.set_class(mode.button_id(), ACTIVE_CLASS, on);
            self.surface.set_class(mode.content_id(), ACTIVE_CLASS, on);
        }
    }

    // =========================================================================
    // LISTS
    // =========================================================================

    /// Show the loading placeholder, then the digest or a failure message.
    pub async fn load_digest(&self) {
        self.surface
            .set_html(ids::DIGEST_LIST, &render::loading(messages::LOADING_DIGEST));
        match self.source.digest().await {
            Ok(items) => self.surface.set_html(ids::DIGEST_LIST, &render::digest(&items)),
            Err(e) => {
                log::error!("failed to load digest: {e}");
                self.surface
                    .set_html(ids::DIGEST_LIST, &render::failure(messages::DIGEST_LOAD_FAILED));
            }
        }
    }

    /// Show the loading placeholder, then upcoming events or a failure message.
    pub async fn load_upcoming_events(&self) {
        self.surface
            .set_html(ids::UPCOMING_EVENTS, &render::loading(messages::LOADING_EVENTS));
        match self.source.upcoming_events().await {
            Ok(events) => self.surface.set_html(ids::UPCOMING_EVENTS, &render::events(&events)),
            Err(e) => {
                log::error!("failed to load events: {e}");
                self.surface
                    .set_html(ids::UPCOMING_EVENTS, &render::failure(messages::EVENTS_LOAD_FAILED));
            }
        }
    }

    // =========================================================================
    // ACTIONS
    // =========================================================================

    /// Submit the capture form.
    ///
    /// Blank content and unknown capture types are rejected with a warning
    /// and no request. On success the text field is cleared and the digest
    /// reloaded.
    pub async fn capture_content(&self) {
        let raw_kind = self.surface.value(ids::CAPTURE_TYPE);
        let content = self.surface.value(ids::CAPTURE_CONTENT);

        if content.trim().is_empty() {
            self.show_message(messages::CONTENT_REQUIRED, Severity::Warning);
            return;
        }
        let kind = match raw_kind.parse::<CaptureKind>() {
            Ok(kind) => kind,
            Err(e) => {
                log::warn!("capture rejected: {e}");
                self.show_message(messages::CAPTURE_TYPE_REQUIRED, Severity::Warning);
                return;
            }
        };

        let busy = BusyButton::engage(&self.surface, ids::CAPTURE_BTN, messages::CAPTURING);
        let request = CaptureRequest { kind, content };
        let captured = match self.backend.capture(&request).await {
            Ok(receipt) => {
                log::info!("capture result: {receipt:?}");
                self.surface.set_value(ids::CAPTURE_CONTENT, "");
                self.show_message(messages::CAPTURED, Severity::Success);
                true
            }
            Err(e) => {
                log::error!("capture failed: {e}");
                self.show_message(messages::CAPTURE_FAILED, Severity::Error);
                false
            }
        };
        drop(busy);

        if captured {
            self.load_digest().await;
        }
    }

    /// Generate briefings for upcoming events and render them.
    pub async fn generate_briefing(&self) {
        let busy = BusyButton::engage(&self.surface, ids::GENERATE_BRIEFING_BTN, messages::GENERATING);
        match self.source.generate_briefings().await {
            Ok(briefings) => {
                self.surface
                    .set_html(ids::BRIEFING_LIST, &render::briefings(&briefings));
                self.show_message(messages::BRIEFING_READY, Severity::Success);
            }
            Err(e) => {
                log::error!("failed to generate briefing: {e}");
                self.show_message(messages::BRIEFING_FAILED, Severity::Error);
            }
        }
        drop(busy);
    }

    // =========================================================================
    // TOASTS
    // =========================================================================

    /// Show a toast and return its id. Earlier toasts stay visible.
    pub fn show_message(&self, text: &str, severity: Severity) -> u64 {
        let id = self
            .toasts
            .borrow_mut()
            .push(text, severity, self.clock.now_ms());
        self.render_toasts(Some(id));
        id
    }

    /// Advance toast phases against the clock and drop expired toasts.
    /// Returns the number still visible.
    pub fn dismiss_expired_toasts(&self) -> usize {
        let changed = self.toasts.borrow_mut().sweep(self.clock.now_ms());
        if changed {
            self.render_toasts(None);
        }
        self.toasts.borrow().len()
    }

    fn render_toasts(&self, fresh: Option<u64>) {
        let html = render::toasts(self.toasts.borrow().toasts(), fresh);
        self.surface.set_html(ids::TOAST_STACK, &html);
    }
}
