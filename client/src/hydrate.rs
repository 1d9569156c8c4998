//! Browser entry point (`hydrate` only).
//!
//! Builds one controller over the live DOM, binds the page buttons to it,
//! runs the startup loads, and drives toast dismissal from an interval.

use std::future::Future;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::ClientConfig;
use crate::controller::ViewController;
use crate::dom::browser::BrowserDocument;
use crate::dom::ids;
use crate::net::api::ApiClient;
use crate::net::source::MockDataSource;
use crate::state::mode::Mode;
use crate::util::clock::SystemClock;

type PageController = ViewController<BrowserDocument, MockDataSource, ApiClient, SystemClock>;

const TOAST_SWEEP_MS: u32 = 100;

#[wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = ClientConfig::default();
    let Some(surface) = BrowserDocument::new() else {
        log::error!("no document available; not mounting");
        return;
    };
    let backend = match ApiClient::new(&config) {
        Ok(backend) => backend,
        Err(e) => {
            log::error!("API client unavailable: {e}");
            return;
        }
    };
    let source = MockDataSource::new(config.briefing_delay());
    let ctrl = Rc::new(ViewController::new(&config, surface, source, backend, SystemClock));

    bind_click(&ctrl, ids::PAST_MODE_BTN, |c| async move { c.switch_mode(Mode::Past).await });
    bind_click(&ctrl, ids::FUTURE_MODE_BTN, |c| async move { c.switch_mode(Mode::Future).await });
    bind_click(&ctrl, ids::CAPTURE_BTN, |c| async move { c.capture_content().await });
    bind_click(&ctrl, ids::REFRESH_DIGEST_BTN, |c| async move { c.load_digest().await });
    bind_click(&ctrl, ids::REFRESH_EVENTS_BTN, |c| async move { c.load_upcoming_events().await });
    bind_click(&ctrl, ids::GENERATE_BRIEFING_BTN, |c| async move { c.generate_briefing().await });

    let sweeper = Rc::clone(&ctrl);
    Interval::new(TOAST_SWEEP_MS, move || {
        sweeper.dismiss_expired_toasts();
    })
    .forget();

    spawn_local(async move { ctrl.init().await });
}

fn bind_click<F, Fut>(ctrl: &Rc<PageController>, id: &str, action: F)
where
    F: Fn(Rc<PageController>) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let Some(element) = ctrl.surface().element(id) else {
        log::warn!("missing element #{id}; click not bound");
        return;
    };
    let ctrl = Rc::clone(ctrl);
    let handler = Closure::<dyn FnMut()>::new(move || {
        spawn_local(action(Rc::clone(&ctrl)));
    });
    if let Err(e) = element.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref()) {
        log::warn!("failed to bind #{id}: {e:?}");
    }
    handler.forget();
}
