//! Client configuration.
//!
//! Defaults match the local development setup: the API stub on
//! `127.0.0.1:8000`, a 3 s toast display time, and a 2 s simulated briefing
//! delay. The browser has no environment to read, so hosts and tests
//! override fields through the `with_*` builders.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::state::toast::ToastTiming;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TOAST_DISPLAY_MS: u64 = 3000;
pub const DEFAULT_TOAST_LEAVE_MS: u64 = 300;
pub const DEFAULT_BRIEFING_DELAY_MS: u64 = 2000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash.
    pub api_base_url: String,
    pub toast_display_ms: u64,
    pub toast_leave_ms: u64,
    pub briefing_delay_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            toast_display_ms: DEFAULT_TOAST_DISPLAY_MS,
            toast_leave_ms: DEFAULT_TOAST_LEAVE_MS,
            briefing_delay_ms: DEFAULT_BRIEFING_DELAY_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_api_base_url(mut self, base_url: &str) -> Self {
        self.api_base_url = normalize_base_url(base_url);
        self
    }

    #[must_use]
    pub fn with_briefing_delay_ms(mut self, delay_ms: u64) -> Self {
        self.briefing_delay_ms = delay_ms;
        self
    }

    pub fn briefing_delay(&self) -> Duration {
        Duration::from_millis(self.briefing_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn toast_timing(&self) -> ToastTiming {
        ToastTiming { display_ms: self.toast_display_ms, leave_ms: self.toast_leave_ms }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
