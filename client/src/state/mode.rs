//! Top-level display mode.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use crate::dom::ids;

/// The two mutually exclusive views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Digest of previously captured content.
    #[default]
    Past,
    /// Upcoming events and briefings.
    Future,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Past, Mode::Future];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Past => "past",
            Self::Future => "future",
        }
    }

    /// Id of the toggle button selecting this mode.
    #[must_use]
    pub fn button_id(self) -> &'static str {
        match self {
            Self::Past => ids::PAST_MODE_BTN,
            Self::Future => ids::FUTURE_MODE_BTN,
        }
    }

    /// Id of the content region shown in this mode.
    #[must_use]
    pub fn content_id(self) -> &'static str {
        match self {
            Self::Past => ids::PAST_MODE,
            Self::Future => ids::FUTURE_MODE,
        }
    }
}
