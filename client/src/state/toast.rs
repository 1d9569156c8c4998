//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! Each toast lives for `display_ms`, then switches to the leaving phase
//! (slide-out animation) for `leave_ms`, then is dropped. Toasts never
//! replace one another; the queue keeps them in arrival order.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Severity tag of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Background color of the toast.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#48bb78",
            Self::Error => "#f56565",
            Self::Warning => "#ed8936",
            Self::Info => "#4299e1",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPhase {
    #[default]
    Shown,
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub severity: Severity,
    pub shown_at_ms: u64,
    pub phase: ToastPhase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTiming {
    pub display_ms: u64,
    pub leave_ms: u64,
}

#[derive(Clone, Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    timing: ToastTiming,
}

impl ToastQueue {
    pub fn new(timing: ToastTiming) -> Self {
        Self { toasts: Vec::new(), next_id: 1, timing }
    }

    /// Add a toast shown at `now_ms` and return its id.
    pub fn push(&mut self, text: &str, severity: Severity, now_ms: u64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            text: text.to_owned(),
            severity,
            shown_at_ms: now_ms,
            phase: ToastPhase::Shown,
        });
        id
    }

    /// Advance phases against `now_ms`. Returns `true` if anything changed.
    pub fn sweep(&mut self, now_ms: u64) -> bool {
        let display = self.timing.display_ms;
        let lifetime = display.saturating_add(self.timing.leave_ms);
        let before = self.toasts.len();
        self.toasts
            .retain(|t| now_ms.saturating_sub(t.shown_at_ms) < lifetime);
        let mut changed = self.toasts.len() != before;

        for toast in &mut self.toasts {
            if toast.phase == ToastPhase::Shown && now_ms.saturating_sub(toast.shown_at_ms) >= display {
                toast.phase = ToastPhase::Leaving;
                changed = true;
            }
        }
        changed
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
