//! Toast stack markup.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use super::escape_html;
use crate::state::toast::{Toast, ToastPhase};

/// One element per toast, oldest first. An empty queue renders nothing.
///
/// Only the toast with id `fresh` gets the slide-in class; the stack is
/// redrawn whole, so toasts already on screen must not replay it.
pub fn toasts(toasts: &[Toast], fresh: Option<u64>) -> String {
    toasts.iter().map(|t| toast(t, fresh == Some(t.id))).collect()
}

fn toast(toast: &Toast, fresh: bool) -> String {
    let entering = if fresh { " toast-new" } else { "" };
    let leaving = match toast.phase {
        ToastPhase::Shown => "",
        ToastPhase::Leaving => " toast-leaving",
    };
    format!(
        "<div class=\"toast toast-{severity}{entering}{leaving}\" data-toast-id=\"{id}\" style=\"background-color: {color};\">{text}</div>",
        severity = toast.severity.as_str(),
        id = toast.id,
        color = toast.severity.color(),
        text = escape_html(&toast.text),
    )
}
