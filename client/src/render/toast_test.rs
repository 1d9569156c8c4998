use super::*;
use crate::state::toast::Severity;

fn sample(id: u64, severity: Severity, phase: ToastPhase) -> Toast {
    Toast { id, text: format!("msg {id}"), severity, shown_at_ms: 0, phase }
}

#[test]
fn empty_stack_renders_nothing() {
    assert_eq!(toasts(&[], None), "");
}

#[test]
fn each_toast_gets_its_own_element() {
    let html = toasts(&[sample(1, Severity::Success, ToastPhase::Shown), sample(2, Severity::Error, ToastPhase::Shown)], None);
    assert_eq!(html.matches("class=\"toast ").count(), 2);
    assert!(html.contains("toast-success"));
    assert!(html.contains("background-color: #f56565;"));
    assert!(html.find("msg 1").unwrap() < html.find("msg 2").unwrap());
}

#[test]
fn leaving_toast_carries_leave_class() {
    let html = toasts(&[sample(3, Severity::Warning, ToastPhase::Leaving)], None);
    assert!(html.contains("class=\"toast toast-warning toast-leaving\""));
    assert!(html.contains("data-toast-id=\"3\""));
}

#[test]
fn only_the_fresh_toast_slides_in() {
    let stack = [sample(4, Severity::Info, ToastPhase::Shown), sample(5, Severity::Success, ToastPhase::Shown)];
    let html = toasts(&stack, Some(5));
    assert_eq!(html.matches("toast-new").count(), 1);
    assert!(html.contains("class=\"toast toast-success toast-new\" data-toast-id=\"5\""));
    assert!(html.contains("class=\"toast toast-info\" data-toast-id=\"4\""));
    assert!(!toasts(&stack, None).contains("toast-new"));
}
