use super::*;

const TIMING: ToastTiming = ToastTiming { display_ms: 3000, leave_ms: 300 };

// =============================================================
// Severity
// =============================================================

#[test]
fn severity_default_is_info() {
    assert_eq!(Severity::default(), Severity::Info);
}

#[test]
fn severity_colors_are_distinct() {
    let colors = [Severity::Success, Severity::Error, Severity::Warning, Severity::Info].map(Severity::color);
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// =============================================================
// ToastQueue
// =============================================================

#[test]
fn push_assigns_increasing_ids_and_keeps_all() {
    let mut queue = ToastQueue::new(TIMING);
    let a = queue.push("one", Severity::Success, 0);
    let b = queue.push("two", Severity::Error, 10);
    assert!(b > a);
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.toasts()[0].text, "one");
    assert_eq!(queue.toasts()[1].text, "two");
}

#[test]
fn sweep_before_display_time_changes_nothing() {
    let mut queue = ToastQueue::new(TIMING);
    queue.push("one", Severity::Info, 0);
    assert!(!queue.sweep(2999));
    assert_eq!(queue.toasts()[0].phase, ToastPhase::Shown);
}

#[test]
fn sweep_moves_to_leaving_then_removes() {
    let mut queue = ToastQueue::new(TIMING);
    queue.push("one", Severity::Info, 0);
    assert!(queue.sweep(3000));
    assert_eq!(queue.toasts()[0].phase, ToastPhase::Leaving);
    assert!(!queue.sweep(3100));
    assert!(queue.sweep(3300));
    assert!(queue.is_empty());
}

#[test]
fn sweep_expires_each_toast_on_its_own_schedule() {
    let mut queue = ToastQueue::new(TIMING);
    queue.push("early", Severity::Info, 0);
    queue.push("late", Severity::Warning, 1000);
    queue.sweep(3300);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.toasts()[0].text, "late");
    assert_eq!(queue.toasts()[0].phase, ToastPhase::Shown);
    queue.sweep(4300);
    assert!(queue.is_empty());
}
