use super::*;

#[test]
fn manual_clock_advances_and_sets() {
    let clock = ManualClock::new(100);
    assert_eq!(clock.now_ms(), 100);
    clock.advance(50);
    assert_eq!(clock.now_ms(), 150);
    clock.set(7);
    assert_eq!(clock.now_ms(), 7);
}

#[test]
fn manual_clock_advance_saturates() {
    let clock = ManualClock::new(u64::MAX - 1);
    clock.advance(10);
    assert_eq!(clock.now_ms(), u64::MAX);
}

#[test]
fn system_clock_is_past_2024() {
    // 2024-01-01T00:00:00Z
    assert!(SystemClock.now_ms() > 1_704_067_200_000);
}
