use super::*;

#[test]
fn default_mode_is_past() {
    assert_eq!(Mode::default(), Mode::Past);
}

#[test]
fn ids_follow_mode_name() {
    assert_eq!(Mode::Past.button_id(), "pastModeBtn");
    assert_eq!(Mode::Past.content_id(), "pastMode");
    assert_eq!(Mode::Future.button_id(), "futureModeBtn");
    assert_eq!(Mode::Future.content_id(), "futureMode");
}

#[test]
fn all_lists_each_mode_once() {
    assert_eq!(Mode::ALL.len(), 2);
    assert_ne!(Mode::ALL[0], Mode::ALL[1]);
    assert_eq!(Mode::ALL.map(Mode::as_str), ["past", "future"]);
}
