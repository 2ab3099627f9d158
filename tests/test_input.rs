use world_one_one::input::{KeyTracker, HOLD_WINDOW};

#[test]
fn first_press_is_fresh() {
    let mut keys = KeyTracker::new();
    assert!(keys.press('x', 10));
    assert!(keys.is_held(&'x', 10));
}

#[test]
fn auto_repeat_press_inside_window_is_not_fresh() {
    // Classic terminals report a held key as repeated presses.
    let mut keys = KeyTracker::new();
    assert!(keys.press('\n', 10));
    assert!(!keys.press('\n', 12));
    assert!(!keys.press('\n', 12 + HOLD_WINDOW));
}

#[test]
fn held_enter_confirms_once() {
    let mut keys = KeyTracker::new();
    let confirms = (0..60u64)
        .step_by(2)
        .filter(|&frame| keys.press('\n', frame))
        .count();
    assert_eq!(confirms, 1);
}

#[test]
fn press_after_window_expires_is_fresh() {
    let mut keys = KeyTracker::new();
    keys.press('\n', 10);
    assert!(!keys.is_held(&'\n', 11 + HOLD_WINDOW));
    assert!(keys.press('\n', 11 + HOLD_WINDOW));
}

#[test]
fn press_after_release_is_fresh() {
    let mut keys = KeyTracker::new();
    keys.press('\n', 10);
    keys.release(&'\n');
    assert!(!keys.is_held(&'\n', 10));
    assert!(keys.press('\n', 11));
}

#[test]
fn repeat_keeps_key_held() {
    let mut keys = KeyTracker::new();
    keys.press('a', 0);
    keys.repeat('a', HOLD_WINDOW);
    assert!(keys.is_held(&'a', 2 * HOLD_WINDOW));
    assert!(!keys.press('a', 2 * HOLD_WINDOW));
}

#[test]
fn any_held_checks_every_alias() {
    let mut keys = KeyTracker::new();
    keys.press('A', 3);
    assert!(keys.any_held(&['a', 'A'], 5));
    assert!(!keys.any_held(&['d', 'D'], 5));
}
