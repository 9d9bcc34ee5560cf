use super::*;
use crate::state::notification::AlertLevel;

#[test]
fn region_tracks_notifier_state() {
    let notifier = Notifier::new(5_000);
    let state = notifier.state();
    assert_eq!(state.with_untracked(region_class), "alert alert-info d-none");
    assert_eq!(state.with_untracked(region_text), "");

    let seq = notifier.show("Card blocked", AlertLevel::Warning);
    assert_eq!(state.with_untracked(region_class), "alert alert-warning");
    assert_eq!(state.with_untracked(region_text), "Card blocked");

    notifier.dismiss(seq);
    assert_eq!(state.with_untracked(region_class), "alert alert-warning d-none");
    assert_eq!(state.with_untracked(region_text), "Card blocked");
}

#[test]
fn region_renders_custom_level_class() {
    let notifier = Notifier::new(5_000);
    notifier.show("Heads up", AlertLevel::parse("custom"));
    assert_eq!(notifier.state().with_untracked(region_class), "alert alert-custom");
}
