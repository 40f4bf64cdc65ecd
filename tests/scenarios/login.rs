use keyshell::desktop::app::{ManageIntent, Screen};

use crate::harness::TestHarness;

#[test]
fn login_prompts_for_recovery_then_shows_the_device() {
    let mut h = TestHarness::new();
    let anchor = h.register("work laptop");
    h.logout();

    h.app.apply_intent(ManageIntent::SubmitLogin { anchor });
    // No recovery method yet, so the selector comes before manage.
    assert_eq!(h.app.screen(), &Screen::RecoverySelector);
    h.app.apply_intent(ManageIntent::SkipRecovery);
    assert_eq!(h.app.screen(), &Screen::Manage);
    assert!(h.device_labels().iter().any(|(l, _)| l == "work laptop"));
}

#[test]
fn login_skips_the_selector_once_recovery_exists() {
    let mut h = TestHarness::new();
    let anchor = h.register("laptop");
    h.add_recovery_seed_phrase();
    h.logout();

    h.app.apply_intent(ManageIntent::SubmitLogin { anchor });
    assert_eq!(h.app.screen(), &Screen::Manage);
}

#[test]
fn login_to_unknown_anchor_stays_on_welcome() {
    let mut h = TestHarness::new();
    h.app.apply_intent(ManageIntent::SubmitLogin { anchor: 12345 });
    assert_eq!(h.app.screen(), &Screen::Welcome);
    assert!(h.app.last_error().unwrap().contains("unknown anchor"));
}

#[test]
fn full_round_trip_register_logout_login() {
    let mut h = TestHarness::new();
    let anchor = h.register("laptop");
    h.logout();
    h.login(anchor, "laptop");
}
