use keyshell::desktop::app::{ManageIntent, Screen};
use keyshell_core::seed::SEED_PHRASE_WORDS;
use keyshell_view::ViewNode;

use crate::harness::TestHarness;

#[test]
fn seed_phrase_journey_registers_a_recovery_method() {
    let mut h = TestHarness::new();
    h.register("laptop");

    let phrase = h.add_recovery_seed_phrase();
    assert_eq!(phrase.split(' ').count(), SEED_PHRASE_WORDS);

    let mut listed = Vec::new();
    h.recovery_tree().visit(&mut |node| {
        if let ViewNode::Item { label, .. } = node {
            listed.push(label.clone());
        }
    });
    assert_eq!(listed, vec!["Recovery phrase".to_string()]);
}

#[test]
fn adding_recovery_clears_the_few_devices_warning() {
    let mut h = TestHarness::new();
    h.register("laptop");
    assert_eq!(h.manage_snapshot()["Section"]["warning"], true);

    h.add_recovery_seed_phrase();
    assert_eq!(h.manage_snapshot()["Section"]["warning"], false);
}

#[test]
fn continue_stays_put_until_the_phrase_is_acknowledged() {
    let mut h = TestHarness::new();
    h.register("laptop");
    h.app.apply_intent(ManageIntent::OpenAddRecovery);
    h.app.apply_intent(ManageIntent::ChooseSeedPhrase);

    h.app.apply_intent(ManageIntent::ConfirmSeedPhrase);
    assert!(matches!(h.app.screen(), Screen::SeedPhrase { .. }));

    h.app.apply_intent(ManageIntent::AcknowledgeSeedPhrase);
    h.app.apply_intent(ManageIntent::ConfirmSeedPhrase);
    assert_eq!(h.app.screen(), &Screen::Manage);
}

#[test]
fn a_second_seed_phrase_is_refused() {
    let mut h = TestHarness::new();
    h.register("laptop");
    h.add_recovery_seed_phrase();

    h.app.apply_intent(ManageIntent::OpenAddRecovery);
    h.app.apply_intent(ManageIntent::ChooseSeedPhrase);
    h.app.apply_intent(ManageIntent::AcknowledgeSeedPhrase);
    h.app.apply_intent(ManageIntent::ConfirmSeedPhrase);

    assert!(matches!(h.app.screen(), Screen::SeedPhrase { .. }));
    assert!(h.app.last_error().unwrap().contains("already registered"));
}

#[test]
fn protected_recovery_phrase_has_no_remove_entry() {
    let mut h = TestHarness::new();
    h.register("laptop");
    h.add_recovery_seed_phrase();

    let mut actions = Vec::new();
    h.recovery_tree().visit(&mut |node| {
        if let ViewNode::Item { menu, .. } = node {
            actions = menu.iter().map(|e| e.action).collect();
        }
    });
    assert_eq!(actions, vec!["rename"]);
}
