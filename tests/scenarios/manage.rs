use keyshell::desktop::app::{Dialog, ManageIntent};
use keyshell_core::MAX_AUTHENTICATORS;

use crate::harness::TestHarness;

#[test]
fn add_button_disables_exactly_at_capacity() {
    let mut h = TestHarness::new();
    h.register("device 0");
    for i in 1..MAX_AUTHENTICATORS {
        let (enabled, _) = h.add_button();
        assert!(enabled, "add button disabled at {i} devices");
        h.add_device(&format!("device {i}"));
    }

    let (enabled, tooltip) = h.add_button();
    assert!(!enabled);
    assert!(tooltip.unwrap().contains("Remove a passkey"));

    // Removing one re-enables it.
    let remove = h.menu_message("device 1", "remove").unwrap();
    let ManageIntent::RequestRemove { device } = remove else {
        panic!("remove entry should request removal");
    };
    h.app.apply_intent(ManageIntent::ConfirmRemove { device });
    let (enabled, _) = h.add_button();
    assert!(enabled);
}

#[test]
fn duplicate_names_get_ordinal_annotations() {
    let mut h = TestHarness::new();
    h.register("laptop");
    h.add_device("phone");
    h.add_device("laptop");
    h.add_device("laptop");

    assert_eq!(
        h.device_labels(),
        vec![
            ("laptop".to_string(), None),
            ("phone".to_string(), None),
            ("laptop".to_string(), Some(2)),
            ("laptop".to_string(), Some(3)),
        ]
    );
}

#[test]
fn rename_journey_updates_the_list() {
    let mut h = TestHarness::new();
    h.register("laptop");
    h.add_device("phone");

    let rename = h.menu_message("phone", "rename").unwrap();
    h.app.apply_intent(rename);
    let Dialog::Rename { device, alias } = h.app.dialog().clone() else {
        panic!("rename should open its dialog");
    };
    assert_eq!(alias, "phone");

    h.app.apply_intent(ManageIntent::SubmitRename {
        device,
        alias: "old phone".to_string(),
    });
    assert_eq!(h.app.dialog(), &Dialog::None);
    assert!(h.device_labels().iter().any(|(l, _)| l == "old phone"));
}

#[test]
fn sole_device_offers_rename_but_not_remove() {
    let mut h = TestHarness::new();
    h.register("laptop");
    assert_eq!(h.menu_actions(), vec![vec!["rename"]]);

    h.add_device("phone");
    assert_eq!(
        h.menu_actions(),
        vec![vec!["rename", "remove"], vec!["rename", "remove"]]
    );
}

#[test]
fn remove_journey_confirms_before_removing() {
    let mut h = TestHarness::new();
    h.register("laptop");
    h.add_device("phone");

    let request = h.menu_message("phone", "remove").unwrap();
    h.app.apply_intent(request);
    let Dialog::RemoveConfirm { device, alias } = h.app.dialog().clone() else {
        panic!("remove should open the confirm dialog");
    };
    assert_eq!(alias, "phone");
    assert_eq!(h.device_labels().len(), 2);

    h.app.apply_intent(ManageIntent::ConfirmRemove { device });
    assert_eq!(h.device_labels(), vec![("laptop".to_string(), None)]);
}

#[test]
fn cancelling_the_remove_dialog_keeps_the_device() {
    let mut h = TestHarness::new();
    h.register("laptop");
    h.add_device("phone");

    let request = h.menu_message("phone", "remove").unwrap();
    h.app.apply_intent(request);
    h.app.apply_intent(ManageIntent::CloseDialog);
    assert_eq!(h.device_labels().len(), 2);
}

#[test]
fn view_production_is_idempotent() {
    let mut h = TestHarness::new();
    h.register("laptop");
    h.add_device("laptop");

    assert_eq!(h.manage_tree(), h.manage_tree());
    assert_eq!(h.manage_snapshot(), h.manage_snapshot());
}

#[test]
fn header_badge_tracks_the_device_count() {
    let mut h = TestHarness::new();
    h.register("laptop");
    h.add_device("phone");
    h.add_device("tablet");

    let snapshot = h.manage_snapshot();
    let children = snapshot["Section"]["children"].as_array().unwrap();
    let badge = &children[0]["Heading"]["badge"];
    assert_eq!(badge["label"], format!("3/{MAX_AUTHENTICATORS}"));
}
