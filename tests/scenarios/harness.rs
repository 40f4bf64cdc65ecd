use keyshell::desktop::app::{ManageApp, ManageIntent, Screen};
use keyshell_view::ViewNode;
use serde_json::Value;

/// Drives whole user journeys through the intent reducer, the way the pages
/// would: one harness per scenario, assertions against screens and view trees.
pub(crate) struct TestHarness {
    pub(crate) app: ManageApp,
}

impl TestHarness {
    pub(crate) fn new() -> Self {
        Self {
            app: ManageApp::new_for_testing(),
        }
    }

    /// Registration journey: name the device, confirm, note the anchor
    /// number, continue to manage. Returns the anchor.
    pub(crate) fn register(&mut self, device_name: &str) -> u64 {
        self.app.apply_intent(ManageIntent::OpenRegister);
        self.app.apply_intent(ManageIntent::SubmitRegister {
            alias: device_name.to_string(),
        });
        assert!(
            matches!(self.app.screen(), Screen::RegisterConfirm { .. }),
            "expected register confirmation, got {:?}",
            self.app.screen()
        );
        self.app.apply_intent(ManageIntent::ConfirmRegister);
        let anchor = match self.app.screen() {
            Screen::RegisterIdentity { anchor } => *anchor,
            other => panic!("expected anchor handout, got {other:?}"),
        };
        self.app.apply_intent(ManageIntent::ConfirmIdentity);
        assert_eq!(self.app.screen(), &Screen::Manage);
        anchor
    }

    /// Sign-in journey: submit the anchor number, skip the recovery prompt if
    /// it appears, and check the named device is listed on manage.
    pub(crate) fn login(&mut self, anchor: u64, device_name: &str) {
        self.app.apply_intent(ManageIntent::SubmitLogin { anchor });
        if self.app.screen() == &Screen::RecoverySelector {
            self.app.apply_intent(ManageIntent::SkipRecovery);
        }
        assert_eq!(self.app.screen(), &Screen::Manage);
        assert!(
            self.device_labels().iter().any(|(l, _)| l == device_name),
            "device {device_name:?} not listed after login"
        );
    }

    /// Recovery journey from manage: pick the seed phrase method, read the
    /// phrase, acknowledge, continue back to manage. Returns the phrase.
    pub(crate) fn add_recovery_seed_phrase(&mut self) -> String {
        self.app.apply_intent(ManageIntent::OpenAddRecovery);
        assert_eq!(self.app.screen(), &Screen::RecoverySelector);
        self.app.apply_intent(ManageIntent::ChooseSeedPhrase);
        let phrase = match self.app.screen() {
            Screen::SeedPhrase { phrase, .. } => phrase.clone(),
            other => panic!("expected seed phrase screen, got {other:?}"),
        };
        self.app.apply_intent(ManageIntent::AcknowledgeSeedPhrase);
        self.app.apply_intent(ManageIntent::ConfirmSeedPhrase);
        assert_eq!(self.app.screen(), &Screen::Manage);
        phrase
    }

    pub(crate) fn add_device(&mut self, alias: &str) {
        self.app.apply_intent(ManageIntent::OpenAddDevice);
        self.app.apply_intent(ManageIntent::SubmitAddDevice {
            alias: alias.to_string(),
        });
    }

    pub(crate) fn logout(&mut self) {
        self.app.apply_intent(ManageIntent::Logout);
        assert_eq!(self.app.screen(), &Screen::Welcome);
    }

    pub(crate) fn manage_tree(&self) -> ViewNode<ManageIntent> {
        self.app.manage_view().expect("no session")
    }

    pub(crate) fn recovery_tree(&self) -> ViewNode<ManageIntent> {
        self.app.recovery_view().expect("no session")
    }

    pub(crate) fn manage_snapshot(&self) -> Value {
        serde_json::to_value(self.manage_tree()).expect("view tree serializes")
    }

    /// `(label, dup_count)` pairs of the passkey list, in display order.
    pub(crate) fn device_labels(&self) -> Vec<(String, Option<u32>)> {
        let mut labels = Vec::new();
        self.manage_tree().visit(&mut |node| {
            if let ViewNode::Item {
                label, dup_count, ..
            } = node
            {
                labels.push((label.clone(), *dup_count));
            }
        });
        labels
    }

    /// Settings menu action ids per passkey row, in display order.
    pub(crate) fn menu_actions(&self) -> Vec<Vec<&'static str>> {
        let mut menus = Vec::new();
        self.manage_tree().visit(&mut |node| {
            if let ViewNode::Item { menu, .. } = node {
                menus.push(menu.iter().map(|e| e.action).collect());
            }
        });
        menus
    }

    /// `(enabled, tooltip)` of the add-passkey button.
    pub(crate) fn add_button(&self) -> (bool, Option<String>) {
        let mut found = None;
        self.manage_tree().visit(&mut |node| {
            if let ViewNode::Button {
                enabled, tooltip, ..
            } = node
            {
                found = Some((*enabled, tooltip.clone()));
            }
        });
        found.expect("manage view always has the add button")
    }

    /// The message a row's menu entry would emit, by row label and action id.
    pub(crate) fn menu_message(&self, row_label: &str, action: &str) -> Option<ManageIntent> {
        let mut found = None;
        self.manage_tree().visit(&mut |node| {
            if let ViewNode::Item { label, menu, .. } = node
                && label == row_label
                && found.is_none()
            {
                found = menu
                    .iter()
                    .find(|e| e.action == action)
                    .map(|e| e.message.clone());
            }
        });
        found
    }
}
