/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Application state and the intent reducer.
//!
//! All user actions funnel through [`ManageIntent`]: the gui collects pressed
//! messages into a frame queue and applies them here, one reducer for every
//! surface. View production ([`ManageApp::manage_view`],
//! [`ManageApp::recovery_view`]) is read-only over the vault, so tests drive
//! journeys entirely through intents and assert on the resulting trees.

use keyshell_core::{
    DeviceId, KeyType, MAX_AUTHENTICATORS, Protection, Purpose, Vault, VaultError, seed,
};
use keyshell_view::{
    AuthenticatorEntry, AuthenticatorsSection, RecoveryEntry, ViewNode, authenticators_section,
    recovery_section,
};

use crate::persistence::VaultStore;

/// Which page the user is on. Mirrors the registration/login journey:
/// welcome, device naming, confirmation, anchor handout, recovery prompt,
/// then the manage surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Register,
    RegisterConfirm { alias: String },
    RegisterIdentity { anchor: u64 },
    RecoverySelector,
    SeedPhrase { phrase: String, acknowledged: bool },
    Manage,
}

/// Modal dialog over the manage screen. Text buffers live in the variant so
/// the gui can edit them in place between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    None,
    AddDevice { alias: String },
    Rename { device: DeviceId, alias: String },
    RemoveConfirm { device: DeviceId, alias: String },
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum ManageIntent {
    OpenRegister,
    SubmitRegister { alias: String },
    ConfirmRegister,
    ConfirmIdentity,
    SubmitLogin { anchor: u64 },
    BackToWelcome,
    Logout,

    SkipRecovery,
    ChooseSeedPhrase,
    AcknowledgeSeedPhrase,
    ConfirmSeedPhrase,
    OpenAddRecovery,

    OpenAddDevice,
    SubmitAddDevice { alias: String },
    OpenRename { device: DeviceId },
    SubmitRename { device: DeviceId, alias: String },
    RequestRemove { device: DeviceId },
    ConfirmRemove { device: DeviceId },
    CloseDialog,
    ClearError,
}

pub struct ManageApp {
    vault: Vault,
    store: Option<VaultStore>,
    screen: Screen,
    session: Option<u64>,
    dialog: Dialog,
    last_error: Option<String>,
}

impl ManageApp {
    pub fn new(vault: Vault, store: Option<VaultStore>) -> Self {
        Self {
            vault,
            store,
            screen: Screen::Welcome,
            session: None,
            dialog: Dialog::None,
            last_error: None,
        }
    }

    /// Ephemeral app over an empty vault, for tests.
    pub fn new_for_testing() -> Self {
        Self::new(Vault::new(), None)
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn session(&self) -> Option<u64> {
        self.session
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut Dialog {
        &mut self.dialog
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    /// Record an error produced outside the reducer (e.g. unparseable input).
    pub fn note_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{message}");
        self.last_error = Some(message);
    }

    pub fn apply_intent(&mut self, intent: ManageIntent) {
        log::debug!("intent: {intent:?}");
        match intent {
            ManageIntent::OpenRegister => {
                self.screen = Screen::Register;
            }
            ManageIntent::SubmitRegister { alias } => {
                self.screen = Screen::RegisterConfirm { alias };
            }
            ManageIntent::ConfirmRegister => {
                let Screen::RegisterConfirm { alias } = &self.screen else {
                    return;
                };
                let alias = alias.clone();
                match self.vault.register(&alias, KeyType::Platform) {
                    Ok((anchor, _)) => {
                        self.session = Some(anchor);
                        self.screen = Screen::RegisterIdentity { anchor };
                        self.persist();
                    }
                    Err(e) => self.fail(e),
                }
            }
            ManageIntent::ConfirmIdentity => {
                if matches!(self.screen, Screen::RegisterIdentity { .. }) {
                    self.screen = Screen::Manage;
                }
            }
            ManageIntent::SubmitLogin { anchor } => {
                if !self.vault.anchor_exists(anchor) {
                    self.note_error(format!("unknown anchor {anchor}"));
                    return;
                }
                self.session = Some(anchor);
                // Prompt for a recovery method on the way in, matching the
                // sign-in journey; identities that already have one go
                // straight to manage.
                self.screen = match self.vault.has_recovery(anchor) {
                    Ok(true) => Screen::Manage,
                    _ => Screen::RecoverySelector,
                };
            }
            ManageIntent::BackToWelcome => {
                self.screen = Screen::Welcome;
            }
            ManageIntent::Logout => {
                self.session = None;
                self.dialog = Dialog::None;
                self.screen = Screen::Welcome;
            }

            ManageIntent::SkipRecovery => {
                if self.session.is_some() {
                    self.screen = Screen::Manage;
                }
            }
            ManageIntent::ChooseSeedPhrase => {
                if self.session.is_some() {
                    self.screen = Screen::SeedPhrase {
                        phrase: seed::seed_phrase(),
                        acknowledged: false,
                    };
                }
            }
            ManageIntent::AcknowledgeSeedPhrase => {
                if let Screen::SeedPhrase { acknowledged, .. } = &mut self.screen {
                    *acknowledged = !*acknowledged;
                }
            }
            ManageIntent::ConfirmSeedPhrase => {
                let Screen::SeedPhrase { acknowledged, .. } = &self.screen else {
                    return;
                };
                if !*acknowledged {
                    return;
                }
                let Some(anchor) = self.session else { return };
                match self.vault.add_device(
                    anchor,
                    "Recovery phrase",
                    Purpose::Recovery,
                    KeyType::SeedPhrase,
                    Protection::Protected,
                ) {
                    Ok(_) => {
                        self.screen = Screen::Manage;
                        self.persist();
                    }
                    Err(e) => self.fail(e),
                }
            }
            ManageIntent::OpenAddRecovery => {
                if self.session.is_some() {
                    self.screen = Screen::RecoverySelector;
                }
            }

            ManageIntent::OpenAddDevice => {
                self.dialog = Dialog::AddDevice {
                    alias: String::new(),
                };
            }
            ManageIntent::SubmitAddDevice { alias } => {
                let Some(anchor) = self.session else { return };
                match self.vault.add_device(
                    anchor,
                    &alias,
                    Purpose::Authentication,
                    KeyType::Unknown,
                    Protection::Unprotected,
                ) {
                    Ok(_) => {
                        self.dialog = Dialog::None;
                        self.persist();
                    }
                    Err(e) => self.fail(e),
                }
            }
            ManageIntent::OpenRename { device } => {
                let alias = self.device_alias(device).unwrap_or_default();
                self.dialog = Dialog::Rename { device, alias };
            }
            ManageIntent::SubmitRename { device, alias } => {
                let Some(anchor) = self.session else { return };
                match self.vault.rename_device(anchor, device, &alias) {
                    Ok(()) => {
                        self.dialog = Dialog::None;
                        self.persist();
                    }
                    Err(e) => self.fail(e),
                }
            }
            ManageIntent::RequestRemove { device } => {
                let alias = self.device_alias(device).unwrap_or_default();
                self.dialog = Dialog::RemoveConfirm { device, alias };
            }
            ManageIntent::ConfirmRemove { device } => {
                let Some(anchor) = self.session else { return };
                match self.vault.remove_device(anchor, device) {
                    Ok(()) => {
                        self.dialog = Dialog::None;
                        self.persist();
                    }
                    Err(e) => self.fail(e),
                }
            }
            ManageIntent::CloseDialog => {
                self.dialog = Dialog::None;
            }
            ManageIntent::ClearError => {
                self.last_error = None;
            }
        }
    }

    /// The passkey section for the signed-in anchor; `None` off-session.
    pub fn manage_view(&self) -> Option<ViewNode<ManageIntent>> {
        let anchor = self.session?;
        let summaries = self.vault.authenticators(anchor).ok()?;
        let warn_few_devices = !self.vault.has_recovery(anchor).ok()?;

        let entries = summaries
            .into_iter()
            .map(|s| AuthenticatorEntry {
                alias: s.alias,
                warn: s.warn,
                rename: ManageIntent::OpenRename { device: s.id },
                remove: s
                    .removable
                    .then_some(ManageIntent::RequestRemove { device: s.id }),
            })
            .collect();

        Some(authenticators_section(AuthenticatorsSection {
            entries,
            capacity: MAX_AUTHENTICATORS,
            warn_few_devices,
            on_add_device: ManageIntent::OpenAddDevice,
        }))
    }

    /// The recovery-methods section for the signed-in anchor.
    pub fn recovery_view(&self) -> Option<ViewNode<ManageIntent>> {
        let anchor = self.session?;
        let entries = self
            .vault
            .recovery_methods(anchor)
            .ok()?
            .into_iter()
            .map(|s| RecoveryEntry {
                alias: s.alias,
                warn: s.warn,
                rename: ManageIntent::OpenRename { device: s.id },
                remove: s
                    .removable
                    .then_some(ManageIntent::RequestRemove { device: s.id }),
            })
            .collect();
        Some(recovery_section(entries, ManageIntent::OpenAddRecovery))
    }

    fn device_alias(&self, device: DeviceId) -> Option<String> {
        let anchor = self.session?;
        self.vault
            .devices(anchor)
            .ok()?
            .iter()
            .find(|d| d.id == device)
            .map(|d| d.alias.clone())
    }

    fn fail(&mut self, error: VaultError) {
        log::warn!("vault refused operation: {error}");
        self.last_error = Some(error.to_string());
    }

    fn persist(&mut self) {
        if let Some(store) = &self.store
            && let Err(e) = store.save(&self.vault)
        {
            log::error!("failed to persist vault: {e}");
            self.last_error = Some(format!("failed to save vault: {e}"));
        }
    }
}
