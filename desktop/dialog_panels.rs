/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Modal dialogs over the manage screen.
//!
//! Dialog text buffers live in the [`Dialog`] variant so they survive between
//! frames; submission and dismissal go through intents like every other
//! action. Removal is always a two-step: the settings menu only requests it,
//! the dialog confirms it.

use crate::desktop::app::{Dialog, ManageApp, ManageIntent};

pub(crate) fn render_dialog_panels(
    ctx: &egui::Context,
    app: &mut ManageApp,
    frame_intents: &mut Vec<ManageIntent>,
) {
    match app.dialog_mut() {
        Dialog::None => {}
        Dialog::AddDevice { alias } => {
            egui::Window::new("Add new passkey")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label("Name the new device:");
                    ui.text_edit_singleline(alias);
                    ui.horizontal(|ui| {
                        if ui.button("Add").clicked() {
                            frame_intents.push(ManageIntent::SubmitAddDevice {
                                alias: alias.trim().to_string(),
                            });
                        }
                        if ui.button("Cancel").clicked() {
                            frame_intents.push(ManageIntent::CloseDialog);
                        }
                    });
                });
        }
        Dialog::Rename { device, alias } => {
            let device = *device;
            egui::Window::new("Rename device")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.text_edit_singleline(alias);
                    ui.horizontal(|ui| {
                        if ui.button("Save").clicked() {
                            frame_intents.push(ManageIntent::SubmitRename {
                                device,
                                alias: alias.trim().to_string(),
                            });
                        }
                        if ui.button("Cancel").clicked() {
                            frame_intents.push(ManageIntent::CloseDialog);
                        }
                    });
                });
        }
        Dialog::RemoveConfirm { device, alias } => {
            let device = *device;
            let alias = alias.clone();
            egui::Window::new("Remove device")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(format!(
                        "Remove {alias:?}? You can no longer sign in with it."
                    ));
                    ui.horizontal(|ui| {
                        if ui.button("Remove").clicked() {
                            frame_intents.push(ManageIntent::ConfirmRemove { device });
                        }
                        if ui.button("Cancel").clicked() {
                            frame_intents.push(ManageIntent::CloseDialog);
                        }
                    });
                });
        }
    }
}
