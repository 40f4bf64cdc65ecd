/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The egui host.
//!
//! Paints the current screen, walks [`ViewNode`] trees produced by the app,
//! and collects pressed messages into a per-frame intent queue that is
//! drained through the reducer at the end of the frame. No vault rule is
//! evaluated here; disabled buttons and missing menu entries arrive that way
//! from the view layer.

use egui::RichText;

use crate::desktop::app::{ManageApp, ManageIntent, Screen};
use crate::desktop::dialog_panels;
use crate::prefs::Theme;
use keyshell_view::ViewNode;

pub struct KeyshellGui {
    app: ManageApp,
    alias_input: String,
    anchor_input: String,
}

impl KeyshellGui {
    pub fn new(app: ManageApp) -> Self {
        Self {
            app,
            alias_input: String::new(),
            anchor_input: String::new(),
        }
    }

    fn render_screen(&mut self, ui: &mut egui::Ui, frame_intents: &mut Vec<ManageIntent>) {
        match self.app.screen().clone() {
            Screen::Welcome => self.render_welcome(ui, frame_intents),
            Screen::Register => self.render_register(ui, frame_intents),
            Screen::RegisterConfirm { alias } => {
                ui.heading("Confirm your passkey");
                ui.label(format!("Register this device as {alias:?}?"));
                ui.horizontal(|ui| {
                    if ui.button("Confirm").clicked() {
                        frame_intents.push(ManageIntent::ConfirmRegister);
                    }
                    if ui.button("Back").clicked() {
                        frame_intents.push(ManageIntent::OpenRegister);
                    }
                });
            }
            Screen::RegisterIdentity { anchor } => {
                ui.heading("Your anchor number");
                ui.label(RichText::new(anchor.to_string()).strong().monospace());
                ui.label("Write it down. You need it to sign in from another device.");
                if ui.button("I saved it, continue").clicked() {
                    frame_intents.push(ManageIntent::ConfirmIdentity);
                }
            }
            Screen::RecoverySelector => {
                ui.heading("Add a recovery method");
                ui.label("A recovery method lets you regain access if you lose your passkeys.");
                if ui.button("Use a recovery phrase").clicked() {
                    frame_intents.push(ManageIntent::ChooseSeedPhrase);
                }
                if ui.button("Skip for now").clicked() {
                    frame_intents.push(ManageIntent::SkipRecovery);
                }
            }
            Screen::SeedPhrase {
                phrase,
                acknowledged,
            } => {
                ui.heading("Your recovery phrase");
                ui.label(RichText::new(&phrase).monospace());
                let mut acked = acknowledged;
                if ui
                    .checkbox(&mut acked, "I wrote the phrase down")
                    .changed()
                {
                    frame_intents.push(ManageIntent::AcknowledgeSeedPhrase);
                }
                let resp = ui.add_enabled(acknowledged, egui::Button::new("Continue"));
                if resp.clicked() {
                    frame_intents.push(ManageIntent::ConfirmSeedPhrase);
                }
            }
            Screen::Manage => self.render_manage(ui, frame_intents),
        }

        if let Some(error) = self.app.last_error().map(ToOwned::to_owned) {
            ui.separator();
            ui.horizontal(|ui| {
                ui.label(RichText::new(error).color(ui.visuals().error_fg_color));
                if ui.small_button("Dismiss").clicked() {
                    frame_intents.push(ManageIntent::ClearError);
                }
            });
        }
    }

    fn render_welcome(&mut self, ui: &mut egui::Ui, frame_intents: &mut Vec<ManageIntent>) {
        ui.heading("Keyshell");
        ui.label("Manage the passkeys of your identity.");
        if ui.button("Create new identity").clicked() {
            frame_intents.push(ManageIntent::OpenRegister);
        }
        ui.separator();
        ui.label("Sign in with your anchor number:");
        ui.text_edit_singleline(&mut self.anchor_input);
        if ui.button("Continue").clicked() {
            match self.anchor_input.trim().parse::<u64>() {
                Ok(anchor) => frame_intents.push(ManageIntent::SubmitLogin { anchor }),
                Err(_) => self
                    .app
                    .note_error(format!("not an anchor number: {:?}", self.anchor_input)),
            }
        }
    }

    fn render_register(&mut self, ui: &mut egui::Ui, frame_intents: &mut Vec<ManageIntent>) {
        ui.heading("Name this device");
        ui.text_edit_singleline(&mut self.alias_input);
        ui.horizontal(|ui| {
            if ui.button("Create").clicked() {
                frame_intents.push(ManageIntent::SubmitRegister {
                    alias: self.alias_input.trim().to_string(),
                });
            }
            if ui.button("Cancel").clicked() {
                frame_intents.push(ManageIntent::BackToWelcome);
            }
        });
    }

    fn render_manage(&mut self, ui: &mut egui::Ui, frame_intents: &mut Vec<ManageIntent>) {
        let anchor = self.app.session();
        let manage = self.app.manage_view();
        let recovery = self.app.recovery_view();

        ui.horizontal(|ui| {
            if let Some(anchor) = anchor {
                ui.heading(format!("Anchor {anchor}"));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Log out").clicked() {
                    frame_intents.push(ManageIntent::Logout);
                }
            });
        });

        if let Some(tree) = manage {
            paint_view_node(ui, &tree, frame_intents);
        }
        ui.add_space(8.0);
        if let Some(tree) = recovery {
            paint_view_node(ui, &tree, frame_intents);
        }
    }
}

impl eframe::App for KeyshellGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut frame_intents: Vec<ManageIntent> = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_screen(ui, &mut frame_intents);
        });
        dialog_panels::render_dialog_panels(ctx, &mut self.app, &mut frame_intents);

        for intent in frame_intents {
            self.app.apply_intent(intent);
        }
    }
}

/// Walk a view tree, painting nodes and queueing pressed messages.
pub(crate) fn paint_view_node(
    ui: &mut egui::Ui,
    node: &ViewNode<ManageIntent>,
    intents: &mut Vec<ManageIntent>,
) {
    match node {
        ViewNode::Section { warning, children } => {
            let mut frame = egui::Frame::group(ui.style());
            if *warning {
                frame = frame.fill(ui.visuals().warn_fg_color.gamma_multiply(0.15));
            }
            frame.show(ui, |ui| {
                if *warning {
                    ui.label(RichText::new("⚠").color(ui.visuals().warn_fg_color));
                }
                for child in children {
                    paint_view_node(ui, child, intents);
                }
            });
        }
        ViewNode::Heading { text, badge } => {
            ui.horizontal(|ui| {
                ui.heading(text);
                if let Some(badge) = badge {
                    ui.label(RichText::new(&badge.label).small().weak())
                        .on_hover_text(&badge.tooltip);
                }
            });
        }
        ViewNode::Paragraph { text } => {
            ui.label(text);
        }
        ViewNode::List { items } => {
            for item in items {
                paint_view_node(ui, item, intents);
            }
        }
        ViewNode::Item {
            label,
            dup_count,
            warning,
            menu,
        } => {
            ui.horizontal(|ui| {
                if let Some(message) = warning {
                    ui.label(RichText::new("⚠").color(ui.visuals().warn_fg_color))
                        .on_hover_text(message);
                }
                ui.label(label);
                if let Some(count) = dup_count {
                    ui.label(RichText::new(format!("({count})")).weak());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.menu_button("⋯", |ui| {
                        for entry in menu {
                            if ui.button(&entry.caption).clicked() {
                                intents.push(entry.message.clone());
                                ui.close_menu();
                            }
                        }
                    });
                });
            });
        }
        ViewNode::Button {
            label,
            message,
            enabled,
            tooltip,
        } => {
            let mut resp = ui.add_enabled(*enabled, egui::Button::new(label));
            if let Some(tooltip) = tooltip {
                resp = resp.on_hover_text(tooltip).on_disabled_hover_text(tooltip);
            }
            if resp.clicked() {
                intents.push(message.clone());
            }
        }
    }
}

/// Apply the preferred theme to the egui context.
pub fn apply_theme(ctx: &egui::Context, theme: Theme) {
    match theme {
        Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
        Theme::Light => ctx.set_visuals(egui::Visuals::light()),
    }
}
