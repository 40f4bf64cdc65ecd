/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use keyshell::desktop::app::ManageApp;
use keyshell::desktop::cli;
use keyshell::desktop::gui::{self, KeyshellGui};
use keyshell::persistence::VaultStore;
use keyshell::prefs::AppPreferences;
use keyshell_core::Vault;

fn main() -> eframe::Result<()> {
    let opts = cli::options().run();
    keyshell::init_logging(opts.log_filter.as_deref());

    let data_dir = opts
        .data_dir
        .clone()
        .unwrap_or_else(VaultStore::default_data_dir);
    let prefs = AppPreferences::load(&data_dir);

    let (vault, store) = if opts.ephemeral {
        (Vault::new(), None)
    } else {
        let store = VaultStore::open(data_dir);
        let vault = match store.load() {
            Ok(Some(vault)) => vault,
            Ok(None) => Vault::new(),
            Err(e) => {
                log::error!("cannot read vault: {e}");
                std::process::exit(1);
            }
        };
        (vault, Some(store))
    };

    let app = ManageApp::new(vault, store);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([480.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Keyshell",
        native_options,
        Box::new(move |cc| {
            gui::apply_theme(&cc.egui_ctx, prefs.theme);
            Ok(Box::new(KeyshellGui::new(app)))
        }),
    )
}
