/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Keyshell — a small desktop passkey manager.
//!
//! A local vault of numbered identities ("anchors"), each holding up to ten
//! registered devices, behind an egui management surface. The display logic
//! lives in `keyshell-view` as pure view descriptions; the vault rules live
//! in `keyshell-core`; this crate wires them into screens, dialogs, and an
//! intent reducer.

pub mod desktop;
pub mod persistence;
pub mod prefs;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize env_logger, with an optional CLI-supplied filter layered over
/// the `RUST_LOG` environment (default `info`).
pub fn init_logging(filter: Option<&str>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    builder.init();
}
