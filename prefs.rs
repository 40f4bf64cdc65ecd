/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Application preferences, read from `prefs.toml` in the data directory.
//!
//! Preferences are cosmetic; a missing or malformed file falls back to
//! defaults with a warning rather than failing startup.

use std::path::Path;

const PREFS_FILE: &str = "prefs.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct AppPreferences {
    pub theme: Theme,
}

impl AppPreferences {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(PREFS_FILE);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&contents) {
            Ok(prefs) => prefs,
            Err(e) => {
                log::warn!("ignoring malformed {}: {e}", path.display());
                Self::default()
            }
        }
    }
}
