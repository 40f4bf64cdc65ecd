/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Vault persistence.
//!
//! The vault is at most a handful of anchors with ten devices each, so it is
//! stored as a single JSON document under the user config directory. Saves
//! write a sibling temp file and rename over the target so a crash mid-write
//! cannot leave a truncated vault behind.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use keyshell_core::Vault;

const VAULT_FILE: &str = "vault.json";

pub struct VaultStore {
    path: PathBuf,
}

/// Errors from the vault store.
#[derive(Debug)]
pub enum StoreError {
    Io(String),
    Format(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "IO error: {e}"),
            StoreError::Format(e) => write!(f, "vault file format error: {e}"),
        }
    }
}

impl VaultStore {
    pub fn open(dir: PathBuf) -> Self {
        Self {
            path: dir.join(VAULT_FILE),
        }
    }

    /// Get the default storage directory for vault data
    pub fn default_data_dir() -> PathBuf {
        let mut dir = dirs::config_dir().expect("No config directory available");
        dir.push("keyshell");
        dir
    }

    /// Load the stored vault; `Ok(None)` when no vault file exists yet.
    pub fn load(&self) -> Result<Option<Vault>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| StoreError::Format(e.to_string()))
    }

    pub fn save(&self, vault: &Vault) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }
        let contents =
            serde_json::to_string_pretty(vault).map_err(|e| StoreError::Format(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents).map_err(|e| StoreError::Io(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Io(e.to_string()))?;
        log::debug!("saved vault to {}", self.path.display());
        Ok(())
    }
}
