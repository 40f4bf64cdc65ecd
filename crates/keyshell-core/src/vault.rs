/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The device vault.
//!
//! In-memory store of anchors (numbered identities) and their registered
//! devices. Every limit the UI hints at is enforced here: ten devices total
//! per anchor, one recovery method per kind, no removal of protected devices
//! or of the last device standing. Mutations are keyed by [`DeviceId`], not
//! list position.

use std::collections::BTreeMap;

use crate::device::{DeviceId, DeviceRecord, KeyType, MAX_ALIAS_LEN, Protection, Purpose};
use crate::{FIRST_ANCHOR, MAX_DEVICES};

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Vault {
    anchors: BTreeMap<u64, Anchor>,
    next_anchor: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
struct Anchor {
    devices: Vec<DeviceRecord>,
}

/// Read-model row for an anchor's device list, carrying everything the view
/// layer needs to decide affordances without re-deriving vault rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSummary {
    pub id: DeviceId,
    pub alias: String,
    pub purpose: Purpose,
    pub key_type: KeyType,
    pub removable: bool,
    /// Per-device warning text, e.g. for an unprotected recovery method.
    pub warn: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    UnknownAnchor(u64),
    UnknownDevice(DeviceId),
    /// Alias empty or over [`MAX_ALIAS_LEN`] bytes.
    InvalidAlias(String),
    /// The ten-device total cap is reached.
    DeviceLimitReached,
    /// A recovery method of this kind is already registered.
    RecoveryKindTaken(KeyType),
    /// The device is protected against removal.
    ProtectedDevice(DeviceId),
    /// Removing the last device would lock the anchor out.
    LastDevice(DeviceId),
}

impl std::fmt::Display for VaultError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VaultError::UnknownAnchor(anchor) => write!(f, "unknown anchor {anchor}"),
            VaultError::UnknownDevice(id) => write!(f, "unknown device {id}"),
            VaultError::InvalidAlias(alias) => {
                write!(f, "invalid alias {alias:?} (1..={MAX_ALIAS_LEN} bytes)")
            }
            VaultError::DeviceLimitReached => {
                write!(f, "device limit of {MAX_DEVICES} reached")
            }
            VaultError::RecoveryKindTaken(kind) => {
                write!(f, "a {kind:?} recovery method is already registered")
            }
            VaultError::ProtectedDevice(id) => {
                write!(f, "device {id} is protected against removal")
            }
            VaultError::LastDevice(id) => {
                write!(f, "device {id} is the last one and cannot be removed")
            }
        }
    }
}

fn validate_alias(alias: &str) -> Result<(), VaultError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LEN {
        return Err(VaultError::InvalidAlias(alias.to_string()));
    }
    Ok(())
}

impl Vault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh anchor with one initial authenticator; returns the
    /// anchor number and the id of the device just registered.
    pub fn register(
        &mut self,
        alias: &str,
        key_type: KeyType,
    ) -> Result<(u64, DeviceId), VaultError> {
        validate_alias(alias)?;
        let anchor = self.next_anchor.unwrap_or(FIRST_ANCHOR);
        self.next_anchor = Some(anchor + 1);

        let record = DeviceRecord::new(
            alias,
            Purpose::Authentication,
            key_type,
            Protection::Unprotected,
        );
        let id = record.id;
        self.anchors.insert(
            anchor,
            Anchor {
                devices: vec![record],
            },
        );
        log::info!("registered anchor {anchor} with device {id}");
        Ok((anchor, id))
    }

    pub fn anchor_exists(&self, anchor: u64) -> bool {
        self.anchors.contains_key(&anchor)
    }

    pub fn add_device(
        &mut self,
        anchor: u64,
        alias: &str,
        purpose: Purpose,
        key_type: KeyType,
        protection: Protection,
    ) -> Result<DeviceId, VaultError> {
        validate_alias(alias)?;
        let entry = self
            .anchors
            .get_mut(&anchor)
            .ok_or(VaultError::UnknownAnchor(anchor))?;

        if entry.devices.len() >= MAX_DEVICES {
            return Err(VaultError::DeviceLimitReached);
        }
        if purpose == Purpose::Recovery
            && entry
                .devices
                .iter()
                .any(|d| d.purpose == Purpose::Recovery && d.key_type == key_type)
        {
            return Err(VaultError::RecoveryKindTaken(key_type));
        }

        let record = DeviceRecord::new(alias, purpose, key_type, protection);
        let id = record.id;
        entry.devices.push(record);
        log::info!("anchor {anchor}: added device {id}");
        Ok(id)
    }

    pub fn rename_device(
        &mut self,
        anchor: u64,
        id: DeviceId,
        new_alias: &str,
    ) -> Result<(), VaultError> {
        validate_alias(new_alias)?;
        let device = self.device_mut(anchor, id)?;
        device.alias = new_alias.to_string();
        log::info!("anchor {anchor}: renamed device {id}");
        Ok(())
    }

    pub fn remove_device(&mut self, anchor: u64, id: DeviceId) -> Result<(), VaultError> {
        let entry = self
            .anchors
            .get_mut(&anchor)
            .ok_or(VaultError::UnknownAnchor(anchor))?;
        let index = entry
            .devices
            .iter()
            .position(|d| d.id == id)
            .ok_or(VaultError::UnknownDevice(id))?;

        if entry.devices[index].protection == Protection::Protected {
            return Err(VaultError::ProtectedDevice(id));
        }
        if entry.devices.len() == 1 {
            return Err(VaultError::LastDevice(id));
        }

        entry.devices.remove(index);
        log::info!("anchor {anchor}: removed device {id}");
        Ok(())
    }

    /// Ordered device records for an anchor, all purposes.
    pub fn devices(&self, anchor: u64) -> Result<&[DeviceRecord], VaultError> {
        self.anchors
            .get(&anchor)
            .map(|a| a.devices.as_slice())
            .ok_or(VaultError::UnknownAnchor(anchor))
    }

    /// Ordered authenticator summaries (recovery methods excluded).
    pub fn authenticators(&self, anchor: u64) -> Result<Vec<DeviceSummary>, VaultError> {
        Ok(self
            .summaries(anchor)?
            .into_iter()
            .filter(|s| s.purpose == Purpose::Authentication)
            .collect())
    }

    /// Ordered recovery-method summaries.
    pub fn recovery_methods(&self, anchor: u64) -> Result<Vec<DeviceSummary>, VaultError> {
        Ok(self
            .summaries(anchor)?
            .into_iter()
            .filter(|s| s.purpose == Purpose::Recovery)
            .collect())
    }

    pub fn has_recovery(&self, anchor: u64) -> Result<bool, VaultError> {
        Ok(self
            .devices(anchor)?
            .iter()
            .any(|d| d.purpose == Purpose::Recovery))
    }

    fn summaries(&self, anchor: u64) -> Result<Vec<DeviceSummary>, VaultError> {
        let devices = self.devices(anchor)?;
        let total = devices.len();
        Ok(devices
            .iter()
            .map(|d| {
                let removable = d.protection != Protection::Protected && total > 1;
                let warn = (d.purpose == Purpose::Recovery
                    && d.protection == Protection::Unprotected)
                    .then(|| "This recovery method is not protected against removal.".to_string());
                DeviceSummary {
                    id: d.id,
                    alias: d.alias.clone(),
                    purpose: d.purpose,
                    key_type: d.key_type,
                    removable,
                    warn,
                }
            })
            .collect())
    }

    fn device_mut(&mut self, anchor: u64, id: DeviceId) -> Result<&mut DeviceRecord, VaultError> {
        self.anchors
            .get_mut(&anchor)
            .ok_or(VaultError::UnknownAnchor(anchor))?
            .devices
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(VaultError::UnknownDevice(id))
    }
}
