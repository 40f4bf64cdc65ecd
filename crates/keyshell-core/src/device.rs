/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Device records.

use time::OffsetDateTime;

/// Longest accepted device alias, in bytes.
pub const MAX_ALIAS_LEN: usize = 64;

/// Opaque stable identifier for a registered device.
///
/// Distinct from the anchor number (identity identity) and from list
/// position: renames and removals address devices by this id so a
/// concurrent re-order cannot retarget them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DeviceId(uuid::Uuid);

impl DeviceId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for DeviceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "device:{}", self.0)
    }
}

/// What a device is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Purpose {
    /// Day-to-day sign-in device (a passkey).
    Authentication,
    /// Backup method, excluded from the authenticator cap.
    Recovery,
}

/// The kind of credential backing a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum KeyType {
    Unknown,
    /// Platform authenticator (built into the signing device).
    Platform,
    /// Roaming authenticator (security key / fob).
    CrossPlatform,
    /// Recovery seed phrase.
    SeedPhrase,
}

/// Whether a device may be removed through the ordinary settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Protection {
    Unprotected,
    /// Removal is refused; used for recovery phrases by default.
    Protected,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeviceRecord {
    pub id: DeviceId,
    pub alias: String,
    pub purpose: Purpose,
    pub key_type: KeyType,
    pub protection: Protection,
    #[serde(with = "time::serde::rfc3339")]
    pub registered_at: OffsetDateTime,
}

impl DeviceRecord {
    pub fn new(
        alias: impl Into<String>,
        purpose: Purpose,
        key_type: KeyType,
        protection: Protection,
    ) -> Self {
        Self {
            id: DeviceId::new(),
            alias: alias.into(),
            purpose,
            key_type,
            protection,
            registered_at: OffsetDateTime::now_utc(),
        }
    }
}
