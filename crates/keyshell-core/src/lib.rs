/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Portable identity and device vault kernel for Keyshell.
//!
//! Owns the device model and the vault that authoritatively enforces device
//! limits. The UI layers above only hint at these limits (a disabled button,
//! a tooltip); every rule that matters is checked here so no rendering path
//! can sidestep it.

pub mod device;
pub mod seed;
pub mod vault;

pub use device::{DeviceId, DeviceRecord, KeyType, Protection, Purpose, MAX_ALIAS_LEN};
pub use vault::{DeviceSummary, Vault, VaultError};

/// Maximum number of devices per anchor, recovery methods included.
pub const MAX_DEVICES: usize = 10;

/// Room left for non-recovery devices: the vault allows one recovery method
/// per kind (phrase, fob), so two of the ten total slots are reserved.
pub const MAX_AUTHENTICATORS: usize = 8;

/// Anchor numbers are allocated sequentially starting here.
pub const FIRST_ANCHOR: u64 = 10_000;
