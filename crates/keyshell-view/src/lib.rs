/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Pure view descriptions for the Keyshell device manager.
//!
//! Nothing in this crate knows about egui (or any other toolkit). Section
//! renderers are total functions from device entries to an immutable
//! [`ViewNode`] tree; the host walks the tree, paints it, and feeds pressed
//! messages back into its own intent queue. This keeps the display contract
//! (dedup annotation, capacity gating, warning marking, per-item menus)
//! testable without a UI harness.

pub mod authenticators;
pub mod dedup;
pub mod recovery;
pub mod tree;

pub use authenticators::{AuthenticatorEntry, AuthenticatorsSection, authenticators_section};
pub use dedup::{Deduped, dedup_labels};
pub use recovery::{RecoveryEntry, recovery_section};
pub use tree::{Badge, MenuEntry, ViewNode};
