/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The passkey list section.
//!
//! Renders the ordered authenticator list into a [`ViewNode`] tree: header
//! with a `current/capacity` badge, optional few-devices warning marking,
//! dedup-annotated rows with per-item settings menus, and the add-device
//! control gated on capacity. Total over any list; capacity here is a display
//! hint only — the vault is the authoritative enforcer.

use crate::dedup::dedup_labels;
use crate::tree::{Badge, MenuEntry, ViewNode};

/// One authenticator as the renderer sees it.
///
/// `remove` is the remove capability: `None` means the device may not be
/// removed (e.g. it is the last one left) and no "Remove" entry is rendered.
/// Rename is always available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatorEntry<M> {
    pub alias: String,
    /// Per-device warning badge message, if any.
    pub warn: Option<String>,
    pub rename: M,
    pub remove: Option<M>,
}

/// Inputs for [`authenticators_section`].
#[derive(Debug, Clone)]
pub struct AuthenticatorsSection<M> {
    pub entries: Vec<AuthenticatorEntry<M>>,
    /// Maximum number of authenticators, shown in the header and gating the
    /// add control. Callers pass `keyshell_core::MAX_AUTHENTICATORS`.
    pub capacity: usize,
    /// Set when the identity has too few sign-in/recovery methods; marks the
    /// whole section as a warning card and adds an explanatory paragraph.
    pub warn_few_devices: bool,
    pub on_add_device: M,
}

pub fn authenticators_section<M>(section: AuthenticatorsSection<M>) -> ViewNode<M> {
    let AuthenticatorsSection {
        entries,
        capacity,
        warn_few_devices,
        on_add_device,
    } = section;

    let count = entries.len();
    let capacity_hint =
        format!("You can register up to {capacity} passkeys (recovery methods excluded).");

    let mut children = vec![ViewNode::Heading {
        text: "Passkeys".to_string(),
        badge: Some(Badge {
            label: format!("{count}/{capacity}"),
            tooltip: capacity_hint.clone(),
        }),
    }];

    if warn_few_devices {
        children.push(ViewNode::Paragraph {
            text: "Add a passkey or recovery method to make your identity more secure."
                .to_string(),
        });
    }

    let items = dedup_labels(entries, |entry| entry.alias.as_str())
        .into_iter()
        .map(|deduped| {
            let entry = deduped.item;
            let mut menu = vec![MenuEntry {
                action: "rename",
                caption: "Rename".to_string(),
                message: entry.rename,
            }];
            if let Some(remove) = entry.remove {
                menu.push(MenuEntry {
                    action: "remove",
                    caption: "Remove".to_string(),
                    message: remove,
                });
            }
            ViewNode::Item {
                label: entry.alias,
                dup_count: deduped.dup_count,
                warning: entry.warn,
                menu,
            }
        })
        .collect();
    children.push(ViewNode::List { items });

    children.push(ViewNode::Button {
        label: "Add new passkey".to_string(),
        message: on_add_device,
        enabled: count < capacity,
        tooltip: Some(format!(
            "{capacity_hint} Remove a passkey before you can add a new one."
        )),
    });

    ViewNode::Section {
        warning: warn_few_devices,
        children,
    }
}
