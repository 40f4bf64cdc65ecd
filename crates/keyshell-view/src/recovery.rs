/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The recovery-methods section.
//!
//! Sibling of the passkey list: recovery methods (seed phrase, fob) are
//! listed with the same row shape but without dedup annotation — the vault
//! allows at most one recovery method per kind, so labels cannot collide.
//! With no method registered, the section renders a prompt instead of a list.

use crate::tree::{MenuEntry, ViewNode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryEntry<M> {
    pub alias: String,
    pub warn: Option<String>,
    pub rename: M,
    pub remove: Option<M>,
}

pub fn recovery_section<M>(entries: Vec<RecoveryEntry<M>>, on_add_recovery: M) -> ViewNode<M> {
    let mut children = vec![ViewNode::Heading {
        text: "Recovery methods".to_string(),
        badge: None,
    }];

    if entries.is_empty() {
        children.push(ViewNode::Paragraph {
            text: "No recovery method registered. Add one so you can regain access if you \
                   lose your passkeys."
                .to_string(),
        });
    } else {
        let items = entries
            .into_iter()
            .map(|entry| {
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
                    dup_count: None,
                    warning: entry.warn,
                    menu,
                }
            })
            .collect();
        children.push(ViewNode::List { items });
    }

    children.push(ViewNode::Button {
        label: "Add recovery method".to_string(),
        message: on_add_recovery,
        enabled: true,
        tooltip: None,
    });

    ViewNode::Section {
        warning: false,
        children,
    }
}
