/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The view-description tree.
//!
//! Generic over the message type `M`: every pressable surface carries an `M`
//! value instead of a callback, so trees stay `Clone + PartialEq + Serialize`
//! and a test can assert on the exact message a button would emit. Hosts map
//! presses into their own intent queue; [`ViewNode::map`] re-targets a tree
//! built against one message type into another.

use serde::Serialize;

/// One node of a rendered section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ViewNode<M> {
    /// Container for a whole section. `warning` marks the container itself
    /// as a warning card (icon + styling are the host's concern).
    Section {
        warning: bool,
        children: Vec<ViewNode<M>>,
    },
    /// Section heading with an optional complication badge (e.g. "3/8").
    Heading {
        text: String,
        badge: Option<Badge>,
    },
    /// Free-standing paragraph text.
    Paragraph { text: String },
    /// Ordered list of items.
    List { items: Vec<ViewNode<M>> },
    /// A single device row.
    Item {
        label: String,
        /// Set for the second and later occurrences of a shared label.
        dup_count: Option<u32>,
        /// Per-item warning badge message, when the device itself warrants one.
        warning: Option<String>,
        /// Settings menu entries, in display order.
        menu: Vec<MenuEntry<M>>,
    },
    /// Pressable control.
    Button {
        label: String,
        message: M,
        enabled: bool,
        tooltip: Option<String>,
    },
}

/// Small annotation next to a heading, with a hover explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub tooltip: String,
}

/// One entry of an item settings menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry<M> {
    /// Stable action id ("rename", "remove"), used by tests and hosts that
    /// need to address an entry without matching on the caption.
    pub action: &'static str,
    pub caption: String,
    pub message: M,
}

impl<M> ViewNode<M> {
    /// Re-target the message type, preserving structure.
    pub fn map<N>(self, f: &impl Fn(M) -> N) -> ViewNode<N> {
        match self {
            ViewNode::Section { warning, children } => ViewNode::Section {
                warning,
                children: children.into_iter().map(|c| c.map(f)).collect(),
            },
            ViewNode::Heading { text, badge } => ViewNode::Heading { text, badge },
            ViewNode::Paragraph { text } => ViewNode::Paragraph { text },
            ViewNode::List { items } => ViewNode::List {
                items: items.into_iter().map(|i| i.map(f)).collect(),
            },
            ViewNode::Item {
                label,
                dup_count,
                warning,
                menu,
            } => ViewNode::Item {
                label,
                dup_count,
                warning,
                menu: menu
                    .into_iter()
                    .map(|entry| MenuEntry {
                        action: entry.action,
                        caption: entry.caption,
                        message: f(entry.message),
                    })
                    .collect(),
            },
            ViewNode::Button {
                label,
                message,
                enabled,
                tooltip,
            } => ViewNode::Button {
                label,
                message: f(message),
                enabled,
                tooltip,
            },
        }
    }

    /// Depth-first walk over this node and its children.
    pub fn visit(&self, f: &mut impl FnMut(&ViewNode<M>)) {
        f(self);
        match self {
            ViewNode::Section { children, .. } => {
                for child in children {
                    child.visit(f);
                }
            }
            ViewNode::List { items } => {
                for item in items {
                    item.visit(f);
                }
            }
            _ => {}
        }
    }
}
