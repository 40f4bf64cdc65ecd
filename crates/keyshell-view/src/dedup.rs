/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Label deduplication.
//!
//! Users pick device names freely, so "laptop" three times over is a
//! legitimate list. Display tells them apart by annotating the second and
//! later occurrences with their ordinal: the k-th item sharing a label
//! carries `dup_count = k`, the first carries nothing (never `Some(1)`).
//! Comparison is exact string equality; no trimming, no case folding.

/// An item annotated with its same-label ordinal, when it has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deduped<T> {
    pub item: T,
    pub dup_count: Option<u32>,
}

/// Annotate `items` in order. Length and order are preserved for any input;
/// the quadratic scan is fine against the ten-device cap.
pub fn dedup_labels<T>(items: Vec<T>, label: impl Fn(&T) -> &str) -> Vec<Deduped<T>> {
    let mut out: Vec<Deduped<T>> = Vec::with_capacity(items.len());
    for item in items {
        let prior = out
            .iter()
            .filter(|seen| label(&seen.item) == label(&item))
            .count();
        let dup_count = if prior >= 1 {
            Some(prior as u32 + 1)
        } else {
            None
        };
        out.push(Deduped { item, dup_count });
    }
    out
}
