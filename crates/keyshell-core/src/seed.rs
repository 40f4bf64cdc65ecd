/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Recovery seed phrase generation.
//!
//! Phrases are display material for the recovery journey, not key material:
//! Keyshell carries no authentication cryptography. Ten words drawn from a
//! fixed list, independently and uniformly.

use rand::Rng;

pub const SEED_PHRASE_WORDS: usize = 10;

const WORDLIST: [&str; 48] = [
    "acorn", "amber", "anchor", "aspen", "basalt", "beacon", "birch", "bramble", "canyon",
    "cedar", "cinder", "clover", "coral", "crag", "delta", "drift", "ember", "fjord", "flint",
    "gale", "garnet", "glade", "granite", "grove", "harbor", "heath", "inlet", "juniper", "kelp",
    "lagoon", "larch", "lichen", "marsh", "mesa", "moss", "obsidian", "onyx", "osprey", "pebble",
    "pinecone", "quarry", "reef", "sage", "shale", "summit", "thicket", "tundra", "willow",
];

/// Generate a phrase with the given source of randomness.
pub fn seed_phrase_with(rng: &mut impl Rng) -> String {
    let mut words = Vec::with_capacity(SEED_PHRASE_WORDS);
    for _ in 0..SEED_PHRASE_WORDS {
        words.push(WORDLIST[rng.gen_range(0..WORDLIST.len())]);
    }
    words.join(" ")
}

/// Generate a phrase with the thread-local generator.
pub fn seed_phrase() -> String {
    seed_phrase_with(&mut rand::thread_rng())
}
