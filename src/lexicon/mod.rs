// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The correction tables: vocabulary, custom dictionary, word frequencies.
//!
//! A [`Lexicon`] is built once and never mutated. Every normalizer and engine
//! holds its own (or a shared `Arc`), so tests can run side by side with
//! different dictionaries.
//!
//! | Table             | Key form          | Used for                           |
//! |-------------------|-------------------|------------------------------------|
//! | vocabulary        | as written        | known words, correction targets    |
//! | custom dictionary | lowercase         | domain term substitution           |
//! | frequency         | lowercase         | known words, targets, tie-breaking |

mod loader;

pub use loader::*;

use std::collections::{BTreeMap, HashMap, HashSet};

/// Frequency assumed for a correction candidate missing from the frequency table.
pub const DEFAULT_FREQUENCY: u64 = 1;

/// Immutable word tables consulted by the normalizer.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    vocabulary: Vec<String>,
    // Lowercased vocabulary, index-aligned with `vocabulary`.
    vocabulary_folded: Vec<String>,
    vocabulary_lower: HashSet<String>,
    custom: HashMap<String, String>,
    // Ordered so suggestion scans (and their tie-breaks) are reproducible.
    frequency: BTreeMap<String, u64>,
}

impl Lexicon {
    /// Build from in-memory tables.
    ///
    /// Custom-dictionary keys and frequency words are lowercased; vocabulary
    /// entries keep their spelling because they are what a correction writes.
    pub fn new<V, C, F>(vocabulary: V, custom: C, frequency: F) -> Self
    where
        V: IntoIterator,
        V::Item: Into<String>,
        C: IntoIterator<Item = (String, String)>,
        F: IntoIterator<Item = (String, u64)>,
    {
        let vocabulary: Vec<String> = vocabulary.into_iter().map(Into::into).collect();
        let vocabulary_folded: Vec<String> = vocabulary.iter().map(|w| w.to_lowercase()).collect();
        let vocabulary_lower = vocabulary_folded.iter().cloned().collect();
        let custom = custom
            .into_iter()
            .map(|(from, to)| (from.to_lowercase(), to))
            .collect();
        let frequency = frequency
            .into_iter()
            .map(|(word, count)| (word.to_lowercase(), count))
            .collect();

        Self {
            vocabulary,
            vocabulary_folded,
            vocabulary_lower,
            custom,
            frequency,
        }
    }

    /// `(lowercase, as written)` for every vocabulary entry, in load order.
    pub fn vocabulary_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vocabulary_folded
            .iter()
            .zip(&self.vocabulary)
            .map(|(folded, word)| (folded.as_str(), word.as_str()))
    }

    /// Canonical replacement for a lowercase token, if the dictionary has one.
    pub fn custom_term(&self, lower: &str) -> Option<&str> {
        self.custom.get(lower).map(String::as_str)
    }

    pub fn is_custom_key(&self, lower: &str) -> bool {
        self.custom.contains_key(lower)
    }

    /// Observed frequency of a lowercase word.
    pub fn frequency(&self, lower: &str) -> Option<u64> {
        self.frequency.get(lower).copied()
    }

    /// Frequency used for tie-breaking: unknown words rank below every seen word
    /// with a count above one.
    pub fn frequency_or_default(&self, word: &str) -> u64 {
        self.frequency(&word.to_lowercase())
            .unwrap_or(DEFAULT_FREQUENCY)
    }

    /// Frequency-table words in lexical order.
    pub fn frequency_words(&self) -> impl Iterator<Item = &str> {
        self.frequency.keys().map(String::as_str)
    }

    /// A token is known (and left alone by correction) if any table has it.
    pub fn is_known(&self, token: &str) -> bool {
        let lower = token.to_lowercase();
        self.is_custom_key(&lower)
            || self.vocabulary_lower.contains(&lower)
            || self.frequency.contains_key(&lower)
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn custom_len(&self) -> usize {
        self.custom.len()
    }

    pub fn frequency_len(&self) -> usize {
        self.frequency.len()
    }
}
