// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Input cleanup before matching: custom terms first, then spelling.
//!
//! ```text
//! "how do i updte the wifi modul"
//!        │ correct_custom_terms   (wifi → WiFi)
//!        ▼
//! "how do i updte the WiFi modul"
//!        │ correct_spelling       (updte → update, modul → module)
//!        ▼
//! "how do i update the WiFi module"
//! ```
//!
//! Tokens are whitespace-separated and re-joined with single spaces, so runs of
//! whitespace collapse even when nothing is corrected.
//!
//! # Suggestion search
//!
//! One accumulator scans the vocabulary, then the frequency table, keeping every
//! word at the smallest distance seen so far (never beyond
//! [`MAX_EDIT_DISTANCE`]). Both sources share the distance scale, so a
//! vocabulary word and a frequency word can tie. Ties go to the most frequent
//! word; equal frequencies keep scan order (vocabulary in load order, then
//! frequency words alphabetically).
//!
//! The scan is O(vocabulary + frequency table) per unknown token. That is the
//! dominant cost of a query and is what `benches/ranking_bench.rs` measures.

use std::sync::Arc;

use tracing::trace;

use crate::fuzzy::bounded_distance;
use crate::lexicon::Lexicon;

/// Largest edit distance a correction may span.
pub const MAX_EDIT_DISTANCE: usize = 3;

/// Spelling and terminology correction over an immutable [`Lexicon`].
#[derive(Debug, Clone)]
pub struct Normalizer {
    lexicon: Arc<Lexicon>,
}

impl Normalizer {
    pub fn new(lexicon: impl Into<Arc<Lexicon>>) -> Self {
        Self {
            lexicon: lexicon.into(),
        }
    }

    /// Full pipeline: custom terms, then spelling.
    pub fn correct_input(&self, input: &str) -> String {
        let corrected = self.correct_spelling(&self.correct_custom_terms(input));
        if corrected != input {
            trace!(input, corrected = corrected.as_str(), "input corrected");
        }
        corrected
    }

    /// Replace tokens whose lowercase form is a custom-dictionary key.
    ///
    /// The replacement keeps the dictionary's casing, not the input's.
    pub fn correct_custom_terms(&self, input: &str) -> String {
        input
            .split_whitespace()
            .map(|token| {
                self.lexicon
                    .custom_term(&token.to_lowercase())
                    .unwrap_or(token)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Replace unknown tokens with their closest known word, if one is in reach.
    pub fn correct_spelling(&self, input: &str) -> String {
        input
            .split_whitespace()
            .map(|token| {
                if self.lexicon.is_known(token) {
                    return token.to_string();
                }
                self.suggestions(&token.to_lowercase())
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| token.to_string())
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Closest known words to `word` (expected lowercase).
    ///
    /// Returns at most one word when several tie, and nothing when no known word
    /// is within [`MAX_EDIT_DISTANCE`].
    pub fn suggestions(&self, word: &str) -> Vec<String> {
        let mut best = Suggestions::new();

        for (folded, entry) in self.lexicon.vocabulary_entries() {
            best.offer(word, folded, entry);
        }
        for entry in self.lexicon.frequency_words() {
            best.offer(word, entry, entry);
        }

        if best.candidates.len() > 1 {
            let winner = best
                .candidates
                .iter()
                .fold(None::<(&String, u64)>, |acc, candidate| {
                    let freq = self.lexicon.frequency_or_default(candidate);
                    match acc {
                        Some((_, top)) if top >= freq => acc,
                        _ => Some((candidate, freq)),
                    }
                })
                .map(|(candidate, _)| candidate.clone());
            return winner.into_iter().collect();
        }

        best.candidates
    }
}

/// Minimum-distance accumulator shared across the vocabulary and frequency scans.
struct Suggestions {
    min_distance: usize,
    candidates: Vec<String>,
}

impl Suggestions {
    fn new() -> Self {
        Self {
            min_distance: MAX_EDIT_DISTANCE + 1,
            candidates: Vec::new(),
        }
    }

    /// Compare `word` against `compare_as`; on a hit remember `keep`.
    fn offer(&mut self, word: &str, compare_as: &str, keep: &str) {
        // Anything farther than the current best can't change the outcome.
        let limit = self.min_distance.min(MAX_EDIT_DISTANCE);
        let Some(distance) = bounded_distance(word, compare_as, limit) else {
            return;
        };
        if distance < self.min_distance {
            self.min_distance = distance;
            self.candidates.clear();
            self.candidates.push(keep.to_string());
        } else if distance == self.min_distance {
            self.candidates.push(keep.to_string());
        }
    }
}
