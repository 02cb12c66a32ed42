// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Topic extraction: the content-bearing words of a sentence.
//!
//! A topic is a lowercase token that is not a stop word and is longer than
//! [`MIN_TOPIC_LEN`] characters. "How do I reset the gateway?" has the topics
//! `["reset", "gateway?"]`. Punctuation stays attached; the corpus was built
//! the same way, so it matches.

use std::collections::HashSet;

/// Tokens this short (in characters) or shorter are never topics.
pub const MIN_TOPIC_LEN: usize = 2;

/// English function words ignored by topic extraction.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "is", "at", "which", "on", "a", "an", "and", "or", "but", "in", "with", "to", "for",
    "of", "what", "how", "why", "when", "where", "who", "will", "be", "do", "does", "can",
    "could", "would", "should", "has", "have", "had", "are", "was", "were",
];

/// Immutable stop-word set.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS.iter().copied())
    }
}

impl StopWords {
    /// Build from a custom list. Entries are lowercased.
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, lower: &str) -> bool {
        self.words.contains(lower)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Topics of `text`, in order, duplicates kept.
    pub fn extract_topics(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split_whitespace()
            .filter(|token| !self.contains(token) && token.chars().count() > MIN_TOPIC_LEN)
            .map(str::to_string)
            .collect()
    }
}
