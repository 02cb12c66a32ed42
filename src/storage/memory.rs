// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory corpus store.
//!
//! Questions are keyed by their canonical form ([`normalize`]), so "Reset the
//! Gateway?" and "reset the gateway?" share one response group. Candidate
//! search is a tiny inverted index from topic word to question:
//!
//! ```text
//! query "restart gateway" ──topics──▶ {restart, gateway}
//!                                         │
//!        postings: gateway → [0, 3]       │
//!                  restart → [3]          ▼
//!                               shared counts {3: 2, 0: 1} → [q3, q0]
//! ```
//!
//! Candidates are ordered by shared topic count, then question text, and
//! capped at the search limit.

use std::collections::HashMap;

use crate::topics::StopWords;
use crate::types::ResponseCounts;
use crate::utils::normalize;

use super::StorageAdapter;

/// Default cap on candidates returned by [`MemoryStorage::search`].
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

#[derive(Debug, Clone)]
struct Entry {
    /// First spelling seen for this question.
    question: String,
    responses: ResponseCounts,
}

/// A trained corpus held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    entries: Vec<Entry>,
    by_key: HashMap<String, usize>,
    postings: HashMap<String, Vec<usize>>,
    stop_words: StopWords,
    search_limit: usize,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new(StopWords::default(), DEFAULT_SEARCH_LIMIT)
    }
}

impl MemoryStorage {
    pub fn new(stop_words: StopWords, search_limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            by_key: HashMap::new(),
            postings: HashMap::new(),
            stop_words,
            search_limit,
        }
    }

    /// Build from (question, response) pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut store = Self::default();
        for (question, response) in pairs {
            store.learn(question, response);
        }
        store
    }

    /// Record one observation of `response` answering `question`.
    ///
    /// Blank questions or responses are ignored. Returns whether anything was
    /// recorded.
    pub fn learn(&mut self, question: &str, response: &str) -> bool {
        let key = normalize(question);
        let response = response.trim();
        if key.is_empty() || response.is_empty() {
            return false;
        }

        let id = match self.by_key.get(&key) {
            Some(&id) => id,
            None => {
                let id = self.entries.len();
                self.entries.push(Entry {
                    question: question.split_whitespace().collect::<Vec<_>>().join(" "),
                    responses: ResponseCounts::new(),
                });
                for word in self.index_words(&key) {
                    let list = self.postings.entry(word).or_default();
                    if list.last() != Some(&id) {
                        list.push(id);
                    }
                }
                self.by_key.insert(key, id);
                id
            }
        };

        record_response(&mut self.entries[id].responses, response);
        true
    }

    /// Number of distinct questions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Topic words with surrounding punctuation trimmed, deduplicated.
    fn index_words(&self, text: &str) -> Vec<String> {
        let mut words: Vec<String> = self
            .stop_words
            .extract_topics(text)
            .iter()
            .map(|topic| topic.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
            .filter(|word| !word.is_empty())
            .collect();
        words.sort_unstable();
        words.dedup();
        words
    }
}

impl StorageAdapter for MemoryStorage {
    fn find(&self, query: &str) -> Option<ResponseCounts> {
        let id = *self.by_key.get(&normalize(query))?;
        let responses = &self.entries[id].responses;
        (!responses.is_empty()).then(|| responses.clone())
    }

    fn search(&self, query: &str) -> Vec<String> {
        let mut shared: HashMap<usize, usize> = HashMap::new();
        for word in self.index_words(&normalize(query)) {
            for &id in self.postings.get(&word).into_iter().flatten() {
                *shared.entry(id).or_insert(0) += 1;
            }
        }

        let mut hits: Vec<(usize, &str)> = shared
            .into_iter()
            .map(|(id, count)| (count, self.entries[id].question.as_str()))
            .collect();
        hits.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        hits.truncate(self.search_limit);
        hits.into_iter().map(|(_, question)| question.to_string()).collect()
    }
}

/// Count one more observation; a count pinned at `u32::MAX` stays there.
fn record_response(responses: &mut ResponseCounts, response: &str) {
    let count = responses.entry(response.to_string()).or_insert(0);
    *count = count.saturating_add(1);
}
