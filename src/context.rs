// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword context that outlives a single question.
//!
//! Follow-up questions often drop the subject ("and how do I update it?"). The
//! tracker remembers domain keywords mentioned in recent turns and appends them
//! to the next question, where topic matching picks them up:
//!
//! ```text
//! turn 1: "reset the gateway"     observe → {gateway: 2}
//! turn 2: "how do I update it"    decorate → "how do I update it [Context: gateway]"
//!                                 tick     → {gateway: 1}
//! turn 3: ...                     tick     → {}
//! ```
//!
//! This is per-conversation state owned by the caller, not by the engine.

use std::collections::BTreeMap;

/// Smallest and largest number of turns a keyword stays active.
pub const MEMORY_RANGE: std::ops::RangeInclusive<u8> = 2..=4;

/// Default number of turns a keyword stays active.
pub const DEFAULT_MEMORY: u8 = 2;

/// Ages keywords seen in recent turns.
#[derive(Debug, Clone)]
pub struct ContextTracker {
    keywords: Vec<String>,
    memory: u8,
    active: BTreeMap<String, u8>,
}

impl ContextTracker {
    /// `memory` is clamped into [`MEMORY_RANGE`].
    pub fn new<I>(keywords: I, memory: u8) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(Into::into)
                .filter(|k: &String| !k.trim().is_empty())
                .collect(),
            memory: memory.clamp(*MEMORY_RANGE.start(), *MEMORY_RANGE.end()),
            active: BTreeMap::new(),
        }
    }

    pub fn memory(&self) -> u8 {
        self.memory
    }

    /// Reset the age of every keyword that occurs in `text` (case-insensitive).
    ///
    /// Returns the keywords that matched.
    pub fn observe(&mut self, text: &str) -> Vec<&str> {
        let lower = text.to_lowercase();
        let mut matched = Vec::new();
        for keyword in &self.keywords {
            if lower.contains(&keyword.to_lowercase()) {
                self.active.insert(keyword.clone(), self.memory);
                matched.push(keyword.as_str());
            }
        }
        matched
    }

    /// Keywords still active, sorted.
    pub fn active(&self) -> Vec<&str> {
        self.active
            .iter()
            .filter(|(_, &age)| age > 0)
            .map(|(k, _)| k.as_str())
            .collect()
    }

    /// `question` with the active keywords appended, or unchanged if none are.
    pub fn decorate(&self, question: &str) -> String {
        let active = self.active();
        if active.is_empty() {
            question.to_string()
        } else {
            format!("{} [Context: {}]", question, active.join(", "))
        }
    }

    /// End of turn: age every keyword and forget the expired ones.
    pub fn tick(&mut self) {
        for age in self.active.values_mut() {
            *age = age.saturating_sub(1);
        }
        self.active.retain(|_, age| *age > 0);
    }

    /// Forget everything observed so far.
    pub fn clear(&mut self) {
        self.active.clear();
    }
}
