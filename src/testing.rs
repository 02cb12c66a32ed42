// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. It provides
//! one small product-support corpus and matching correction tables so tests
//! agree on what "the gateway question" means.

#![doc(hidden)]

use crate::chatbot::Chatbot;
use crate::engine::{EngineOptions, RankingEngine};
use crate::lexicon::Lexicon;
use crate::normalizer::Normalizer;
use crate::storage::MemoryStorage;

/// (question, response) examples; the reset question is answered twice.
pub const SAMPLE_PAIRS: &[(&str, &str)] = &[
    ("How do I reset the gateway?", "Hold the reset button for ten seconds."),
    ("How do I reset the gateway?", "Hold the reset button for ten seconds."),
    ("How do I reset the gateway?", "Power cycle it twice."),
    ("How do I update the firmware?", "Upload the image in the web interface."),
    ("What is the default password?", "The password is printed on the label."),
    ("Does the gateway support PoE?", "Yes, it is powered over Ethernet."),
    ("How do I configure the WiFi module?", "Open the network page and pick WiFi."),
];

pub const SAMPLE_VOCABULARY: &[&str] = &[
    "gateway", "firmware", "update", "reset", "password", "default", "module", "configure",
    "support", "label", "network",
];

pub const SAMPLE_CUSTOM: &[(&str, &str)] = &[("wifi", "WiFi"), ("poe", "PoE"), ("gw", "gateway")];

pub const SAMPLE_FREQUENCY: &[(&str, u64)] = &[
    ("the", 900),
    ("how", 400),
    ("do", 380),
    ("does", 200),
    ("what", 350),
    ("is", 700),
    ("it", 650),
    ("i", 800),
    ("my", 300),
];

/// Store trained on [`SAMPLE_PAIRS`].
pub fn sample_store() -> MemoryStorage {
    MemoryStorage::from_pairs(SAMPLE_PAIRS.iter().copied())
}

/// Lexicon built from the `SAMPLE_*` tables.
pub fn sample_lexicon() -> Lexicon {
    Lexicon::new(
        SAMPLE_VOCABULARY.iter().copied(),
        SAMPLE_CUSTOM
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string())),
        SAMPLE_FREQUENCY
            .iter()
            .map(|(word, count)| (word.to_string(), *count)),
    )
}

pub fn sample_normalizer() -> Normalizer {
    Normalizer::new(sample_lexicon())
}

pub fn sample_engine(tops: usize) -> RankingEngine<MemoryStorage> {
    RankingEngine::new(sample_store(), EngineOptions { tops, verbose: false })
}

pub fn sample_chatbot(tops: usize) -> Chatbot<MemoryStorage> {
    Chatbot::new(sample_normalizer(), sample_engine(tops))
}

/// Three single-exchange conversations in the on-disk corpus format.
pub const SAMPLE_CORPUS_YAML: &str = "\
categories:
  - gateway
conversations:
  - - How do I reset the gateway?
    - Hold the reset button for ten seconds.
  - - How do I update the firmware?
    - Upload the image in the web interface.
  - - Does the gateway support PoE?
    - Yes, it is powered over Ethernet.
";
