// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the ranking engine over an arbitrary corpus.
//!
//! Trains a store from fuzzed (question, response) pairs, asks a fuzzed
//! question and checks the output contract: at most `tops` answers, bounded
//! confidences, sorted highest first.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use retort::{EngineOptions, MemoryStorage, RankingEngine};

#[derive(Debug, Arbitrary)]
struct RankInput {
    pairs: Vec<(String, String)>,
    query: String,
    tops: u8,
}

fuzz_target!(|input: RankInput| {
    let mut store = MemoryStorage::default();
    for (question, response) in input.pairs.iter().take(64) {
        store.learn(question, response);
    }

    let tops = usize::from(input.tops % 8);
    let engine = RankingEngine::new(store, EngineOptions { tops, verbose: false });
    let answers = engine.process(&input.query);

    assert!(answers.len() <= tops.max(1));
    for answer in &answers {
        assert!((0.0..=1.0).contains(&answer.confidence));
    }
    for pair in answers.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
});
