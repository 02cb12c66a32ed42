// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for candidate scoring.
//!
//! Every component and the blended score must stay in [0, 1] whatever the
//! texts and whatever the pluggable text similarity reports.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use retort::{score_candidate, EditSimilarity, StopWords, TextSimilarity};

#[derive(Debug, Arbitrary)]
struct ScoreInput {
    query: String,
    candidate: String,
    /// Replaces the edit similarity when set, including NaN and infinities
    text_score: Option<f32>,
}

fuzz_target!(|input: ScoreInput| {
    let query: String = input.query.chars().take(120).collect();
    let candidate: String = input.candidate.chars().take(120).collect();

    let stop_words = StopWords::default();
    let query_topics = stop_words.extract_topics(&query);
    let candidate_topics = stop_words.extract_topics(&candidate);
    let text_score = input
        .text_score
        .unwrap_or_else(|| EditSimilarity.similarity(&query, &candidate));

    let score = score_candidate(&query, &query_topics, &candidate, &candidate_topics, text_score);

    for (name, value) in [
        ("text", score.text_score),
        ("topic", score.topic_score),
        ("length", score.length_ratio),
        ("topic_ratio", score.topic_ratio),
    ] {
        assert!((0.0..=1.0).contains(&value), "{} = {} out of range", name, value);
    }
    assert!(
        score.final_score >= 0.0 && score.final_score <= 1.0 + 1e-6,
        "final = {}",
        score.final_score
    );
});
