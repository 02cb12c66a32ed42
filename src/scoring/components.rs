// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind fuzzy candidate ranking.
//!
//! ```text
//! final = 0.40 * text_similarity(T, C)
//!       + 0.30 * jaccard(topics T, topics C)
//!       + 0.15 * min(len T, len C) / max(len T, len C)
//!       + 0.15 * |topics T| / max(|topics T|, |topics C|)
//! ```
//!
//! Every component lies in [0, 1] and the weights sum to 1, so the final score
//! does too. Ratios whose denominator is zero (both sides empty) count as 0.
//!
//! # Constants
//!
//! | Component      | Weight | Measures                                  |
//! |----------------|--------|-------------------------------------------|
//! | Text           | 0.40   | Raw character-level resemblance           |
//! | Topic overlap  | 0.30   | Shared content words                      |
//! | Length ratio   | 0.15   | Similar sentence size                     |
//! | Topic ratio    | 0.15   | Candidate doesn't drown the query topics  |

use std::collections::HashSet;

use crate::types::CandidateScore;
use crate::utils::char_len;

/// Weight of the raw-text similarity.
pub const TEXT_WEIGHT: f32 = 0.4;

/// Weight of the topic overlap (Jaccard).
pub const TOPIC_WEIGHT: f32 = 0.3;

/// Weight of the character length ratio.
pub const LENGTH_WEIGHT: f32 = 0.15;

/// Weight of the topic count ratio.
pub const TOPIC_COUNT_WEIGHT: f32 = 0.15;

/// Jaccard similarity of two topic lists, treated as sets.
///
/// 0 when either list is empty.
pub fn topic_similarity<S: AsRef<str>>(a: &[S], b: &[S]) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set_a: HashSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let set_b: HashSet<&str> = b.iter().map(AsRef::as_ref).collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.len() + set_b.len() - intersection;

    ratio(intersection, union)
}

/// `numerator / denominator`, or 0 when the denominator is 0.
#[inline]
pub fn ratio(numerator: usize, denominator: usize) -> f32 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f32 / denominator as f32
    }
}

/// Shorter over longer, in characters.
pub fn length_ratio(a: &str, b: &str) -> f32 {
    let (a, b) = (char_len(a), char_len(b));
    ratio(a.min(b), a.max(b))
}

/// Query topic count over the larger of the two topic counts.
pub fn topic_ratio(query_topics: usize, candidate_topics: usize) -> f32 {
    ratio(query_topics, query_topics.max(candidate_topics))
}

/// Weighted blend of the four components.
#[inline]
pub fn blend(text_score: f32, topic_score: f32, length_ratio: f32, topic_ratio: f32) -> f32 {
    TEXT_WEIGHT * text_score
        + TOPIC_WEIGHT * topic_score
        + LENGTH_WEIGHT * length_ratio
        + TOPIC_COUNT_WEIGHT * topic_ratio
}

/// Score one candidate question against the query.
///
/// `text_score` comes from the pluggable [`crate::TextSimilarity`]; it is
/// clamped into [0, 1] so a misbehaving measure cannot break confidence bounds.
pub fn score_candidate<S: AsRef<str>>(
    query: &str,
    query_topics: &[S],
    candidate: &str,
    candidate_topics: &[S],
    text_score: f32,
) -> CandidateScore {
    let text_score = if text_score.is_nan() {
        0.0
    } else {
        text_score.clamp(0.0, 1.0)
    };
    let topic_score = topic_similarity(query_topics, candidate_topics);
    let length_ratio = length_ratio(query, candidate);
    let topic_ratio = topic_ratio(query_topics.len(), candidate_topics.len());

    CandidateScore {
        question: candidate.to_string(),
        text_score,
        topic_score,
        length_ratio,
        topic_ratio,
        final_score: blend(text_score, topic_score, length_ratio, topic_ratio),
    }
}
