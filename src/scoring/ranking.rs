// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordering and confidence normalization.
//!
//! Sort order is fully deterministic: equal scores fall back to lexical order
//! of the text, so the same corpus and query always produce the same list no
//! matter how the storage backend iterates its maps.

use std::cmp::Ordering;

use crate::types::{Answer, CandidateScore, ResponseCounts};

/// Compare two answers for ranking.
///
/// 1. **Confidence** - descending
/// 2. **Content** - ascending, for determinism
pub fn compare_answers(a: &Answer, b: &Answer) -> Ordering {
    match b.confidence.partial_cmp(&a.confidence) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.content.cmp(&b.content),
    }
}

/// Compare two fuzzy candidates for ranking.
///
/// 1. **Final score** - descending
/// 2. **Question** - ascending, for determinism
pub fn compare_candidates(a: &CandidateScore, b: &CandidateScore) -> Ordering {
    match b.final_score.partial_cmp(&a.final_score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.question.cmp(&b.question),
    }
}

/// `score / max`, or 0 when `max` is not positive.
#[inline]
pub fn confidence(score: f32, max: f32) -> f32 {
    if max > 0.0 {
        (score / max).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// The most observed response for a question; ties go to the lexically smallest.
///
/// Responses observed zero times are never chosen.
pub fn best_response(responses: &ResponseCounts) -> Option<(&str, u32)> {
    responses
        .iter()
        .filter(|(_, &count)| count > 0)
        .min_by(|(a_text, &a_count), (b_text, &b_count)| {
            b_count.cmp(&a_count).then_with(|| a_text.cmp(b_text))
        })
        .map(|(text, &count)| (text.as_str(), count))
}

/// Exact-match answers: every response, confidence relative to the top count.
///
/// Sorted and truncated to `tops`. Empty when every count is zero.
pub fn rank_responses(responses: &ResponseCounts, tops: usize) -> Vec<Answer> {
    let max_count = responses.values().copied().max().unwrap_or(0);
    if max_count == 0 {
        return Vec::new();
    }

    let mut answers: Vec<Answer> = responses
        .iter()
        .map(|(content, &count)| Answer::new(content.clone(), confidence(count as f32, max_count as f32)))
        .collect();

    answers.sort_by(compare_answers);
    answers.truncate(tops);
    answers
}
