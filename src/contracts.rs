// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for ranking output.
//!
//! Debug-mode assertions on what every ranking call promises its caller:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the documented output guarantees exactly
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Guarantee                                  |
//! |------------------------------|--------------------------------------------|
//! | `check_confidence_bounded`   | every confidence lies in [0, 1]            |
//! | `check_answers_sorted`       | confidences are non-increasing             |
//! | `check_answers_well_formed`  | both of the above, and `len <= tops`       |

use crate::scoring::{LENGTH_WEIGHT, TEXT_WEIGHT, TOPIC_COUNT_WEIGHT, TOPIC_WEIGHT};
use crate::types::Answer;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The blend weights are a convex combination, so a final score built from
/// [0, 1] components stays in [0, 1].
const _: () = {
    const TOTAL: f32 = TEXT_WEIGHT + TOPIC_WEIGHT + LENGTH_WEIGHT + TOPIC_COUNT_WEIGHT;
    assert!(TOTAL > 0.999_99 && TOTAL < 1.000_01);
    assert!(TEXT_WEIGHT > 0.0 && TOPIC_WEIGHT > 0.0);
    assert!(LENGTH_WEIGHT > 0.0 && TOPIC_COUNT_WEIGHT > 0.0);
};

/// Every confidence is in [0, 1] and not NaN.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_confidence_bounded(answers: &[Answer]) {
    for (i, answer) in answers.iter().enumerate() {
        debug_assert!(
            (0.0..=1.0).contains(&answer.confidence),
            "Contract violation: answers[{}].confidence = {} outside [0, 1]",
            i,
            answer.confidence
        );
    }
}

/// Confidences never increase down the list.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_answers_sorted(answers: &[Answer]) {
    for (i, pair) in answers.windows(2).enumerate() {
        debug_assert!(
            pair[0].confidence >= pair[1].confidence,
            "Contract violation: answers[{}].confidence {} < answers[{}].confidence {}",
            i,
            pair[0].confidence,
            i + 1,
            pair[1].confidence
        );
    }
}

/// Full output contract of a ranking call.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_answers_well_formed(answers: &[Answer], tops: usize) {
    debug_assert!(
        answers.len() <= tops,
        "Contract violation: {} answers returned for tops = {}",
        answers.len(),
        tops
    );
    check_confidence_bounded(answers);
    check_answers_sorted(answers);
}
