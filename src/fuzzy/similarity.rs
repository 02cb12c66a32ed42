// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Raw-text similarity between a query and a stored question.

use super::edit_distance;

/// A similarity measure over whole sentences.
///
/// Implementations must return a value in `[0, 1]` where `1.0` means identical.
/// The ranking engine weighs it at 40% of a candidate's final score.
pub trait TextSimilarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f32;
}

impl<F> TextSimilarity for F
where
    F: Fn(&str, &str) -> f32 + Send + Sync,
{
    fn similarity(&self, a: &str, b: &str) -> f32 {
        self(a, b)
    }
}

/// Normalized Levenshtein similarity: `1 - distance / max(len a, len b)`.
///
/// Case-insensitive, measured in characters. Two empty strings are identical.
#[derive(Debug, Default, Clone, Copy)]
pub struct EditSimilarity;

impl TextSimilarity for EditSimilarity {
    fn similarity(&self, a: &str, b: &str) -> f32 {
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        let longest = a.chars().count().max(b.chars().count());
        if longest == 0 {
            return 1.0;
        }
        let distance = edit_distance(&a, &b);
        1.0 - distance as f32 / longest as f32
    }
}
