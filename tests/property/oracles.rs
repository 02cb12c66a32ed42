//! Differential tests: the bounded edit distance against `strsim`.
//!
//! `strsim::levenshtein` is the plain O(nm) algorithm over chars. If the two
//! disagree, the early exits are wrong.

use proptest::prelude::*;
use retort::fuzzy::{bounded_distance, edit_distance, levenshtein_within};
use retort::{EditSimilarity, TextSimilarity};

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-eé]{0,10}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn edit_distance_matches_oracle(a in word(), b in word()) {
        prop_assert_eq!(edit_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn bounded_distance_agrees_within_bound(a in word(), b in word(), max in 0usize..5) {
        let oracle = strsim::levenshtein(&a, &b);
        let bounded = bounded_distance(&a, &b, max);
        if oracle <= max {
            prop_assert_eq!(bounded, Some(oracle));
        } else {
            prop_assert_eq!(bounded, None);
        }
        prop_assert_eq!(levenshtein_within(&a, &b, max), oracle <= max);
    }

    #[test]
    fn edit_similarity_matches_normalized_oracle(a in word(), b in word()) {
        let expected = if a.is_empty() && b.is_empty() {
            1.0
        } else {
            strsim::normalized_levenshtein(&a, &b) as f32
        };
        let actual = EditSimilarity.similarity(&a, &b);
        prop_assert!((actual - expected).abs() < 1e-5, "{} vs {}", actual, expected);
    }
}
