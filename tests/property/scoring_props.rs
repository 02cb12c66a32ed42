//! Bounds and symmetries of the candidate scoring components.

use proptest::prelude::*;
use retort::{length_ratio, score_candidate, topic_ratio, topic_similarity, StopWords};

fn topics() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-f]{3,5}", 0..6)
}

proptest! {
    #[test]
    fn jaccard_is_bounded_and_symmetric(a in topics(), b in topics()) {
        let ab = topic_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(ab, topic_similarity(&b, &a));
    }

    #[test]
    fn jaccard_of_a_set_with_itself_is_one(a in topics()) {
        prop_assume!(!a.is_empty());
        prop_assert_eq!(topic_similarity(&a, &a), 1.0);
    }

    #[test]
    fn ratios_are_bounded(a in ".{0,30}", b in ".{0,30}", x in 0usize..20, y in 0usize..20) {
        prop_assert!((0.0..=1.0).contains(&length_ratio(&a, &b)));
        prop_assert!((0.0..=1.0).contains(&topic_ratio(x, y)));
    }

    #[test]
    fn final_score_is_bounded_for_any_text_score(
        query in "[a-z ]{0,40}",
        candidate in "[a-z ]{0,40}",
        text_score in prop::num::f32::ANY,
    ) {
        let stop_words = StopWords::default();
        let qt = stop_words.extract_topics(&query);
        let ct = stop_words.extract_topics(&candidate);
        let score = score_candidate(&query, &qt, &candidate, &ct, text_score);
        prop_assert!((0.0..=1.0 + 1e-6).contains(&score.final_score));
        prop_assert!((0.0..=1.0).contains(&score.text_score));
    }
}

#[test]
fn disjoint_topics_score_zero() {
    assert_eq!(topic_similarity(&["reset"], &["firmware"]), 0.0);
}

#[test]
fn empty_sides_score_zero() {
    let empty: [&str; 0] = [];
    assert_eq!(topic_similarity(&empty, &["reset"]), 0.0);
    assert_eq!(length_ratio("", ""), 0.0);
    assert_eq!(topic_ratio(0, 0), 0.0);
}
