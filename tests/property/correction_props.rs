//! Invariants of spelling and custom-term correction.

use proptest::prelude::*;
use retort::MAX_EDIT_DISTANCE;

use crate::common::{sample_lexicon, sample_normalizer};

fn token() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{1,10}").unwrap()
}

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(token(), 0..8).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn correction_never_changes_the_token_count(input in sentence()) {
        let corrected = sample_normalizer().correct_input(&input);
        prop_assert_eq!(
            corrected.split_whitespace().count(),
            input.split_whitespace().count()
        );
    }

    #[test]
    fn known_tokens_pass_through(index in 0usize..retort::testing::SAMPLE_VOCABULARY.len()) {
        let word = retort::testing::SAMPLE_VOCABULARY[index];
        let n = sample_normalizer();
        prop_assert_eq!(n.correct_spelling(word), word);
        prop_assert_eq!(n.correct_spelling(&word.to_uppercase()), word.to_uppercase());
    }

    #[test]
    fn replacements_are_known_and_within_reach(word in "[a-z]{1,10}") {
        let n = sample_normalizer();
        let lexicon = sample_lexicon();
        prop_assume!(!lexicon.is_known(&word));

        let suggestions = n.suggestions(&word);
        prop_assert!(suggestions.len() <= 1);
        if let Some(suggestion) = suggestions.first() {
            prop_assert!(lexicon.is_known(suggestion));
            prop_assert!(retort::edit_distance(&word, &suggestion.to_lowercase()) <= MAX_EDIT_DISTANCE);
        }
    }

    #[test]
    fn correction_is_idempotent(input in sentence()) {
        let n = sample_normalizer();
        let once = n.correct_input(&input);
        prop_assert_eq!(n.correct_input(&once), once);
    }
}
