//! Pinned behavior at the edges of ranking and correction.

use retort::{Answer, Lexicon, Normalizer, RankingEngine, EngineOptions, MemoryStorage, StopWords};

use crate::common::sample_normalizer;

#[test]
fn tied_exact_counts_order_by_content() {
    let store = MemoryStorage::from_pairs([
        ("q one", "R3"),
        ("q one", "R3"),
        ("q one", "R1"),
        ("q one", "R1"),
        ("q one", "R2"),
    ]);
    let answers = RankingEngine::new(store, EngineOptions { tops: 2, verbose: false }).process("q one");
    assert_eq!(answers, vec![Answer::new("R1", 1.0), Answer::new("R3", 1.0)]);
}

#[test]
fn stop_word_only_query_has_no_candidates() {
    let store = MemoryStorage::from_pairs([("How do I reset the gateway?", "Hold reset.")]);
    let engine = RankingEngine::new(store, EngineOptions::default());
    assert!(engine.process("how do I").is_empty());
    assert!(engine.process("").is_empty());
}

#[test]
fn empty_stop_word_list_keeps_every_long_token() {
    let stop_words = StopWords::new(Vec::<String>::new());
    assert_eq!(stop_words.extract_topics("How do I reset it"), vec!["how", "reset"]);
}

#[test]
fn custom_term_wins_over_spelling() {
    // "gw" would otherwise be left alone or corrected toward a short word
    assert_eq!(sample_normalizer().correct_input("reset gw"), "reset gateway");
}

#[test]
fn equal_frequency_ties_keep_vocabulary_order() {
    let n = Normalizer::new(Lexicon::new(
        ["hat", "cat"],
        Vec::new(),
        [("cat".to_string(), 5), ("hat".to_string(), 5)],
    ));
    assert_eq!(n.suggestions("rat"), vec!["hat".to_string()]);
}

#[test]
fn distance_four_is_out_of_reach() {
    let n = Normalizer::new(Lexicon::new(["abcdefgh"], Vec::new(), Vec::new()));
    assert_eq!(n.correct_spelling("abcdwxyz"), "abcdwxyz");
    assert_eq!(n.correct_spelling("abcdexyz"), "abcdefgh");
}

#[test]
fn non_ascii_lengths_count_characters() {
    assert_eq!(retort::length_ratio("café", "cafe"), 1.0);
}
