// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Retrieval-based question answering over previously seen conversations.
//!
//! A question is cleaned up, matched against stored questions, and answered
//! with the responses those questions received, each with a confidence in
//! `[0, 1]`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────────────────────┐
//! │ normalizer   │──▶│ chatbot      │──▶│ engine                       │
//! │ (lexicon,    │   │ (greetings,  │   │ exact: find → rank_responses │
//! │  fuzzy)      │   │  context)    │   │ fuzzy: search → scoring      │
//! └──────────────┘   └──────────────┘   └──────────────┬───────────────┘
//!                                                      │
//!                                                      ▼
//!                                          ┌───────────────────────┐
//!                                          │ storage::StorageAdapter│
//!                                          │ (MemoryStorage, ...)  │
//!                                          └───────────────────────┘
//! ```
//!
//! | Module       | Responsibility                                        |
//! |--------------|-------------------------------------------------------|
//! | `lexicon`    | vocabulary, custom dictionary, word frequencies       |
//! | `normalizer` | custom-term substitution, then spelling correction    |
//! | `topics`     | stop-word filtering into topic tokens                 |
//! | `scoring`    | Jaccard overlap, ratios, weighted blend, ordering     |
//! | `engine`     | exact vs fuzzy ranking, confidence normalization      |
//! | `storage`    | the storage contract and an in-memory corpus store    |
//! | `context`    | keywords carried across conversation turns            |
//! | `session`    | chat state and saved transcripts                      |
//! | `contracts`  | debug-build checks on every ranking result            |
//!
//! # Usage
//!
//! ```
//! use retort::{EngineOptions, MemoryStorage, RankingEngine};
//!
//! let store = MemoryStorage::from_pairs([
//!     ("How do I reset the gateway?", "Hold the reset button for ten seconds."),
//! ]);
//! let engine = RankingEngine::new(store, EngineOptions::default());
//!
//! let answers = engine.process("reset my gateway");
//! assert_eq!(answers[0].content, "Hold the reset button for ten seconds.");
//! assert_eq!(answers[0].confidence, 1.0);
//! ```

pub mod chatbot;
pub mod config;
pub mod context;
pub mod contracts;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod lexicon;
pub mod normalizer;
pub mod scoring;
pub mod session;
pub mod storage;
pub mod testing;
pub mod topics;
mod types;
mod utils;

pub use chatbot::{load_greetings, Chatbot, Exchange, Reply, DEFAULT_GREETINGS};
pub use config::Config;
pub use context::ContextTracker;
pub use engine::{EngineOptions, RankingEngine};
pub use error::{ConfigError, CorpusError, Error, LexiconError, Result};
pub use fuzzy::{edit_distance, EditSimilarity, TextSimilarity};
pub use lexicon::{Lexicon, LexiconPaths};
pub use normalizer::{Normalizer, MAX_EDIT_DISTANCE};
pub use scoring::{
    length_ratio, score_candidate, topic_ratio, topic_similarity, LENGTH_WEIGHT, TEXT_WEIGHT,
    TOPIC_COUNT_WEIGHT, TOPIC_WEIGHT,
};
pub use session::{Session, Transcript};
pub use storage::{Corpus, MemoryStorage, StorageAdapter};
pub use topics::StopWords;
pub use types::{Answer, CandidateScore, ResponseCounts};
pub use utils::normalize;

#[cfg(test)]
mod tests {
    //! Property tests for the full pipeline.

    use super::*;
    use crate::testing::{sample_chatbot, sample_engine, SAMPLE_PAIRS};
    use proptest::prelude::*;
    use proptest::string::string_regex;

    fn query_strategy() -> impl Strategy<Value = String> {
        let word = string_regex("[a-z]{1,9}").unwrap();
        prop::collection::vec(word, 0..8).prop_map(|words| words.join(" "))
    }

    #[test]
    fn every_stored_question_answers_itself() {
        let engine = sample_engine(1);
        for (question, _) in SAMPLE_PAIRS {
            let answers = engine.process(question);
            assert_eq!(answers.len(), 1, "no answer for {question:?}");
            assert_eq!(answers[0].confidence, 1.0);
        }
    }

    #[test]
    fn the_most_repeated_response_wins_an_exact_match() {
        let answers = sample_engine(2).process("how do i reset the GATEWAY?");
        assert_eq!(answers[0], Answer::new("Hold the reset button for ten seconds.", 1.0));
        assert_eq!(answers[1], Answer::new("Power cycle it twice.", 0.5));
    }

    #[test]
    fn misspelled_question_is_answered_through_the_chatbot() {
        let reply = sample_chatbot(1).respond("how do i updte the frmware");
        assert_eq!(reply.best(), Some("Upload the image in the web interface."));
    }

    proptest! {
        #[test]
        fn answers_are_bounded_sorted_and_capped(query in query_strategy(), tops in 1usize..5) {
            let answers = sample_engine(tops).process(&query);
            prop_assert!(answers.len() <= tops);
            for answer in &answers {
                prop_assert!((0.0..=1.0).contains(&answer.confidence));
            }
            for pair in answers.windows(2) {
                prop_assert!(pair[0].confidence >= pair[1].confidence);
            }
        }

        #[test]
        fn fuzzy_results_start_at_full_confidence(query in query_strategy()) {
            let answers = sample_engine(3).process(&query);
            if let Some(first) = answers.first() {
                prop_assert_eq!(first.confidence, 1.0);
            }
        }
    }
}
