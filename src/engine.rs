// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking engine: exact match first, fuzzy topic match otherwise.
//!
//! ```text
//!  text ──▶ storage.find(text) ──found──▶ rank_exact  (count / max_count)
//!                 │
//!               miss
//!                 ▼
//!          storage.search(text) ──▶ score every candidate ──▶ sort
//!                                                              │
//!             for the first `tops`: storage.find(candidate) ◀──┘
//!             best response, confidence = score / top score
//! ```
//!
//! An exact match short-circuits fuzzy scoring entirely, so the two confidence
//! scales never appear in the same result list.
//!
//! The engine holds no mutable state. Concurrent callers need nothing beyond a
//! storage backend that tolerates concurrent reads.

use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::contracts::check_answers_well_formed;
use crate::fuzzy::{EditSimilarity, TextSimilarity};
use crate::scoring::ranking::{best_response, compare_candidates, confidence, rank_responses};
use crate::scoring::score_candidate;
use crate::storage::StorageAdapter;
use crate::topics::StopWords;
use crate::types::{Answer, CandidateScore, ResponseCounts};

/// Candidate lists at least this long are scored on the rayon pool.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 256;

/// Construction-time engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Maximum answers per query. Values below 1 are raised to 1.
    pub tops: usize,
    /// Log per-candidate scoring at debug level. Never changes results.
    pub verbose: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            tops: 1,
            verbose: false,
        }
    }
}

/// Ranks stored responses for free-text queries.
#[derive(Debug)]
pub struct RankingEngine<S, T = EditSimilarity> {
    storage: S,
    similarity: T,
    stop_words: StopWords,
    options: EngineOptions,
}

impl<S: StorageAdapter> RankingEngine<S> {
    /// Engine with the default stop words and [`EditSimilarity`].
    pub fn new(storage: S, options: EngineOptions) -> Self {
        Self::with_similarity(storage, EditSimilarity, StopWords::default(), options)
    }
}

impl<S: StorageAdapter, T: TextSimilarity> RankingEngine<S, T> {
    pub fn with_similarity(
        storage: S,
        similarity: T,
        stop_words: StopWords,
        options: EngineOptions,
    ) -> Self {
        let options = EngineOptions {
            tops: options.tops.max(1),
            ..options
        };
        Self {
            storage,
            similarity,
            stop_words,
            options,
        }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Best answers for `text`, highest confidence first, at most `tops`.
    ///
    /// Never fails: no match is an empty list.
    pub fn process(&self, text: &str) -> Vec<Answer> {
        let answers = match self.storage.find(text) {
            Some(responses) if !responses.is_empty() => self.rank_exact(&responses),
            _ => self.rank_fuzzy(text),
        };
        check_answers_well_formed(&answers, self.options.tops);
        answers
    }

    fn rank_exact(&self, responses: &ResponseCounts) -> Vec<Answer> {
        let answers = rank_responses(responses, self.options.tops);
        if self.options.verbose {
            debug!(responses = responses.len(), kept = answers.len(), "exact match");
        }
        answers
    }

    fn rank_fuzzy(&self, text: &str) -> Vec<Answer> {
        let candidates = self.storage.search(text);
        let scores = self.score_candidates(text, &candidates);

        let Some(top_score) = scores.first().map(|s| s.final_score) else {
            if self.options.verbose {
                debug!(query = text, "no candidates");
            }
            return Vec::new();
        };
        if top_score <= 0.0 {
            return Vec::new();
        }

        scores
            .iter()
            .take(self.options.tops)
            .filter_map(|score| {
                let responses = self.storage.find(&score.question)?;
                let (content, _) = best_response(&responses)?;
                Some(Answer::new(content, confidence(score.final_score, top_score)))
            })
            .collect()
    }

    /// Score every candidate question against `text`, best first.
    pub fn score_candidates(&self, text: &str, candidates: &[String]) -> Vec<CandidateScore> {
        let query_topics = self.stop_words.extract_topics(text);
        let score_one = |candidate: &String| {
            let candidate_topics = self.stop_words.extract_topics(candidate);
            let text_score = self.similarity.similarity(text, candidate);
            score_candidate(
                text,
                query_topics.as_slice(),
                candidate,
                candidate_topics.as_slice(),
                text_score,
            )
        };

        #[cfg(feature = "parallel")]
        let mut scores: Vec<CandidateScore> = if candidates.len() >= PARALLEL_THRESHOLD {
            candidates.par_iter().map(score_one).collect()
        } else {
            candidates.iter().map(score_one).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let mut scores: Vec<CandidateScore> = candidates.iter().map(score_one).collect();

        scores.sort_by(compare_candidates);

        if self.options.verbose {
            for score in &scores {
                debug!(
                    question = score.question.as_str(),
                    text = score.text_score,
                    topic = score.topic_score,
                    length = score.length_ratio,
                    topic_ratio = score.topic_ratio,
                    final_score = score.final_score,
                    "candidate"
                );
            }
        }
        scores
    }
}
