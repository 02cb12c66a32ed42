// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow through a ranking call.
//!
//! | Type             | Lifetime            | Produced by                  |
//! |------------------|---------------------|------------------------------|
//! | `ResponseCounts` | storage-owned       | `StorageAdapter::find`       |
//! | `CandidateScore` | one ranking call    | `scoring::score_candidate`   |
//! | `Answer`         | returned to caller  | `RankingEngine::process`     |
//!
//! # Invariants
//!
//! - **Answer**: `0.0 <= confidence <= 1.0`. A result list is sorted by
//!   confidence, highest first, and never longer than the requested `tops`.
//!
//! - **CandidateScore**: `final_score` is the weighted blend of the component
//!   scores, all of which lie in `[0, 1]`, so `final_score` does too.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response text → number of times it was observed for one question.
pub type ResponseCounts = HashMap<String, u32>;

/// A ranked response.
///
/// Exact matches get `count / max_count`; fuzzy matches get
/// `final_score / top_final_score`. The two scales never mix in one result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub content: String,
    pub confidence: f32,
}

impl Answer {
    pub fn new(content: impl Into<String>, confidence: f32) -> Self {
        Self {
            content: content.into(),
            confidence,
        }
    }
}

/// Scoring breakdown for one fuzzy candidate question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateScore {
    /// The previously seen question this score belongs to.
    pub question: String,
    /// Raw-text similarity between query and question.
    pub text_score: f32,
    /// Jaccard overlap of the two topic sets.
    pub topic_score: f32,
    /// Character length ratio, smaller over larger.
    pub length_ratio: f32,
    /// Query topic count over the larger topic count.
    pub topic_ratio: f32,
    /// Weighted blend used for ranking.
    pub final_score: f32,
}
