// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: edit distance and raw-text similarity.
//!
//! Two consumers here. Spelling correction needs bounded distances against every
//! vocabulary entry, so it wants the early-exit path. Candidate ranking needs a
//! similarity in [0, 1] between whole sentences, which sits behind the
//! [`TextSimilarity`] trait so deployments can swap in their own measure.

mod levenshtein;
mod similarity;

pub use levenshtein::*;
pub use similarity::*;
