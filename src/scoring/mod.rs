// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates and answers get their numbers.
//!
//! `components` turns one (query, candidate question) pair into a [`CandidateScore`].
//! `ranking` orders candidates and answers deterministically and normalizes
//! confidence against the best score of a list.
//!
//! [`CandidateScore`]: crate::CandidateScore

mod components;
pub mod ranking;

pub use components::*;
