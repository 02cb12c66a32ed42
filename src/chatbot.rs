// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The conversational front: correction, small talk, then ranking.
//!
//! Greetings and one-word messages never reach the ranking engine. A greeting
//! gets a canned reply; a lone word gets a request for more context, because a
//! single token carries too little signal for topic matching.
//!
//! Greetings are matched on the raw message as well as the corrected one:
//! "hi" is one edit from "i", so correction alone would lose it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::context::ContextTracker;
use crate::engine::RankingEngine;
use crate::fuzzy::{EditSimilarity, TextSimilarity};
use crate::lexicon::parse_word_list;
use crate::normalizer::Normalizer;
use crate::storage::StorageAdapter;
use crate::types::Answer;

/// Used when no greetings file is configured or it yields nothing.
pub const DEFAULT_GREETINGS: &[&str] = &["hi", "hello", "hey", "greetings", "sup", "yo"];

/// Reply to a recognized greeting.
pub const GREETING_REPLY: &str = "Hi there! Ask me anything about the products.";

/// What the bot has to say about one message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Reply {
    Greeting(String),
    /// The message was a single word; ask for more.
    Clarify(String),
    /// Ranked answers; empty means no confident answer.
    Answers(Vec<Answer>),
}

impl Reply {
    /// The text a transport would show first, if any.
    pub fn best(&self) -> Option<&str> {
        match self {
            Reply::Greeting(text) | Reply::Clarify(text) => Some(text),
            Reply::Answers(answers) => answers.first().map(|a| a.content.as_str()),
        }
    }
}

/// One handled message.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    /// The message after correction, before any context is appended.
    pub question: String,
    pub reply: Reply,
}

/// Normalizer + ranking engine + small-talk handling.
#[derive(Debug)]
pub struct Chatbot<S, T = EditSimilarity> {
    normalizer: Normalizer,
    engine: RankingEngine<S, T>,
    greetings: HashSet<String>,
}

impl<S: StorageAdapter, T: TextSimilarity> Chatbot<S, T> {
    pub fn new(normalizer: Normalizer, engine: RankingEngine<S, T>) -> Self {
        Self::with_greetings(normalizer, engine, DEFAULT_GREETINGS.iter().copied())
    }

    pub fn with_greetings<I>(normalizer: Normalizer, engine: RankingEngine<S, T>, greetings: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            normalizer,
            engine,
            greetings: greetings
                .into_iter()
                .map(|g| g.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Answer a message with no conversation context.
    pub fn respond(&self, message: &str) -> Reply {
        self.exchange(None, message).reply
    }

    /// Answer a message within a conversation, updating its keyword context.
    pub fn respond_in(&self, context: &mut ContextTracker, message: &str) -> Reply {
        self.exchange(Some(context), message).reply
    }

    /// Answer a message and keep the corrected question alongside the reply.
    pub fn exchange(&self, context: Option<&mut ContextTracker>, message: &str) -> Exchange {
        let corrected = self.normalizer.correct_input(message);
        if let Some(reply) = self.small_talk(message, &corrected) {
            return Exchange {
                question: corrected,
                reply,
            };
        }

        let answers = match context {
            Some(context) => {
                context.observe(&corrected);
                let question = context.decorate(&corrected);
                debug!(question = question.as_str(), "asking");
                let answers = self.engine.process(&question);
                context.tick();
                answers
            }
            None => self.engine.process(&corrected),
        };
        Exchange {
            question: corrected,
            reply: Reply::Answers(answers),
        }
    }

    fn is_greeting(&self, text: &str) -> bool {
        self.greetings.contains(&text.trim().to_lowercase())
    }

    fn small_talk(&self, raw: &str, corrected: &str) -> Option<Reply> {
        if self.is_greeting(raw) || self.is_greeting(corrected) {
            return Some(Reply::Greeting(GREETING_REPLY.to_string()));
        }

        let mut words = corrected.split_whitespace();
        match (words.next(), words.next()) {
            (Some(word), None) => Some(Reply::Clarify(format!(
                "{}, can you provide more context to this?",
                word
            ))),
            _ => None,
        }
    }
}

/// Greetings from a one-per-line file, or the defaults if it is missing or empty.
pub fn load_greetings(path: Option<&Path>) -> Vec<String> {
    let defaults = || DEFAULT_GREETINGS.iter().map(|g| g.to_string()).collect();
    let Some(path) = path else {
        return defaults();
    };

    match fs::read_to_string(path) {
        Ok(text) => {
            let greetings: Vec<String> = parse_word_list(&text)
                .into_iter()
                .map(|g| g.to_lowercase())
                .collect();
            if greetings.is_empty() {
                warn!(path = %path.display(), "greetings file is empty, using defaults");
                defaults()
            } else {
                greetings
            }
        }
        Err(e) => {
            warn!(path = %path.display(), "could not open greetings file, using defaults: {e}");
            defaults()
        }
    }
}
