// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-conversation state for an interactive chat.
//!
//! A [`Session`] owns the keyword context and a [`Transcript`] of the turns
//! that reached the ranking engine. Saving writes the transcript as a corpus
//! file, so a reviewed chat can be dropped straight into the corpus directory:
//!
//! ```yaml
//! categories:
//!   - gateway
//! conversations:
//!   - - how do i reset the gateway
//!     - Hold the reset button for ten seconds.
//!   - - what is the meaning of life
//!     - No answer!
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::info;

use crate::chatbot::{Chatbot, Reply};
use crate::context::ContextTracker;
use crate::error::CorpusError;
use crate::fuzzy::TextSimilarity;
use crate::storage::{Corpus, StorageAdapter};

/// Recorded in place of an answer when the engine had none.
pub const NO_ANSWER: &str = "No answer!";

/// File name category when no keyword was mentioned.
pub const GENERIC_CATEGORY: &str = "general";

/// Default directory for saved transcripts.
pub const DEFAULT_TRANSCRIPT_DIR: &str = "recent_chats";

/// Answered turns, tagged with the keywords mentioned in them.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    keywords: Vec<String>,
    corpus: Corpus,
}

impl Transcript {
    pub fn new<I>(keywords: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(Into::into)
                .filter(|k: &String| !k.trim().is_empty())
                .collect(),
            corpus: Corpus::default(),
        }
    }

    /// Record `question` and the first answer of `reply`.
    ///
    /// Small talk is not recorded. Returns whether a turn was added.
    pub fn record(&mut self, question: &str, reply: &Reply) -> bool {
        let Reply::Answers(answers) = reply else {
            return false;
        };
        let answer = answers
            .first()
            .map_or(NO_ANSWER, |answer| answer.content.as_str());

        self.tag(question);
        self.tag(answer);
        self.corpus
            .conversations
            .push(vec![question.to_string(), answer.to_string()]);
        true
    }

    fn tag(&mut self, text: &str) {
        let lower = text.to_lowercase();
        for keyword in &self.keywords {
            if lower.contains(&keyword.to_lowercase()) && !self.corpus.categories.contains(keyword) {
                self.corpus.categories.push(keyword.clone());
            }
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn len(&self) -> usize {
        self.corpus.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.conversations.is_empty()
    }

    pub fn clear(&mut self) {
        self.corpus = Corpus::default();
    }

    /// Write the transcript into `dir` and start a new one.
    ///
    /// Returns the written file, or `None` if there was nothing to save. Files
    /// are named `chat<unix seconds>_<first category>.yml`; an existing name
    /// gets a numeric suffix instead of being overwritten.
    pub fn save(&mut self, dir: &Path) -> Result<Option<PathBuf>, CorpusError> {
        if self.is_empty() {
            return Ok(None);
        }

        let write_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| CorpusError::Write { path, source }
        };
        fs::create_dir_all(dir).map_err(write_err(dir))?;

        let yaml = serde_yaml::to_string(&self.corpus).map_err(CorpusError::Encode)?;
        let path = self.free_path(dir);
        fs::write(&path, yaml).map_err(write_err(&path))?;

        info!(path = %path.display(), turns = self.len(), "transcript saved");
        self.clear();
        Ok(Some(path))
    }

    fn free_path(&self, dir: &Path) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        let category: String = self
            .corpus
            .categories
            .first()
            .map_or(GENERIC_CATEGORY, String::as_str)
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();

        let base = format!("chat{}_{}", stamp, category);
        let mut path = dir.join(format!("{base}.yml"));
        let mut n = 1;
        while path.exists() {
            path = dir.join(format!("{base}-{n}.yml"));
            n += 1;
        }
        path
    }
}

/// Context plus transcript for one interactive conversation.
#[derive(Debug, Clone)]
pub struct Session {
    context: Option<ContextTracker>,
    transcript: Transcript,
}

impl Session {
    /// `context` is `None` when follow-up questions should stand alone.
    pub fn new(context: Option<ContextTracker>, transcript: Transcript) -> Self {
        Self {
            context,
            transcript,
        }
    }

    /// Answer `message` and record the turn.
    pub fn ask<S, T>(&mut self, bot: &Chatbot<S, T>, message: &str) -> Reply
    where
        S: StorageAdapter,
        T: TextSimilarity,
    {
        let exchange = bot.exchange(self.context.as_mut(), message);
        self.transcript.record(&exchange.question, &exchange.reply);
        exchange.reply
    }

    /// Save the transcript into `dir`, then forget the conversation so far.
    pub fn save(&mut self, dir: &Path) -> Result<Option<PathBuf>, CorpusError> {
        let saved = self.transcript.save(dir)?;
        if let Some(context) = self.context.as_mut() {
            context.clear();
        }
        Ok(saved)
    }

    pub fn context(&self) -> Option<&ContextTracker> {
        self.context.as_ref()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}
