// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading the correction tables from disk.
//!
//! All three formats are line-oriented. Blank lines and lines starting with `#`
//! are skipped; lines with the wrong number of fields are skipped without
//! complaint. Only I/O failures surface as errors, and only for the vocabulary
//! and custom dictionary. A missing frequency file costs correction quality,
//! not correctness, so it degrades to an empty table.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::Lexicon;
use crate::error::LexiconError;

/// Where the correction tables live.
#[derive(Debug, Clone)]
pub struct LexiconPaths {
    pub vocabulary: PathBuf,
    pub custom_dictionary: PathBuf,
    pub word_frequency: Option<PathBuf>,
}

impl Lexicon {
    /// Load all tables, failing if the vocabulary or custom dictionary is unreadable.
    pub fn from_files(paths: &LexiconPaths) -> Result<Self, LexiconError> {
        let custom = parse_custom_dictionary(&read_table("custom dictionary", &paths.custom_dictionary)?);
        let vocabulary = parse_vocabulary(&read_table("vocabulary", &paths.vocabulary)?);

        let frequency = match &paths.word_frequency {
            Some(path) => match read_table("word frequency", path) {
                Ok(text) => parse_word_frequency(&text),
                Err(e) => {
                    warn!("could not load word frequency data: {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let lexicon = Lexicon::new(vocabulary, custom, frequency);
        info!(
            vocabulary = lexicon.vocabulary_len(),
            custom = lexicon.custom_len(),
            frequency = lexicon.frequency_len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }
}

fn read_table(kind: &'static str, path: &Path) -> Result<String, LexiconError> {
    fs::read_to_string(path).map_err(|source| LexiconError::Read {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

/// Non-blank, non-comment lines, trimmed.
fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// One known-correct word per line.
pub fn parse_vocabulary(text: &str) -> Vec<String> {
    content_lines(text).map(str::to_string).collect()
}

/// `misspelling,correction` pairs.
///
/// Pairs with an empty side are dropped: an empty key never matches a token and
/// an empty correction would delete one.
pub fn parse_custom_dictionary(text: &str) -> Vec<(String, String)> {
    content_lines(text)
        .filter_map(|line| {
            let mut parts = line.split(',');
            let (from, to) = (parts.next()?, parts.next()?);
            if parts.next().is_some() {
                return None;
            }
            let (from, to) = (from.trim(), to.trim());
            (!from.is_empty() && !to.is_empty()).then(|| (from.to_string(), to.to_string()))
        })
        .collect()
}

/// Whitespace-separated `word count` pairs. A count that does not parse is 0.
pub fn parse_word_frequency(text: &str) -> Vec<(String, u64)> {
    content_lines(text)
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let (word, count) = (parts.next()?, parts.next()?);
            if parts.next().is_some() {
                return None;
            }
            Some((word.to_lowercase(), count.parse().unwrap_or(0)))
        })
        .collect()
}

/// Plain word list (stop words, greetings, keywords): one entry per line.
pub fn parse_word_list(text: &str) -> Vec<String> {
    parse_vocabulary(text)
}
