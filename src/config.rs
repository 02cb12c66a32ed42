// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! YAML configuration.
//!
//! ```yaml
//! vocabulary_file: data/vocabulary.txt
//! custom_dictionary_file: data/custom_dictionary.txt
//! word_frequency_file: data/word_frequency.txt   # optional
//! greetings_file: data/greetings.txt             # optional
//! keywords_file: data/keywords.txt               # optional, defaults to the vocabulary
//! stop_words_file: data/stop_words.txt           # optional
//! corpus: corpus/                                # optional, file or directory
//! transcript_dir: recent_chats/                  # where `/save` writes chats
//! tops: 3
//! context_memory: 2
//! search_limit: 50
//! ```
//!
//! Relative paths are resolved against the directory holding the config file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::chatbot::load_greetings;
use crate::context::{DEFAULT_MEMORY, MEMORY_RANGE};
use crate::engine::EngineOptions;
use crate::error::ConfigError;
use crate::lexicon::{parse_word_list, LexiconPaths};
use crate::session::DEFAULT_TRANSCRIPT_DIR;
use crate::storage::DEFAULT_SEARCH_LIMIT;
use crate::topics::StopWords;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub vocabulary_file: PathBuf,
    pub custom_dictionary_file: PathBuf,
    #[serde(default)]
    pub word_frequency_file: Option<PathBuf>,
    #[serde(default)]
    pub greetings_file: Option<PathBuf>,
    #[serde(default)]
    pub keywords_file: Option<PathBuf>,
    #[serde(default)]
    pub stop_words_file: Option<PathBuf>,
    #[serde(default)]
    pub corpus: Option<PathBuf>,
    #[serde(default = "default_transcript_dir")]
    pub transcript_dir: PathBuf,
    #[serde(default = "default_tops")]
    pub tops: usize,
    #[serde(default = "default_context_memory")]
    pub context_memory: u8,
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
}

fn default_tops() -> usize {
    1
}

fn default_transcript_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TRANSCRIPT_DIR)
}

fn default_context_memory() -> u8 {
    DEFAULT_MEMORY
}

fn default_search_limit() -> usize {
    DEFAULT_SEARCH_LIMIT
}

impl Config {
    /// Read, parse, resolve and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        config.validate()?;
        Ok(config)
    }

    /// Make every relative path relative to `base` instead of the working directory.
    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.vocabulary_file);
        resolve(&mut self.custom_dictionary_file);
        resolve(&mut self.transcript_dir);
        for p in [
            &mut self.word_frequency_file,
            &mut self.greetings_file,
            &mut self.keywords_file,
            &mut self.stop_words_file,
            &mut self.corpus,
        ]
        .into_iter()
        .flatten()
        {
            resolve(p);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tops == 0 {
            return Err(ConfigError::Invalid {
                reason: "tops must be at least 1".to_string(),
            });
        }
        if !MEMORY_RANGE.contains(&self.context_memory) {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "context_memory must be between {} and {}, got {}",
                    MEMORY_RANGE.start(),
                    MEMORY_RANGE.end(),
                    self.context_memory
                ),
            });
        }
        if self.search_limit == 0 {
            return Err(ConfigError::Invalid {
                reason: "search_limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn lexicon_paths(&self) -> LexiconPaths {
        LexiconPaths {
            vocabulary: self.vocabulary_file.clone(),
            custom_dictionary: self.custom_dictionary_file.clone(),
            word_frequency: self.word_frequency_file.clone(),
        }
    }

    pub fn engine_options(&self, verbose: bool) -> EngineOptions {
        EngineOptions {
            tops: self.tops,
            verbose,
        }
    }

    /// Configured stop words, or the built-in list.
    pub fn stop_words(&self) -> StopWords {
        match &self.stop_words_file {
            Some(path) => match read_list(path) {
                Some(words) if !words.is_empty() => StopWords::new(words),
                _ => {
                    warn!(path = %path.display(), "no stop words loaded, using defaults");
                    StopWords::default()
                }
            },
            None => StopWords::default(),
        }
    }

    /// Context keywords: the keywords file if set, otherwise the vocabulary.
    pub fn keywords(&self) -> Vec<String> {
        let path = self.keywords_file.as_ref().unwrap_or(&self.vocabulary_file);
        read_list(path).unwrap_or_else(|| {
            warn!(path = %path.display(), "no context keywords loaded");
            Vec::new()
        })
    }

    pub fn greetings(&self) -> Vec<String> {
        load_greetings(self.greetings_file.as_deref())
    }
}

fn read_list(path: &Path) -> Option<Vec<String>> {
    fs::read_to_string(path)
        .map(|text| parse_word_list(&text))
        .ok()
}
