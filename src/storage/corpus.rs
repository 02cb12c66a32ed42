// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Conversation corpora and training a [`MemoryStorage`] from them.
//!
//! A corpus file lists conversations; every adjacent pair of lines inside a
//! conversation is one (question, response) example:
//!
//! ```yaml
//! categories:
//!   - gateway
//! conversations:
//!   - - How do I reset the gateway?
//!     - Hold the reset button for ten seconds.
//!     - Does that erase the configuration?
//!     - Yes, it restores factory settings.
//! ```
//!
//! yields three examples: (q1, r1), (r1, q2), (q2, r2). JSON files parse too,
//! since JSON is YAML.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::MemoryStorage;
use crate::error::CorpusError;
use crate::topics::StopWords;

/// File extensions picked up when a corpus path is a directory.
pub const CORPUS_EXTENSIONS: &[&str] = &["yml", "yaml", "json"];

/// One corpus file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub conversations: Vec<Vec<String>>,
}

impl Corpus {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Read and parse one corpus file.
    pub fn from_file(path: &Path) -> Result<Self, CorpusError> {
        let text = fs::read_to_string(path).map_err(|source| CorpusError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|source| CorpusError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Every adjacent (question, response) pair across all conversations.
    pub fn examples(&self) -> impl Iterator<Item = (&str, &str)> {
        self.conversations
            .iter()
            .flat_map(|conversation| conversation.windows(2))
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

/// Corpus files under `path`: the path itself if it is a file, otherwise the
/// matching files in the directory (not recursive), sorted by name.
pub fn corpus_files(path: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let read_err = |source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(path).map_err(read_err)? {
        let file = entry.map_err(read_err)?.path();
        let matches = file
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| CORPUS_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
        if matches && file.is_file() {
            files.push(file);
        }
    }

    if files.is_empty() {
        return Err(CorpusError::Empty {
            path: path.to_path_buf(),
        });
    }
    files.sort();
    Ok(files)
}

impl MemoryStorage {
    /// Learn every example in `corpus`; returns how many were recorded.
    pub fn train(&mut self, corpus: &Corpus) -> usize {
        corpus
            .examples()
            .filter(|(question, response)| self.learn(question, response))
            .count()
    }

    /// Load and train on a corpus file or directory.
    pub fn from_path(
        path: &Path,
        stop_words: StopWords,
        search_limit: usize,
    ) -> Result<Self, CorpusError> {
        let mut store = Self::new(stop_words, search_limit);
        for file in corpus_files(path)? {
            let corpus = Corpus::from_file(&file)?;
            let learned = store.train(&corpus);
            debug!(file = %file.display(), learned, "corpus file trained");
        }
        info!(questions = store.len(), path = %path.display(), "corpus loaded");
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageAdapter;

    const SAMPLE: &str = r#"
categories:
  - gateway
conversations:
  - - How do I reset the gateway?
    - Hold the reset button for ten seconds.
    - Does that erase the configuration?
    - Yes, it restores factory settings.
  - - Hello
"#;

    #[test]
    fn examples_are_adjacent_pairs() {
        let corpus = Corpus::from_yaml(SAMPLE).unwrap();
        assert_eq!(corpus.categories, vec!["gateway"]);
        let examples: Vec<_> = corpus.examples().collect();
        assert_eq!(examples.len(), 3);
        assert_eq!(
            examples[0],
            ("How do I reset the gateway?", "Hold the reset button for ten seconds.")
        );
    }

    #[test]
    fn json_corpus_parses() {
        let corpus = Corpus::from_yaml(r#"{"conversations": [["hi there", "hello"]]}"#).unwrap();
        assert_eq!(corpus.examples().count(), 1);
        assert!(corpus.categories.is_empty());
    }

    #[test]
    fn from_path_trains_every_file_in_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.yml"), SAMPLE).unwrap();
        fs::write(
            dir.path().join("b.json"),
            r#"{"conversations": [["What is PoE?", "Power over Ethernet."]]}"#,
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let store = MemoryStorage::from_path(dir.path(), StopWords::default(), 10).unwrap();
        assert_eq!(store.len(), 4);
        assert!(store.find("what is poe?").is_some());
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = corpus_files(dir.path()).unwrap_err();
        assert!(matches!(err, CorpusError::Empty { .. }));
    }

    #[test]
    fn malformed_corpus_reports_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yml");
        fs::write(&path, "conversations: [[").unwrap();
        let err = Corpus::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("bad.yml"));
    }
}
