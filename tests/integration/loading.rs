//! Loading tables, corpora and configuration from disk.

use std::fs;

use retort::{
    Config, ConfigError, CorpusError, Lexicon, LexiconError, LexiconPaths, MemoryStorage,
    StorageAdapter, StopWords,
};

use crate::common::{deployment, write, CUSTOM_DICTIONARY, VOCABULARY};

#[test]
fn lexicon_loads_every_table() {
    let d = deployment("");
    let config = Config::load(&d.config).unwrap();
    let lexicon = Lexicon::from_files(&config.lexicon_paths()).unwrap();

    assert_eq!(lexicon.vocabulary_len(), 9);
    // "broken line without comma" and "a,b,c" are skipped
    assert_eq!(lexicon.custom_len(), 3);
    assert_eq!(lexicon.frequency("the"), Some(900));
    assert_eq!(lexicon.custom_term("poe"), Some("PoE"));
}

#[test]
fn missing_frequency_file_degrades_to_an_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let paths = LexiconPaths {
        vocabulary: write(dir.path(), "v.txt", VOCABULARY),
        custom_dictionary: write(dir.path(), "c.txt", CUSTOM_DICTIONARY),
        word_frequency: Some(dir.path().join("missing.txt")),
    };
    let lexicon = Lexicon::from_files(&paths).unwrap();
    assert_eq!(lexicon.frequency_len(), 0);
    assert_eq!(lexicon.vocabulary_len(), 9);
}

#[test]
fn missing_vocabulary_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let paths = LexiconPaths {
        vocabulary: dir.path().join("missing.txt"),
        custom_dictionary: write(dir.path(), "c.txt", CUSTOM_DICTIONARY),
        word_frequency: None,
    };
    let err = Lexicon::from_files(&paths).unwrap_err();
    let LexiconError::Read { kind, .. } = err;
    assert_eq!(kind, "vocabulary");
}

#[test]
fn missing_custom_dictionary_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let paths = LexiconPaths {
        vocabulary: write(dir.path(), "v.txt", VOCABULARY),
        custom_dictionary: dir.path().join("missing.txt"),
        word_frequency: None,
    };
    assert!(Lexicon::from_files(&paths)
        .unwrap_err()
        .to_string()
        .contains("custom dictionary"));
}

#[test]
fn corpus_directory_trains_the_store() {
    let d = deployment("");
    fs::write(
        d.path("corpus").join("extra.yaml"),
        "conversations:\n  - - What is PoE?\n    - Power over Ethernet.\n",
    )
    .unwrap();

    let store = MemoryStorage::from_path(&d.path("corpus"), StopWords::default(), 10).unwrap();
    assert_eq!(store.len(), 4);
    assert!(store.find("what is poe?").is_some());
    assert!(store.find("How do I reset the gateway?").is_some());
}

#[test]
fn missing_corpus_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MemoryStorage::from_path(&dir.path().join("nope"), StopWords::default(), 10)
        .unwrap_err();
    assert!(matches!(err, CorpusError::Read { .. }));
}

#[test]
fn config_validation_runs_on_load() {
    let d = deployment("context_memory: 1\n");
    assert!(matches!(
        Config::load(&d.config),
        Err(ConfigError::Invalid { .. })
    ));
}

#[test]
fn config_paths_resolve_next_to_the_config_file() {
    let d = deployment("tops: 2\n");
    let config = Config::load(&d.config).unwrap();
    assert_eq!(config.tops, 2);
    assert_eq!(config.corpus, Some(d.path("corpus")));
    assert_eq!(config.greetings(), vec!["hi", "hello", "moin"]);
}
