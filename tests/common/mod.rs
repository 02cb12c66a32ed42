//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

// Re-export canonical test utilities from retort::testing
pub use retort::testing::{
    sample_chatbot, sample_engine, sample_lexicon, sample_normalizer, sample_store,
    SAMPLE_CORPUS_YAML, SAMPLE_PAIRS,
};

pub const VOCABULARY: &str = "\
# product words
gateway
firmware
update
reset
password
default
module
configure
support
";

pub const CUSTOM_DICTIONARY: &str = "\
# misspelling,correction
wifi,WiFi
poe,PoE
gw,gateway
broken line without comma
a,b,c
";

pub const WORD_FREQUENCY: &str = "\
the 900
how 400
do 380
does 200
i 800
it 650
is 700
my 300
what 350
";

/// A deployment laid out on disk: tables, corpus directory and config file.
pub struct Deployment {
    pub dir: TempDir,
    pub config: PathBuf,
}

impl Deployment {
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Write every table plus `retort.yml` (with relative paths) into a temp dir.
pub fn deployment(extra_config: &str) -> Deployment {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "vocabulary.txt", VOCABULARY);
    write(dir.path(), "custom_dictionary.txt", CUSTOM_DICTIONARY);
    write(dir.path(), "word_frequency.txt", WORD_FREQUENCY);
    write(dir.path(), "greetings.txt", "hi\nhello\nmoin\n");
    fs::create_dir(dir.path().join("corpus")).unwrap();
    write(&dir.path().join("corpus"), "gateway.yml", SAMPLE_CORPUS_YAML);

    let config = write(
        dir.path(),
        "retort.yml",
        &format!(
            "vocabulary_file: vocabulary.txt\n\
             custom_dictionary_file: custom_dictionary.txt\n\
             word_frequency_file: word_frequency.txt\n\
             greetings_file: greetings.txt\n\
             corpus: corpus\n\
             {extra_config}"
        ),
    );
    Deployment { dir, config }
}

pub fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

/// Assert the output contract of a ranking call.
pub fn assert_well_formed(answers: &[retort::Answer], tops: usize) {
    assert!(answers.len() <= tops, "{} answers for tops = {}", answers.len(), tops);
    for answer in answers {
        assert!(
            (0.0..=1.0).contains(&answer.confidence),
            "confidence {} out of range",
            answer.confidence
        );
    }
    for pair in answers.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence, "answers not sorted");
    }
}
