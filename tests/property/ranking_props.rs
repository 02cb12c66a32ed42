//! Output contract of the ranking engine over arbitrary storage contents.

use std::collections::HashMap;

use proptest::prelude::*;
use retort::{EngineOptions, RankingEngine, ResponseCounts, StorageAdapter};

use crate::common::assert_well_formed;

/// Storage whose exact matches and candidates are generated.
#[derive(Debug)]
struct Generated {
    exact: HashMap<String, ResponseCounts>,
    candidates: Vec<String>,
}

impl StorageAdapter for Generated {
    fn find(&self, query: &str) -> Option<ResponseCounts> {
        self.exact.get(query).cloned()
    }

    fn search(&self, _query: &str) -> Vec<String> {
        self.candidates.clone()
    }
}

fn counts() -> impl Strategy<Value = ResponseCounts> {
    prop::collection::hash_map("[A-D][a-z]{0,3}", 0u32..6, 0..6)
}

fn storage() -> impl Strategy<Value = Generated> {
    prop::collection::hash_map("[a-z]{2,6}( [a-z]{2,6}){0,3}", counts(), 0..8).prop_map(|exact| {
        let candidates = exact.keys().cloned().collect();
        Generated { exact, candidates }
    })
}

proptest! {
    #[test]
    fn fuzzy_results_are_well_formed(
        storage in storage(),
        query in "[a-z]{2,6}( [a-z]{2,6}){0,3}",
        tops in 1usize..6,
    ) {
        prop_assume!(!storage.exact.contains_key(&query));
        let candidate_count = storage.candidates.len();
        let answers = RankingEngine::new(storage, EngineOptions { tops, verbose: false }).process(&query);
        assert_well_formed(&answers, tops);
        prop_assert!(answers.len() <= candidate_count.min(tops));
    }

    #[test]
    fn exact_results_have_min_len_and_full_top(counts in counts(), tops in 1usize..6) {
        let nonzero = counts.values().any(|&c| c > 0);
        let n = counts.len();
        let storage = Generated {
            exact: HashMap::from([("q".to_string(), counts)]),
            candidates: Vec::new(),
        };
        let answers = RankingEngine::new(storage, EngineOptions { tops, verbose: false }).process("q");
        assert_well_formed(&answers, tops);
        if nonzero {
            prop_assert_eq!(answers.len(), n.min(tops));
            prop_assert_eq!(answers[0].confidence, 1.0);
        } else {
            prop_assert!(answers.is_empty());
        }
    }
}
