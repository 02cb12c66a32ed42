// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for input correction.
//!
//! Arbitrary text (any Unicode, any whitespace) must come back with the same
//! number of tokens, and correcting it twice must change nothing further.

#![no_main]

use libfuzzer_sys::fuzz_target;
use retort::testing::sample_normalizer;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    // Cap by characters to avoid timeouts without splitting a code point
    let input: String = input.chars().take(200).collect();

    let normalizer = sample_normalizer();
    let once = normalizer.correct_input(&input);

    assert_eq!(
        once.split_whitespace().count(),
        input.split_whitespace().count(),
        "token count changed for {:?}",
        input
    );
    assert_eq!(normalizer.correct_input(&once), once, "not idempotent for {:?}", input);
});
