// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for corpus JSON parsing.
//!
//! Malformed JSON must come back as an error, never a panic. Anything that
//! parses must have unique, non-empty ids.

#![no_main]

use folio::{parse_corpus, validate_corpus};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(corpus) = parse_corpus(json, "fuzz") {
        assert!(validate_corpus(&corpus).is_ok());
    }
});
