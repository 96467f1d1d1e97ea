// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the tokenizer.
//!
//! Any byte sequence, lossily decoded, must tokenize without panicking into
//! clean `[a-z0-9]` tokens. Multi-byte lowercasing (Turkish İ, German ẞ) is
//! where this tends to go wrong.

#![no_main]

use folio::{is_token_char, normalize, tokenize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    let tokens = tokenize(&input);
    for token in &tokens {
        assert!(!token.is_empty(), "empty token from {:?}", input);
        assert!(
            token.chars().all(is_token_char),
            "token {:?} has a foreign character",
            token
        );
    }

    let normalized = normalize(&input);
    assert_eq!(tokens.join(" "), normalized);
    assert_eq!(normalize(&normalized), normalized, "normalize must be idempotent");
});
