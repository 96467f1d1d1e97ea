// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search over arbitrary queries and corpora.
//!
//! The ranker must never panic, never exceed its limit, never return a
//! zero-score passage, and always order results by descending score.

#![no_main]

use arbitrary::Arbitrary;
use folio::{rank, score, Passage};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    texts: Vec<String>,
    limit: u8,
}

fuzz_target!(|input: Input| {
    // Cap sizes to avoid timeouts
    let query: String = input.query.chars().take(200).collect();
    let corpus: Vec<Passage> = input
        .texts
        .into_iter()
        .take(64)
        .enumerate()
        .map(|(i, text)| {
            let text: String = text.chars().take(2000).collect();
            Passage::new(format!("p{}", i), format!("Passage {}", i), text)
        })
        .collect();
    let limit = input.limit as usize;

    let ranked = rank(&query, &corpus, limit);

    assert!(ranked.len() <= limit);
    if query.trim().is_empty() {
        assert!(ranked.is_empty(), "blank query returned results");
    }

    for result in &ranked {
        assert!(result.score.is_finite() && result.score > 0.0);
        assert_eq!(result.score, score(&query, &result.passage.text));
    }

    for pair in ranked.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "results out of order: {} before {}",
            pair[0].score,
            pair[1].score
        );
    }

    // Same input, same output
    let again = rank(&query, &corpus, limit);
    let ids: Vec<&str> = ranked.iter().map(|s| s.passage.id.as_str()).collect();
    let again_ids: Vec<&str> = again.iter().map(|s| s.passage.id.as_str()).collect();
    assert_eq!(ids, again_ids);
});
