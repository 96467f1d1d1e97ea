// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind passage relevance.
//!
//! ```text
//! score = (overlap + 1.5 × bigram_matches) / ln(1 + |text tokens|)
//! ```
//!
//! - **overlap** counts query tokens found anywhere in the passage. A query word
//!   repeated twice counts twice.
//! - **bigram_matches** counts adjacent query pairs that also appear adjacent,
//!   in the same order, somewhere in the passage. Each query position counts at
//!   most once, however many times the pair shows up in the text.
//! - **norm** is logarithmic in passage length, so a long paragraph can't win
//!   on incidental overlap alone, and a one-word passage still divides by
//!   `ln 2`, never by zero.
//!
//! This is not BM25 or TF-IDF. It is a hand-tuned heuristic, and the constants
//! below pin its rankings. Changing them reorders results for every existing
//! corpus.
//!
//! # Worked example
//!
//! Text "deep learning models for vision" has 5 tokens, so `norm = ln 6`.
//!
//! | Query           | overlap | bigrams | score                 |
//! |-----------------|---------|---------|-----------------------|
//! | `deep learning` | 2       | 1       | `3.5 / ln 6 ≈ 1.953`  |
//! | `learning deep` | 2       | 0       | `2.0 / ln 6 ≈ 1.116`  |

use std::collections::HashSet;

use crate::tokenize::tokenize;

/// Credit for each adjacent query pair found adjacent in the passage.
pub const BIGRAM_BONUS: f64 = 1.5;

/// Everything that went into a score, for explaining a ranking.
///
/// All fields are zero when the query or the text tokenizes to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreBreakdown {
    /// Query tokens present in the passage (with repetition).
    pub overlap: usize,
    /// Query bigram positions that matched an adjacent pair in the passage.
    pub bigram_matches: usize,
    /// `bigram_matches × BIGRAM_BONUS`.
    pub bigram_bonus: f64,
    /// `ln(1 + text token count)`.
    pub norm: f64,
    /// `(overlap + bigram_bonus) / norm`.
    pub score: f64,
}

impl ScoreBreakdown {
    /// True when this passage would survive the ranker's `score > 0` filter.
    pub fn is_match(&self) -> bool {
        self.score > 0.0
    }
}

/// Length normalization: `ln(1 + n)`.
///
/// Written as `(1 + n).ln()` rather than `ln_1p` so rankings match the
/// browser build bit for bit.
#[inline]
pub fn length_norm(token_count: usize) -> f64 {
    (1.0 + token_count as f64).ln()
}

/// How many query tokens appear in the passage's token set.
pub fn unigram_overlap(query_tokens: &[String], text_set: &HashSet<&str>) -> usize {
    query_tokens
        .iter()
        .filter(|token| text_set.contains(token.as_str()))
        .count()
}

/// How many adjacent query pairs occur adjacently, in order, in the text.
///
/// The scan for each query pair stops at its first hit, so a phrase repeated
/// five times in a passage is worth the same as one occurrence.
pub fn bigram_matches(query_tokens: &[String], text_tokens: &[String]) -> usize {
    query_tokens
        .windows(2)
        .filter(|query_pair| {
            text_tokens
                .windows(2)
                .any(|text_pair| text_pair[0] == query_pair[0] && text_pair[1] == query_pair[1])
        })
        .count()
}

/// Score pre-tokenized query tokens against raw passage text, keeping every
/// intermediate value.
pub fn explain_tokens(query_tokens: &[String], text: &str) -> ScoreBreakdown {
    if query_tokens.is_empty() {
        return ScoreBreakdown::default();
    }

    let text_tokens = tokenize(text);
    if text_tokens.is_empty() {
        return ScoreBreakdown::default();
    }

    let text_set: HashSet<&str> = text_tokens.iter().map(String::as_str).collect();

    let overlap = unigram_overlap(query_tokens, &text_set);
    let bigram_matches = bigram_matches(query_tokens, &text_tokens);
    let bigram_bonus = bigram_matches as f64 * BIGRAM_BONUS;
    let norm = length_norm(text_tokens.len());

    ScoreBreakdown {
        overlap,
        bigram_matches,
        bigram_bonus,
        norm,
        score: (overlap as f64 + bigram_bonus) / norm,
    }
}

/// Score a raw query against raw passage text, keeping every intermediate value.
pub fn explain(query: &str, text: &str) -> ScoreBreakdown {
    explain_tokens(&tokenize(query), text)
}

/// Relevance of `text` to pre-tokenized `query_tokens`.
///
/// The ranker tokenizes the query once and calls this per passage.
pub fn score_tokens(query_tokens: &[String], text: &str) -> f64 {
    explain_tokens(query_tokens, text).score
}

/// Relevance of `text` to `query`. Zero means "no match".
pub fn score(query: &str, text: &str) -> f64 {
    explain(query, text).score
}
