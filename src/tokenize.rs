//! Query and passage tokenization.
//!
//! Both sides of a comparison go through the same pipeline, so "Computer-Vision"
//! in a query meets "computer vision" in a passage. Anything that isn't an
//! ASCII letter or digit becomes a word break. That throws away accented
//! letters and non-Latin scripts entirely, which is fine for an English resume
//! and deliberately not a multilingual tokenizer.

/// Normalize a string for matching: lowercase, punctuation to spaces, collapse
/// whitespace, trim.
///
/// - "Deep-Learning (CV)" → "deep learning cv"
/// - "  C++ / Rust!  " → "c rust"
/// - "!!!" → ""
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .map(|c| if is_token_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split normalized text into tokens, preserving source order.
///
/// Order matters: the scorer walks adjacent pairs for bigram matches.
pub fn tokenize(value: &str) -> Vec<String> {
    normalize(value)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Characters that survive normalization (after lowercasing).
#[inline]
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}
