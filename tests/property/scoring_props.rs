//! Scoring properties.
//!
//! - Scores are finite and non-negative
//! - Empty query or empty text scores exactly zero
//! - No shared token means zero
//! - The breakdown adds up to the score
//! - Adding unrelated words to a passage never raises its score

use folio::{explain, length_norm, score, tokenize, BIGRAM_BONUS};
use proptest::prelude::*;
use std::collections::HashSet;

use super::{query_strategy, text_strategy, word_strategy};

/// Oracle: the scoring formula written out directly from its definition.
fn oracle_score(query: &str, text: &str) -> f64 {
    let q = tokenize(query);
    let t = tokenize(text);
    if q.is_empty() || t.is_empty() {
        return 0.0;
    }
    let set: HashSet<&String> = t.iter().collect();
    let overlap = q.iter().filter(|w| set.contains(w)).count() as f64;
    let mut bonus = 0.0;
    for i in 0..q.len() - 1 {
        for j in 0..t.len() - 1 {
            if q[i] == t[j] && q[i + 1] == t[j + 1] {
                bonus += 1.5;
                break;
            }
        }
    }
    (overlap + bonus) / (1.0 + t.len() as f64).ln()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: score equals the oracle, bit for bit.
    #[test]
    fn prop_score_matches_oracle(query in query_strategy(), text in text_strategy()) {
        prop_assert_eq!(score(&query, &text).to_bits(), oracle_score(&query, &text).to_bits());
    }

    /// Property: scores are finite and non-negative for any input.
    #[test]
    fn prop_score_finite_non_negative(query in "\\PC{0,40}", text in "\\PC{0,80}") {
        let s = score(&query, &text);
        prop_assert!(s.is_finite());
        prop_assert!(s >= 0.0);
    }

    /// Property: an empty side always scores zero.
    #[test]
    fn prop_empty_side_scores_zero(text in text_strategy(), blank in "[ \\t\\n.,!?-]{0,10}") {
        prop_assert_eq!(score(&blank, &text), 0.0);
        prop_assert_eq!(score(&text, &blank), 0.0);
    }

    /// Property: no shared tokens means score zero.
    #[test]
    fn prop_disjoint_scores_zero(
        query in prop::collection::vec("[a-m]{2,5}", 1..5),
        text in prop::collection::vec("[n-z]{2,5}", 1..10),
    ) {
        prop_assert_eq!(score(&query.join(" "), &text.join(" ")), 0.0);
    }

    /// Property: the breakdown components reproduce the score.
    #[test]
    fn prop_breakdown_consistent(query in query_strategy(), text in text_strategy()) {
        let b = explain(&query, &text);
        if b.norm > 0.0 {
            prop_assert_eq!(b.bigram_bonus, b.bigram_matches as f64 * BIGRAM_BONUS);
            prop_assert_eq!(b.norm, length_norm(tokenize(&text).len()));
            prop_assert_eq!(b.score, (b.overlap as f64 + b.bigram_bonus) / b.norm);
            prop_assert!(b.overlap <= tokenize(&query).len());
            prop_assert!(b.bigram_matches <= tokenize(&query).len().saturating_sub(1));
        } else {
            prop_assert_eq!(b.score, 0.0);
        }
    }

    /// Property: padding a passage with words absent from the query lowers or
    /// keeps its score, never raises it.
    #[test]
    fn prop_padding_never_helps(
        query in prop::collection::vec(word_strategy(), 1..4),
        text in prop::collection::vec(word_strategy(), 1..8),
        padding in 1usize..20,
    ) {
        let query = query.join(" ");
        let text = text.join(" ");
        let padded = format!("{} {}", text, "zzzzzzz ".repeat(padding));
        prop_assume!(!tokenize(&query).iter().any(|w| w == "zzzzzzz"));
        prop_assert!(score(&query, &padded) <= score(&query, &text));
    }

    /// Property: length norm is strictly increasing and at least ln 2 for n >= 1.
    #[test]
    fn prop_length_norm_monotonic(n in 1usize..10_000) {
        prop_assert!(length_norm(n) >= std::f64::consts::LN_2 - 1e-12);
        prop_assert!(length_norm(n + 1) > length_norm(n));
    }
}

#[cfg(test)]
mod specific_values {
    use super::*;

    #[test]
    fn test_oracle_agrees_on_reference_values() {
        let text = "deep learning models for vision";
        assert!((oracle_score("deep learning", text) - 3.5 / 6f64.ln()).abs() < 1e-12);
        assert!((oracle_score("learning deep", text) - 2.0 / 6f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_bigram_bonus_constant() {
        assert_eq!(BIGRAM_BONUS, 1.5);
    }
}
