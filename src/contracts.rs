//! Runtime contracts for scoring and ranking.
//!
//! Debug-mode assertions that catch a broken scorer or ranker the moment it
//! misbehaves instead of three layers up in a UI. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail loudly in tests and debug builds
//!
//! | Contract Function       | Property                                         |
//! |-------------------------|--------------------------------------------------|
//! | `check_score_valid`     | score is finite and `>= 0`                       |
//! | `check_ranking_sorted`  | ranked scores are non-increasing                 |
//! | `check_ranking_bounds`  | ranking length `<= limit`, every score `> 0`     |

use crate::types::ScoredPassage;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The bigram bonus must reward phrase matches, and the length norm floor
/// (`ln 2`, one-token passage) must stay positive so scores are always finite.
const _: () = {
    const BIGRAM_BONUS: f64 = crate::scoring::BIGRAM_BONUS;
    assert!(BIGRAM_BONUS > 0.0);

    // ln 2 ≈ 0.6931, the smallest norm a rankable passage can have
    const NORM_FLOOR: f64 = std::f64::consts::LN_2;
    assert!(NORM_FLOOR > 0.0);
};

// ============================================================================
// SCORE CONTRACTS
// ============================================================================

/// Check that a score is usable for ranking.
///
/// # Panics (debug builds only)
/// Panics if the score is NaN, infinite or negative.
#[inline]
pub fn check_score_valid(score: f64) {
    debug_assert!(
        score.is_finite(),
        "Contract violation: score must be finite, got {}",
        score
    );
    debug_assert!(
        score >= 0.0,
        "Contract violation: score must be non-negative, got {}",
        score
    );
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that ranked results are in descending score order.
///
/// # Panics (debug builds only)
/// Panics at the first position where a score increases.
#[inline]
pub fn check_ranking_sorted(results: &[ScoredPassage<'_>]) {
    for (i, pair) in results.windows(2).enumerate() {
        debug_assert!(
            pair[0].score >= pair[1].score,
            "Contract violation: ranking not sorted at position {} ({} < {})",
            i,
            pair[0].score,
            pair[1].score
        );
    }
}

/// Check the ranker's output filter: within the limit, and every entry matched.
///
/// # Panics (debug builds only)
/// Panics if there are more results than `limit` or any score is not positive.
#[inline]
pub fn check_ranking_bounds(results: &[ScoredPassage<'_>], limit: usize) {
    debug_assert!(
        results.len() <= limit,
        "Contract violation: {} results exceed limit {}",
        results.len(),
        limit
    );
    for result in results {
        check_score_valid(result.score);
        debug_assert!(
            result.score > 0.0,
            "Contract violation: zero-score passage '{}' in ranking",
            result.passage.id
        );
    }
}
