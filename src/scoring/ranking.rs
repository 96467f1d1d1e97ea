// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering.
//!
//! Higher score first. That's it. There's no secondary key: equal scores keep
//! corpus order, which only works because the ranker uses a stable sort.
//! Corpus order is meaningful (summary and contact are built first), so a
//! tie between "Summary" and "Project: X" should go to the summary.

use crate::types::ScoredPassage;
use std::cmp::Ordering;

/// Compare two scored passages for ranking (descending by score).
///
/// Returns `Equal` for equal scores so that `sort_by` leaves them in input
/// order. Scores are always finite, but a NaN would also compare `Equal`
/// rather than panic.
///
/// # Example
///
/// ```ignore
/// scored.sort_by(compare_scores); // stable: ties keep corpus order
/// ```
pub fn compare_scores(a: &ScoredPassage<'_>, b: &ScoredPassage<'_>) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}
