// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query a corpus: tokenize once, score everything, keep the best few.
//!
//! ```text
//! query ──▶ tokenize ──▶ score each passage ──▶ drop score = 0 ──▶ stable sort ──▶ take K
//! ```
//!
//! A blank query returns nothing instead of an arbitrary "everything" ranking.
//! An empty corpus, a query that matches nothing, or `limit == 0` also return
//! nothing. None of these are errors.
//!
//! # Determinism
//!
//! No randomness, no clocks, no hash-order dependence: the same query against
//! the same corpus gives the same list, tie order included.

use crate::contracts::{check_ranking_bounds, check_ranking_sorted, check_score_valid};
use crate::scoring::ranking::compare_scores;
use crate::scoring::score_tokens;
use crate::tokenize::tokenize;
use crate::types::{Passage, ScoredPassage};

/// Number of results the terminal shows.
pub const DEFAULT_LIMIT: usize = 5;

/// Rank passages by relevance to `query`, keeping their scores.
///
/// Passages with score `0` are dropped. Equal scores keep corpus order.
pub fn rank<'a>(query: &str, corpus: &'a [Passage], limit: usize) -> Vec<ScoredPassage<'a>> {
    if query.trim().is_empty() || limit == 0 {
        return Vec::new();
    }

    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredPassage<'a>> = corpus
        .iter()
        .filter_map(|passage| {
            let score = score_tokens(&query_tokens, &passage.text);
            check_score_valid(score);
            (score > 0.0).then(|| ScoredPassage::new(passage, score))
        })
        .collect();

    // sort_by is stable: ties stay in corpus order
    scored.sort_by(compare_scores);
    scored.truncate(limit);

    check_ranking_sorted(&scored);
    check_ranking_bounds(&scored, limit);

    scored
}

/// Top `limit` passages for `query`, best first.
///
/// # Example
///
/// ```
/// use folio::{search, Passage};
///
/// let corpus = vec![
///     Passage::new("a", "Summary", "computer vision and deep learning engineer"),
///     Passage::new("b", "Project", "a web app built with react"),
/// ];
/// let results = search("deep learning", &corpus, 5);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].id, "a");
/// ```
pub fn search(query: &str, corpus: &[Passage], limit: usize) -> Vec<Passage> {
    rank(query, corpus, limit)
        .into_iter()
        .map(|scored| scored.passage.clone())
        .collect()
}

/// [`search`] with [`DEFAULT_LIMIT`].
pub fn search_default(query: &str, corpus: &[Passage]) -> Vec<Passage> {
    search(query, corpus, DEFAULT_LIMIT)
}
