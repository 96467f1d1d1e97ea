// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search.
//!
//! A corpus is just a `Vec<Passage>`. There is no index: the corpus is a few
//! dozen sentences, so every query scores every passage. What matters is that
//! the passages stay put while a search runs, and that their order is
//! meaningful, because ties are broken by it.
//!
//! # Invariants
//!
//! - **Passage**: `id` is unique within one corpus snapshot. It is identity,
//!   never ranking input.
//! - **Passage**: only `text` is scored. `title` and `href` ride along for
//!   display.
//! - **ScoredPassage**: `score > 0` and finite. Zero-score passages never make
//!   it into a ranking.

use serde::{Deserialize, Serialize};

/// One searchable fact.
///
/// Built by [`CorpusBuilder`](crate::build::CorpusBuilder) from profile data,
/// or deserialized directly from a corpus file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passage {
    pub id: String,
    pub title: String,
    /// Empty text is allowed. Such a passage is a placeholder and never ranks.
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Passage {
    pub fn new(id: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text: text.into(),
            href: None,
        }
    }

    /// Attach an outbound link.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Same as [`with_href`](Self::with_href) but for links that may be missing.
    pub fn with_optional_href(mut self, href: Option<String>) -> Self {
        self.href = href;
        self
    }

    /// A placeholder has nothing to match against.
    pub fn is_placeholder(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A passage that survived scoring, with the score that got it there.
///
/// Scores have no fixed scale. Compare them within one ranking, never across
/// queries or corpora.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPassage<'a> {
    pub passage: &'a Passage,
    pub score: f64,
}

impl<'a> ScoredPassage<'a> {
    pub fn new(passage: &'a Passage, score: f64) -> Self {
        Self { passage, score }
    }
}
