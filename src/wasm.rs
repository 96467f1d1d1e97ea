// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the browser terminal.
//!
//! The page builds a `FolioIndex` once from its profile data, then calls
//! `search` on every debounced keystroke. Results come back as plain objects
//! matching the terminal's `Passage` interface.

use crate::build::{build_corpus, parse_corpus, validate_corpus, Profile};
use crate::search::{rank, DEFAULT_LIMIT};
use crate::types::Passage;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Search result output for TypeScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultOutput<'a> {
    id: &'a str,
    title: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<&'a str>,
    score: f64,
}

/// An immutable corpus, searchable from JavaScript.
#[wasm_bindgen]
pub struct FolioIndex {
    corpus: Vec<Passage>,
}

#[wasm_bindgen]
impl FolioIndex {
    /// Load a corpus from JSON (a passage array or a profile object).
    #[wasm_bindgen(constructor)]
    pub fn new(corpus_json: &str) -> Result<FolioIndex, JsValue> {
        let corpus =
            parse_corpus(corpus_json, "corpus").map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(FolioIndex { corpus })
    }

    /// Build the corpus from an already-parsed profile object.
    #[wasm_bindgen(js_name = fromProfile)]
    pub fn from_profile(profile: JsValue) -> Result<FolioIndex, JsValue> {
        let profile: Profile = from_value(profile)?;
        let corpus = build_corpus(&profile);
        validate_corpus(&corpus).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(FolioIndex { corpus })
    }

    /// Number of passages, placeholders included.
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Top results for `query`. `limit` defaults to 5.
    pub fn search(&self, query: &str, limit: Option<usize>) -> Result<JsValue, JsValue> {
        Ok(to_value(&self.results(query, limit))?)
    }
}

impl FolioIndex {
    fn results(&self, query: &str, limit: Option<usize>) -> Vec<SearchResultOutput<'_>> {
        rank(query, &self.corpus, limit.unwrap_or(DEFAULT_LIMIT))
            .into_iter()
            .map(|scored| SearchResultOutput {
                id: &scored.passage.id,
                title: &scored.passage.title,
                text: &scored.passage.text,
                href: scored.passage.href.as_deref(),
                score: scored.score,
            })
            .collect()
    }
}
