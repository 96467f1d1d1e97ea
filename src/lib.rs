//! Deterministic lexical search over profile facts.
//!
//! Ask "where did you study robotics?" and get back the two or three resume
//! facts that answer it. No embeddings, no index, no network: a corpus of a few
//! dozen passages is scored in full on every query, and every score can be
//! explained by hand.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  build/     │────▶│  types.rs    │────▶│  search/    │◀────│  scoring/   │
//! │ (Profile,   │     │  (Passage)   │     │ (rank,      │     │ (score,     │
//! │ CorpusBuilder)    │              │     │  search)    │     │  explain)   │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!                                                 │                   │
//!                                                 ▼                   ▼
//!                                          ┌─────────────────────────────┐
//!                                          │ tokenize.rs / contracts.rs  │
//!                                          └─────────────────────────────┘
//! ```
//!
//! | Module      | Key Properties                                         |
//! |-------------|--------------------------------------------------------|
//! | `tokenize`  | lowercase, `[a-z0-9]` tokens, order preserved          |
//! | `scoring`   | `(overlap + 1.5 × bigrams) / ln(1 + n)`                |
//! | `search`    | blank query → empty, `score > 0`, stable sort, top K   |
//! | `build`     | fixed section order, unique ids, link precedence       |
//! | `contracts` | debug-mode invariant checks                            |
//!
//! # Usage
//!
//! ```
//! use folio::{build_corpus, search, Profile};
//!
//! let profile: Profile = serde_json::from_str(
//!     r#"{"name": "Ada", "summary": "Computer vision and deep learning engineer"}"#,
//! ).unwrap();
//! let corpus = build_corpus(&profile);
//!
//! let results = search("deep learning", &corpus, 5);
//! assert_eq!(results[0].id, "summary");
//! ```

pub mod build;
pub mod contracts;
mod error;
mod scoring;
mod search;
pub mod testing;
mod tokenize;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use build::{
    build_corpus, load_corpus, load_profile, parse_corpus, validate_corpus, CorpusBuilder,
    CorpusSource, Profile,
};
pub use error::CorpusError;
pub use scoring::ranking::compare_scores;
pub use scoring::{
    bigram_matches, explain, explain_tokens, length_norm, score, score_tokens, unigram_overlap,
    ScoreBreakdown, BIGRAM_BONUS,
};
pub use search::{rank, search, search_default, DEFAULT_LIMIT};
pub use tokenize::{is_token_char, normalize, tokenize};
pub use types::{Passage, ScoredPassage};
