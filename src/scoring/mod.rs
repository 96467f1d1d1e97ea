// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how passages get their numbers.
//!
//! Unigram overlap plus a bigram bonus, divided by a log length norm. Small
//! enough to read in one sitting, deterministic enough to explain every
//! ranking after the fact.

mod core;
pub mod ranking;

pub use self::core::*;
