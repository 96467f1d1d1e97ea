// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors from loading and validating a corpus.
//!
//! Searching never fails. Everything that can go wrong happens before the
//! first query: the file is missing, the JSON is malformed, or two passages
//! claim the same id.

use std::fmt;

/// Why a corpus couldn't be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    /// The file could not be read.
    Io { path: String, message: String },
    /// The file is not a passage array or a profile object.
    Parse { path: String, message: String },
    /// A passage has an empty id.
    EmptyId { position: usize },
    /// Two passages share an id within one snapshot.
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::Io { path, message } => {
                write!(f, "Failed to read {}: {}", path, message)
            }
            CorpusError::Parse { path, message } => {
                write!(f, "Invalid corpus JSON in {}: {}", path, message)
            }
            CorpusError::EmptyId { position } => {
                write!(f, "passage at position {} has an empty id", position)
            }
            CorpusError::DuplicateId { id, first, second } => write!(
                f,
                "duplicate passage id '{}' at positions {} and {}",
                id, first, second
            ),
        }
    }
}

impl std::error::Error for CorpusError {}
