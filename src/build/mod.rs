//! Getting a corpus: from profile data or from a prebuilt passage file.
//!
//! A corpus file is JSON in one of two shapes:
//!
//! ```text
//! [ {"id": "...", "title": "...", "text": "...", "href": "..."}, ... ]   passages, used as-is
//! { "name": "...", "summary": "...", "projects": [...], ... }             profile, built first
//! ```
//!
//! Either way the result is validated before anyone searches it: ids must be
//! non-empty and unique within the snapshot.

pub mod corpus;
pub mod profile;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::CorpusError;
use crate::types::Passage;

pub use corpus::*;
pub use profile::*;

/// What a corpus file contains.
///
/// The shape is picked by the first JSON token: `[` means passages, anything
/// else is read as a profile. Each shape is then parsed on its own, so errors
/// name the field that is actually wrong.
#[derive(Clone, Debug)]
pub enum CorpusSource {
    /// Prebuilt passages (an array)
    Passages(Vec<Passage>),
    /// Structured profile data (an object)
    Profile(Box<Profile>),
}

impl CorpusSource {
    /// Parse either shape from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim_start().starts_with('[') {
            Ok(CorpusSource::Passages(serde_json::from_str(json)?))
        } else {
            Ok(CorpusSource::Profile(Box::new(serde_json::from_str(json)?)))
        }
    }

    /// Resolve to passages, building them from the profile when needed.
    pub fn into_passages(self) -> Vec<Passage> {
        match self {
            CorpusSource::Passages(passages) => passages,
            CorpusSource::Profile(profile) => build_corpus(&profile),
        }
    }
}

/// Parse a corpus from JSON text. `origin` names the source in errors.
pub fn parse_corpus(json: &str, origin: &str) -> Result<Vec<Passage>, CorpusError> {
    let source = CorpusSource::from_json(json).map_err(|e| CorpusError::Parse {
        path: origin.to_string(),
        message: e.to_string(),
    })?;
    let passages = source.into_passages();
    validate_corpus(&passages)?;
    Ok(passages)
}

/// Read, parse and validate a corpus file.
pub fn load_corpus(path: &Path) -> Result<Vec<Passage>, CorpusError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| CorpusError::Io {
        path: display.clone(),
        message: e.to_string(),
    })?;
    parse_corpus(&content, &display)
}

/// Read a profile file without building passages.
pub fn load_profile(path: &Path) -> Result<Profile, CorpusError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| CorpusError::Io {
        path: display.clone(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| CorpusError::Parse {
        path: display,
        message: e.to_string(),
    })
}

/// Check snapshot invariants: every id non-empty, no id used twice.
pub fn validate_corpus(passages: &[Passage]) -> Result<(), CorpusError> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(passages.len());
    for (position, passage) in passages.iter().enumerate() {
        if passage.id.trim().is_empty() {
            return Err(CorpusError::EmptyId { position });
        }
        if let Some(&first) = seen.get(passage.id.as_str()) {
            return Err(CorpusError::DuplicateId {
                id: passage.id.clone(),
                first,
                second: position,
            });
        }
        seen.insert(passage.id.as_str(), position);
    }
    Ok(())
}
