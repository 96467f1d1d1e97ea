//! Tests for loading corpus files from disk.

use std::io::Write;

use folio::{load_corpus, load_profile, search, CorpusError};
use tempfile::NamedTempFile;

use super::common::{ids, sample_profile};

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_load_passage_array() {
    let file = write_temp(
        r#"[
            {"id": "a", "title": "Summary", "text": "computer vision and deep learning engineer"},
            {"id": "b", "title": "Project", "text": "a web app built with react", "href": "https://example.com"}
        ]"#,
    );
    let corpus = load_corpus(file.path()).unwrap();
    assert_eq!(ids(&corpus), vec!["a", "b"]);
    assert_eq!(ids(&search("deep learning", &corpus, 5)), vec!["a"]);
}

#[test]
fn test_load_profile_builds_corpus() {
    let json = serde_json::to_string(&sample_profile()).unwrap();
    let file = write_temp(&json);

    let corpus = load_corpus(file.path()).unwrap();
    assert_eq!(corpus.len(), 12);
    assert_eq!(corpus[0].id, "summary");

    let profile = load_profile(file.path()).unwrap();
    assert_eq!(profile, sample_profile());
}

#[test]
fn test_load_empty_profile_object() {
    let file = write_temp("{}");
    let corpus = load_corpus(file.path()).unwrap();
    assert_eq!(ids(&corpus), vec!["summary", "contact", "interests"]);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let err = load_corpus(&missing).unwrap_err();
    assert!(matches!(err, CorpusError::Io { .. }));
    assert!(err.to_string().starts_with("Failed to read"));
}

#[test]
fn test_load_invalid_json() {
    let file = write_temp("{ not json");
    let err = load_corpus(file.path()).unwrap_err();
    assert!(matches!(err, CorpusError::Parse { .. }));
}

#[test]
fn test_load_rejects_duplicate_ids() {
    let file = write_temp(
        r#"[
            {"id": "a", "title": "One", "text": "rust"},
            {"id": "a", "title": "Two", "text": "python"}
        ]"#,
    );
    let err = load_corpus(file.path()).unwrap_err();
    assert_eq!(
        err,
        CorpusError::DuplicateId {
            id: "a".to_string(),
            first: 0,
            second: 1,
        }
    );
}

#[test]
fn test_load_passage_without_text_is_placeholder() {
    let file = write_temp(r#"[{"id": "summary", "title": "Summary"}]"#);
    let corpus = load_corpus(file.path()).unwrap();
    assert!(corpus[0].is_placeholder());
    assert!(search("summary", &corpus, 5).is_empty());
}

#[test]
fn test_load_passage_missing_title_names_the_field() {
    let file = write_temp(r#"[{"id": "a", "text": "rust"}]"#);
    let err = load_corpus(file.path()).unwrap_err();
    assert!(matches!(err, CorpusError::Parse { .. }));
    assert!(err.to_string().contains("missing field `title`"), "{}", err);
}

#[test]
fn test_load_profile_missing_degree_names_the_field() {
    let file = write_temp(r#"{"education": [{"institution": "ETH Zurich"}]}"#);
    let err = load_corpus(file.path()).unwrap_err();
    assert!(err.to_string().contains("missing field `degree`"), "{}", err);
}

#[test]
fn test_load_rejects_wrongly_shaped_object() {
    let file = write_temp(r#"{"passages": [{"id": "a", "title": "A", "text": "rust"}]}"#);
    let err = load_corpus(file.path()).unwrap_err();
    assert!(matches!(err, CorpusError::Parse { .. }));
    assert!(err.to_string().contains("unknown field `passages`"), "{}", err);
}
