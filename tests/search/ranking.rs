//! Result ordering: score first, corpus order for ties.

use folio::{rank, search, Passage};

use super::common::{ids, make_corpus, ranked_ids, sample_corpus};

#[test]
fn test_tie_keeps_corpus_order() {
    // Same text, same score: order must follow the corpus
    let corpus = make_corpus(&[
        ("second", "rust systems programming"),
        ("first", "rust systems programming"),
        ("third", "rust systems programming"),
    ]);
    let results = search("rust", &corpus, 5);
    assert_eq!(ids(&results), vec!["second", "first", "third"]);
}

#[test]
fn test_tie_order_survives_higher_scores_in_between() {
    let corpus = make_corpus(&[
        ("tie-a", "python data pipelines"),
        ("best", "python"),
        ("tie-b", "python data pipelines"),
    ]);
    let results = search("python", &corpus, 5);
    assert_eq!(ids(&results), vec!["best", "tie-a", "tie-b"]);
}

#[test]
fn test_phrase_match_outranks_scattered_words() {
    let corpus = make_corpus(&[
        ("scattered", "vision systems for computer labs"),
        ("phrase", "computer vision systems for labs"),
    ]);
    let results = search("computer vision", &corpus, 5);
    assert_eq!(ids(&results), vec!["phrase", "scattered"]);
}

#[test]
fn test_limit_truncates_after_sorting() {
    let corpus = make_corpus(&[
        ("weak", "rust appears in a long sentence about many other topics"),
        ("strong", "rust"),
        ("medium", "rust tooling"),
    ]);
    let results = search("rust", &corpus, 2);
    assert_eq!(ids(&results), vec!["strong", "medium"]);
}

#[test]
fn test_rank_scores_descend() {
    let corpus = sample_corpus();
    let ranked = rank("rust deep learning robots", &corpus, corpus.len());
    assert!(!ranked.is_empty());
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!(ranked.iter().all(|s| s.score > 0.0));
}

#[test]
fn test_sample_profile_project_query() {
    let corpus = sample_corpus();
    let ranked = rank("depth estimation", &corpus, 5);
    assert_eq!(ranked_ids(&ranked), vec!["project-1"]);
    assert_eq!(
        ranked[0].passage.href.as_deref(),
        Some("https://depthwise.example.com")
    );
}

#[test]
fn test_sample_profile_contact_query() {
    let corpus = sample_corpus();
    let results = search("email", &corpus, 5);
    assert_eq!(ids(&results), vec!["contact"]);
    assert_eq!(results[0].href.as_deref(), Some("https://ada.example.com"));
}

#[test]
fn test_title_is_not_scored() {
    let corpus = vec![Passage::new("p", "Rust Projects", "offline maps for hikers")];
    assert!(search("rust", &corpus, 5).is_empty());
}

#[test]
fn test_href_is_not_scored() {
    let corpus =
        vec![Passage::new("p", "Project", "offline maps").with_href("https://github.com/ada")];
    assert!(search("github", &corpus, 5).is_empty());
}
