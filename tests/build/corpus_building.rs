//! Tests for building passages from profile data.

use std::collections::HashSet;

use folio::build::{Contact, Project};
use folio::{build_corpus, validate_corpus, CorpusBuilder, Profile};

use super::common::{ids, sample_profile};

#[test]
fn test_sections_in_fixed_order() {
    let corpus = build_corpus(&sample_profile());
    assert_eq!(
        ids(&corpus),
        vec![
            "summary",
            "contact",
            "interests",
            "education-0",
            "certification-0",
            "skills-0",
            "skills-1",
            "project-0",
            "project-1",
            "experience-0",
            "honor-0",
            "leadership-0",
        ]
    );
}

#[test]
fn test_ids_unique_and_valid() {
    let corpus = build_corpus(&sample_profile());
    let unique: HashSet<&str> = corpus.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(unique.len(), corpus.len());
    assert!(validate_corpus(&corpus).is_ok());
}

#[test]
fn test_builder_matches_shorthand() {
    let profile = sample_profile();
    assert_eq!(CorpusBuilder::new(&profile).build(), build_corpus(&profile));
}

#[test]
fn test_builder_is_pure() {
    let profile = sample_profile();
    let before = profile.clone();
    let first = build_corpus(&profile);
    let second = build_corpus(&profile);
    assert_eq!(first, second);
    assert_eq!(profile, before);
}

#[test]
fn test_titles() {
    let corpus = build_corpus(&sample_profile());
    let titles: Vec<&str> = corpus.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles[0], "Summary");
    assert_eq!(titles[1], "Contact");
    assert_eq!(titles[2], "Research Interests");
    assert_eq!(titles[3], "Education: ETH Zurich");
    assert_eq!(titles[4], "Certification: Deep Learning Specialization");
    assert_eq!(titles[5], "Skills: Languages");
    assert_eq!(titles[7], "Project: Trailmap");
    assert_eq!(titles[9], "Experience: Perception Engineer at Alpine Robotics");
    assert_eq!(titles[10], "Honor: Best Paper Award");
    assert_eq!(titles[11], "Leadership: Organizer");
}

#[test]
fn test_links() {
    let corpus = build_corpus(&sample_profile());
    let href = |id: &str| {
        corpus
            .iter()
            .find(|p| p.id == id)
            .and_then(|p| p.href.clone())
    };

    // Website beats GitHub for contact
    assert_eq!(href("contact").as_deref(), Some("https://ada.example.com"));
    // Repo beats demo
    assert_eq!(
        href("project-0").as_deref(),
        Some("https://github.com/ada/trailmap")
    );
    // No repo, demo used
    assert_eq!(
        href("project-1").as_deref(),
        Some("https://depthwise.example.com")
    );
    assert_eq!(
        href("certification-0").as_deref(),
        Some("https://coursera.org/verify/abc")
    );
    assert_eq!(href("summary"), None);
    assert_eq!(href("skills-0"), None);
}

#[test]
fn test_text_content() {
    let corpus = build_corpus(&sample_profile());
    let text = |id: &str| corpus.iter().find(|p| p.id == id).unwrap().text.clone();

    assert_eq!(
        text("interests"),
        "Research interests: 3D reconstruction, self-supervised learning, robot perception."
    );
    assert_eq!(text("skills-0"), "Languages: Rust, Python, C++.");
    assert_eq!(
        text("certification-0"),
        "Deep Learning Specialization from Coursera (2020)."
    );
    assert_eq!(
        text("honor-0"),
        "Best Paper Award from RSS Workshop (2022)."
    );
    assert_eq!(
        text("leadership-0"),
        "Organizer at Zurich Rust Meetup. Monthly talks on systems programming."
    );
}

#[test]
fn test_missing_sections_leave_placeholders() {
    let profile = Profile {
        name: "Ada".to_string(),
        projects: vec![Project {
            name: "Atlas".to_string(),
            description: String::new(),
            tech: vec![],
            repo: None,
            demo: None,
        }],
        ..Profile::default()
    };
    let corpus = build_corpus(&profile);
    assert_eq!(ids(&corpus), vec!["summary", "contact", "interests", "project-0"]);
    assert!(corpus[0].is_placeholder());
    assert!(corpus[1].is_placeholder());
    assert!(corpus[2].is_placeholder());
    assert_eq!(corpus[3].text, "Atlas.");
    assert_eq!(corpus[3].href, None);
}

#[test]
fn test_contact_placeholder_only_when_empty() {
    let profile = Profile {
        contact: Contact {
            location: Some("Zurich".to_string()),
            ..Contact::default()
        },
        ..Profile::default()
    };
    let corpus = build_corpus(&profile);
    assert_eq!(corpus[1].text, "Location: Zurich.");
    assert_eq!(corpus[1].href, None);
}
