//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::build::{
    Certification, Contact, Education, Experience, Honor, Leadership, Profile, Project, SkillGroup,
};
use crate::types::Passage;

/// Create a passage whose title is derived from its id.
pub fn make_passage(id: &str, text: &str) -> Passage {
    Passage::new(id, format!("Passage {}", id), text)
}

/// Build a corpus from `(id, text)` pairs, in order.
pub fn make_corpus(entries: &[(&str, &str)]) -> Vec<Passage> {
    entries
        .iter()
        .map(|(id, text)| make_passage(id, text))
        .collect()
}

/// A filled-in profile touching every section.
pub fn sample_profile() -> Profile {
    Profile {
        name: "Ada Reyes".to_string(),
        headline: Some("Computer vision and deep learning engineer".to_string()),
        summary: Some(
            "I build perception systems for robots, from data pipelines to on-device inference"
                .to_string(),
        ),
        contact: Contact {
            email: Some("ada@example.com".to_string()),
            location: Some("Zurich, Switzerland".to_string()),
            website: Some("https://ada.example.com".to_string()),
            github: Some("https://github.com/ada".to_string()),
            linkedin: None,
        },
        research_interests: vec![
            "3D reconstruction".to_string(),
            "self-supervised learning".to_string(),
            "robot perception".to_string(),
        ],
        education: vec![Education {
            institution: "ETH Zurich".to_string(),
            degree: "MSc".to_string(),
            field: Some("Robotics, Systems and Control".to_string()),
            period: Some("2019-2021".to_string()),
            details: vec!["Thesis on visual odometry for legged robots".to_string()],
        }],
        certifications: vec![Certification {
            name: "Deep Learning Specialization".to_string(),
            issuer: Some("Coursera".to_string()),
            year: Some("2020".to_string()),
            url: Some("https://coursera.org/verify/abc".to_string()),
        }],
        skills: vec![
            SkillGroup {
                group: "Languages".to_string(),
                items: vec!["Rust".to_string(), "Python".to_string(), "C++".to_string()],
            },
            SkillGroup {
                group: "Machine Learning".to_string(),
                items: vec!["PyTorch".to_string(), "ONNX".to_string()],
            },
        ],
        projects: vec![
            Project {
                name: "Trailmap".to_string(),
                description: "Offline maps for hikers with on-device route planning".to_string(),
                tech: vec!["Rust".to_string(), "WebGPU".to_string()],
                repo: Some("https://github.com/ada/trailmap".to_string()),
                demo: Some("https://trailmap.example.com".to_string()),
            },
            Project {
                name: "Depthwise".to_string(),
                description: "Monocular depth estimation with deep learning".to_string(),
                tech: vec!["PyTorch".to_string()],
                repo: None,
                demo: Some("https://depthwise.example.com".to_string()),
            },
        ],
        experience: vec![Experience {
            role: "Perception Engineer".to_string(),
            organization: "Alpine Robotics".to_string(),
            period: Some("2021-present".to_string()),
            highlights: vec![
                "Shipped a computer vision stack for warehouse robots".to_string(),
                "Cut inference latency by 40 percent".to_string(),
            ],
        }],
        honors: vec![Honor {
            title: "Best Paper Award".to_string(),
            issuer: Some("RSS Workshop".to_string()),
            year: Some("2022".to_string()),
            description: None,
        }],
        leadership: vec![Leadership {
            role: "Organizer".to_string(),
            organization: "Zurich Rust Meetup".to_string(),
            period: None,
            description: Some("Monthly talks on systems programming".to_string()),
        }],
    }
}
