//! Structured profile data, as the site's content files describe it.
//!
//! Every section is optional. A profile with nothing but a name is valid and
//! builds a corpus of placeholders.

use serde::{Deserialize, Serialize};

/// A person's profile. Unknown top-level keys are rejected.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub research_interests: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    /// Skill groups in display order ("Languages", "ML", ...).
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub honors: Vec<Honor>,
    #[serde(default)]
    pub leadership: Vec<Leadership>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

impl Contact {
    /// Preferred outbound link: website, then GitHub, then LinkedIn.
    pub fn link(&self) -> Option<String> {
        first_present(&[&self.website, &self.github, &self.linkedin])
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.location.is_none()
            && self.website.is_none()
            && self.github.is_none()
            && self.linkedin.is_none()
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub group: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

impl Project {
    /// Preferred outbound link: repository, falling back to the live demo.
    pub fn link(&self) -> Option<String> {
        first_present(&[&self.repo, &self.demo])
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub role: String,
    pub organization: String,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Honor {
    pub title: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Leadership {
    pub role: String,
    pub organization: String,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// First link that is present and not blank.
fn first_present(candidates: &[&Option<String>]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|candidate| candidate.as_deref())
        .find(|link| !link.trim().is_empty())
        .map(str::to_owned)
}
