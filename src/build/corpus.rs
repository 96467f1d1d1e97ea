//! Profile → passages.
//!
//! Order is part of the output contract: ties in a ranking go to whichever
//! passage was built first, so the summary and contact facts lead.
//!
//! | Section            | Id                  | Title                          | Link              |
//! |--------------------|---------------------|--------------------------------|-------------------|
//! | summary            | `summary`           | Summary                        | -                 |
//! | contact            | `contact`           | Contact                        | website/github/li |
//! | research interests | `interests`         | Research Interests             | -                 |
//! | education          | `education-{i}`     | Education: {institution}       | -                 |
//! | certifications     | `certification-{i}` | Certification: {name}          | url               |
//! | skills             | `skills-{i}`        | Skills: {group}                | -                 |
//! | projects           | `project-{i}`       | Project: {name}                | repo, else demo   |
//! | experience         | `experience-{i}`    | Experience: {role} at {org}    | -                 |
//! | honors             | `honor-{i}`         | Honor: {title}                 | -                 |
//! | leadership         | `leadership-{i}`    | Leadership: {role}             | -                 |
//!
//! Summary, contact and interests are always emitted. When the profile has
//! nothing for them their text is empty, which keeps them out of every ranking.

use super::profile::{
    Certification, Education, Experience, Honor, Leadership, Profile, Project, SkillGroup,
};
use crate::types::Passage;

/// Builds the searchable corpus for one profile snapshot.
///
/// Pure: same profile in, same passages out. No caching; profiles are small
/// enough that rebuilding per request costs nothing.
pub struct CorpusBuilder<'a> {
    profile: &'a Profile,
}

impl<'a> CorpusBuilder<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }

    pub fn build(&self) -> Vec<Passage> {
        let profile = self.profile;
        let mut corpus = vec![self.summary(), self.contact(), self.interests()];

        corpus.extend(profile.education.iter().enumerate().map(education));
        corpus.extend(profile.certifications.iter().enumerate().map(certification));
        corpus.extend(profile.skills.iter().enumerate().map(skills));
        corpus.extend(profile.projects.iter().enumerate().map(project));
        corpus.extend(profile.experience.iter().enumerate().map(experience));
        corpus.extend(profile.honors.iter().enumerate().map(honor));
        corpus.extend(profile.leadership.iter().enumerate().map(leadership));

        corpus
    }

    fn summary(&self) -> Passage {
        let text = Text::new()
            .push_opt(self.profile.headline.as_deref())
            .push_opt(self.profile.summary.as_deref())
            .finish();
        Passage::new("summary", "Summary", text)
    }

    fn contact(&self) -> Passage {
        let contact = &self.profile.contact;
        let text = Text::new()
            .labeled("Email", contact.email.as_deref())
            .labeled("Location", contact.location.as_deref())
            .labeled("Website", contact.website.as_deref())
            .labeled("GitHub", contact.github.as_deref())
            .labeled("LinkedIn", contact.linkedin.as_deref())
            .finish();
        Passage::new("contact", "Contact", text).with_optional_href(contact.link())
    }

    fn interests(&self) -> Passage {
        let interests = &self.profile.research_interests;
        let text = if interests.iter().all(|i| i.trim().is_empty()) {
            String::new()
        } else {
            Text::new()
                .push(format!("Research interests: {}", list(interests)))
                .finish()
        };
        Passage::new("interests", "Research Interests", text)
    }
}

/// Build the corpus for a profile. Shorthand for `CorpusBuilder::new(p).build()`.
pub fn build_corpus(profile: &Profile) -> Vec<Passage> {
    CorpusBuilder::new(profile).build()
}

fn education((i, edu): (usize, &Education)) -> Passage {
    let degree = match edu.field.as_deref() {
        Some(field) if !field.trim().is_empty() => format!("{} in {}", edu.degree, field),
        _ => edu.degree.clone(),
    };
    let text = Text::new()
        .push(qualified(
            &format!("{} at {}", degree, edu.institution),
            edu.period.as_deref(),
        ))
        .push_all(&edu.details)
        .finish();
    Passage::new(
        format!("education-{}", i),
        format!("Education: {}", edu.institution),
        text,
    )
}

fn certification((i, cert): (usize, &Certification)) -> Passage {
    let base = match cert.issuer.as_deref() {
        Some(issuer) if !issuer.trim().is_empty() => format!("{} from {}", cert.name, issuer),
        _ => cert.name.clone(),
    };
    let text = Text::new()
        .push(qualified(&base, cert.year.as_deref()))
        .finish();
    Passage::new(
        format!("certification-{}", i),
        format!("Certification: {}", cert.name),
        text,
    )
    .with_optional_href(cert.url.clone().filter(|url| !url.trim().is_empty()))
}

fn skills((i, group): (usize, &SkillGroup)) -> Passage {
    let text = if group.items.iter().all(|item| item.trim().is_empty()) {
        String::new()
    } else {
        Text::new()
            .push(format!("{}: {}", group.group, list(&group.items)))
            .finish()
    };
    Passage::new(
        format!("skills-{}", i),
        format!("Skills: {}", group.group),
        text,
    )
}

fn project((i, project): (usize, &Project)) -> Passage {
    let head = if project.description.trim().is_empty() {
        project.name.clone()
    } else {
        format!("{}: {}", project.name, project.description.trim())
    };
    let mut text = Text::new().push(head);
    if project.tech.iter().any(|t| !t.trim().is_empty()) {
        text = text.push(format!("Built with {}", list(&project.tech)));
    }
    Passage::new(
        format!("project-{}", i),
        format!("Project: {}", project.name),
        text.finish(),
    )
    .with_optional_href(project.link())
}

fn experience((i, exp): (usize, &Experience)) -> Passage {
    let text = Text::new()
        .push(qualified(
            &format!("{} at {}", exp.role, exp.organization),
            exp.period.as_deref(),
        ))
        .push_all(&exp.highlights)
        .finish();
    Passage::new(
        format!("experience-{}", i),
        format!("Experience: {} at {}", exp.role, exp.organization),
        text,
    )
}

fn honor((i, honor): (usize, &Honor)) -> Passage {
    let base = match honor.issuer.as_deref() {
        Some(issuer) if !issuer.trim().is_empty() => format!("{} from {}", honor.title, issuer),
        _ => honor.title.clone(),
    };
    let text = Text::new()
        .push(qualified(&base, honor.year.as_deref()))
        .push_opt(honor.description.as_deref())
        .finish();
    Passage::new(
        format!("honor-{}", i),
        format!("Honor: {}", honor.title),
        text,
    )
}

fn leadership((i, lead): (usize, &Leadership)) -> Passage {
    let text = Text::new()
        .push(qualified(
            &format!("{} at {}", lead.role, lead.organization),
            lead.period.as_deref(),
        ))
        .push_opt(lead.description.as_deref())
        .finish();
    Passage::new(
        format!("leadership-{}", i),
        format!("Leadership: {}", lead.role),
        text,
    )
}

/// "base (qualifier)", or just "base" when the qualifier is missing.
fn qualified(base: &str, qualifier: Option<&str>) -> String {
    match qualifier {
        Some(q) if !q.trim().is_empty() => format!("{} ({})", base, q.trim()),
        _ => base.to_string(),
    }
}

/// Comma-separated, blanks skipped.
fn list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sentence accumulator. Blank parts are dropped; each kept part ends with a
/// period so adjacent facts don't read as one phrase.
#[derive(Default)]
struct Text {
    parts: Vec<String>,
}

impl Text {
    fn new() -> Self {
        Self::default()
    }

    fn push(mut self, part: impl AsRef<str>) -> Self {
        let part = part.as_ref().trim();
        if part.is_empty() {
            return self;
        }
        if part.ends_with(['.', '!', '?']) {
            self.parts.push(part.to_string());
        } else {
            self.parts.push(format!("{}.", part));
        }
        self
    }

    fn push_opt(self, part: Option<&str>) -> Self {
        match part {
            Some(part) => self.push(part),
            None => self,
        }
    }

    fn push_all(self, parts: &[String]) -> Self {
        parts.iter().fold(self, |text, part| text.push(part))
    }

    fn labeled(self, label: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.trim().is_empty() => {
                self.push(format!("{}: {}", label, value.trim()))
            }
            _ => self,
        }
    }

    fn finish(self) -> String {
        self.parts.join(" ")
    }
}
