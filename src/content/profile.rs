//! Site owner profile, projects and work experience.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Something opened outside the TUI: a web page, a mail client, a local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    /// What the console calls it ("LinkedIn profile", "resume").
    pub label: String,
    /// URL, `mailto:` URI or filesystem path.
    pub target: String,
}

impl ExternalLink {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Short user name used in prompts (`<handle>@home ~ %`).
    pub handle: String,
    pub site_title: String,
    pub intro: Vec<String>,
    pub about: String,
    #[serde(default)]
    pub fun_fact: Option<String>,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    /// Resume file, relative to the data directory unless absolute.
    pub resume: String,
}

impl Profile {
    pub fn linkedin_link(&self) -> ExternalLink {
        ExternalLink::new("LinkedIn profile", &self.linkedin)
    }

    pub fn github_link(&self) -> ExternalLink {
        ExternalLink::new("GitHub profile", &self.github)
    }

    pub fn email_link(&self) -> ExternalLink {
        ExternalLink::new("email client", format!("mailto:{}", self.email))
    }

    pub fn resume_link(&self, data_dir: &Path) -> ExternalLink {
        let path = Path::new(&self.resume);
        let target = if path.is_absolute() {
            path.to_path_buf()
        } else {
            data_dir.join(path)
        };
        ExternalLink::new("resume", target.to_string_lossy())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub tags: Vec<String>,
    pub description: String,
    /// Language of the code excerpt.
    pub language: String,
    pub snippet_title: String,
    pub snippet: String,
    pub github: String,
}

impl Project {
    /// Whether a typed project name refers to this project.
    ///
    /// Names arrive lowercased from the console, so compare against the slug
    /// and against the title folded to lowercase without spaces.
    pub fn answers_to(&self, name: &str) -> bool {
        let name = name.to_lowercase().replace(' ', "");
        self.slug == name || self.title.to_lowercase().replace(' ', "") == name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub date: String,
    pub stack: Vec<String>,
    pub description: String,
}
