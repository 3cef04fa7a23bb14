//! Blog post records and their typed content sections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display format for publish/update dates, e.g. "July 26, 2025".
const DATE_FORMAT: &str = "%B %-d, %Y";

/// One typed block of post content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Section {
    Heading {
        content: String,
    },
    Heading2 {
        content: String,
    },
    Text {
        content: String,
    },
    Code {
        #[serde(default)]
        language: Option<String>,
        code: String,
    },
    List {
        items: Vec<String>,
    },
    Quote {
        content: String,
    },
    Image {
        src: String,
        #[serde(default)]
        alt: String,
        #[serde(default)]
        caption: Option<String>,
    },
    Link {
        href: String,
        #[serde(default)]
        label: Option<String>,
    },
}

/// A published blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub published_at: NaiveDate,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
    /// Estimated reading time in minutes.
    #[serde(rename = "reading_time")]
    pub reading_time_minutes: u32,
    pub summary: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub sections: Vec<Section>,
    /// Source repository link.
    pub github: String,
}

impl BlogPost {
    /// Exact tag match after case folding. "c++" matches "C++", "cpp" does not.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }

    /// Case-insensitive title substring match.
    pub fn title_contains(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }

    pub fn published_label(&self) -> String {
        self.published_at.format(DATE_FORMAT).to_string()
    }

    /// The update date, only when it differs from the publish date.
    pub fn updated_label(&self) -> Option<String> {
        self.updated_at
            .filter(|updated| *updated != self.published_at)
            .map(|updated| updated.format(DATE_FORMAT).to_string())
    }

    /// `[tag, tag]` as shown in the blog index.
    pub fn tag_list(&self) -> String {
        format!("[{}]", self.tags.join(", "))
    }
}
