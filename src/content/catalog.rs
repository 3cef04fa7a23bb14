//! The embedded content catalog.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::post::BlogPost;
use super::profile::{Experience, Profile, Project};
use crate::error::ContentError;

const PROFILE_JSON: &str = include_str!("../../content/profile.json");
const PROJECTS_JSON: &str = include_str!("../../content/projects.json");
const EXPERIENCE_JSON: &str = include_str!("../../content/experience.json");

const POSTS_JSON: [(&str, &str); 5] = [
    (
        "posts/portfolio.json",
        include_str!("../../content/posts/portfolio.json"),
    ),
    (
        "posts/penguinframework.json",
        include_str!("../../content/posts/penguinframework.json"),
    ),
    (
        "posts/aera.json",
        include_str!("../../content/posts/aera.json"),
    ),
    (
        "posts/marsa.json",
        include_str!("../../content/posts/marsa.json"),
    ),
    (
        "posts/moviesentiments.json",
        include_str!("../../content/posts/moviesentiments.json"),
    ),
];

/// Everything the site shows, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    /// Newest first.
    pub posts: Vec<BlogPost>,
}

fn parse<T: DeserializeOwned>(file: &'static str, json: &str) -> Result<T, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError::Parse { file, source })
}

impl Catalog {
    /// Parse the content compiled into the binary.
    pub fn load_embedded() -> Result<Self, ContentError> {
        let profile = parse("profile.json", PROFILE_JSON)?;
        let projects = parse("projects.json", PROJECTS_JSON)?;
        let experience = parse("experience.json", EXPERIENCE_JSON)?;
        let posts = POSTS_JSON
            .iter()
            .map(|(file, json)| parse(file, json))
            .collect::<Result<Vec<BlogPost>, _>>()?;

        let catalog = Self::new(profile, projects, experience, posts)?;
        debug!(
            "Loaded catalog: {} projects, {} posts",
            catalog.projects.len(),
            catalog.posts.len()
        );
        Ok(catalog)
    }

    /// Build a catalog from parts, sorting posts newest first.
    ///
    /// Posts published on the same day keep their relative order.
    pub fn new(
        profile: Profile,
        projects: Vec<Project>,
        experience: Vec<Experience>,
        mut posts: Vec<BlogPost>,
    ) -> Result<Self, ContentError> {
        check_unique("projects.json", projects.iter().map(|p| p.slug.as_str()))?;
        check_unique("posts", posts.iter().map(|p| p.slug.as_str()))?;

        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        Ok(Self {
            profile,
            projects,
            experience,
            posts,
        })
    }

    pub fn post(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    pub fn post_index(&self, slug: &str) -> Option<usize> {
        self.posts.iter().position(|post| post.slug == slug)
    }

    /// Map a typed project name to a post slug.
    pub fn resolve_project(&self, name: &str) -> String {
        resolve_project(&self.projects, name)
    }
}

/// Map a typed project name to a post slug.
///
/// Names that match no project are passed through unchanged; the post page
/// shows its not-found state for them.
pub fn resolve_project(projects: &[Project], name: &str) -> String {
    projects
        .iter()
        .find(|project| project.answers_to(name))
        .map(|project| project.slug.clone())
        .unwrap_or_else(|| name.to_string())
}

fn check_unique<'a>(
    file: &'static str,
    slugs: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for slug in slugs {
        if !seen.insert(slug) {
            return Err(ContentError::DuplicateSlug {
                file,
                slug: slug.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::load_embedded().unwrap();
        assert_eq!(catalog.projects.len(), 5);
        assert_eq!(catalog.posts.len(), 5);
        assert!(!catalog.experience.is_empty());
        assert_eq!(catalog.profile.handle, "anjola");
    }

    #[test]
    fn test_posts_sorted_newest_first() {
        let catalog = Catalog::load_embedded().unwrap();
        for pair in catalog.posts.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }
    }

    #[test]
    fn test_every_project_has_a_post() {
        let catalog = Catalog::load_embedded().unwrap();
        for project in &catalog.projects {
            assert!(
                catalog.post(&project.slug).is_some(),
                "missing post for {}",
                project.slug
            );
        }
    }

    #[test]
    fn test_resolve_project() {
        let catalog = Catalog::load_embedded().unwrap();
        assert_eq!(catalog.resolve_project("penguinframework"), "penguinframework");
        assert_eq!(catalog.resolve_project("penguin framework"), "penguinframework");
        assert_eq!(catalog.resolve_project("unknown"), "unknown");
    }

    #[test]
    fn test_duplicate_post_slug_rejected() {
        let catalog = Catalog::load_embedded().unwrap();
        let mut posts = catalog.posts.clone();
        posts.push(posts[0].clone());
        let err = Catalog::new(catalog.profile, catalog.projects, catalog.experience, posts)
            .unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug { .. }));
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse::<Profile>("profile.json", "{").unwrap_err();
        assert!(matches!(
            err,
            ContentError::Parse {
                file: "profile.json",
                ..
            }
        ));
    }
}
