//! Blog index filtering.

use super::post::BlogPost;

/// Which posts the blog index shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PostFilter {
    #[default]
    All,
    /// Case-insensitive title substring.
    Search(String),
    /// Case-insensitive exact tag.
    Tag(String),
}

impl PostFilter {
    /// Title search. An empty query shows everything.
    pub fn search(query: impl Into<String>) -> Self {
        let query = query.into();
        if query.trim().is_empty() {
            PostFilter::All
        } else {
            PostFilter::Search(query)
        }
    }

    /// Tag filter. An empty tag shows everything.
    pub fn tag(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if tag.trim().is_empty() {
            PostFilter::All
        } else {
            PostFilter::Tag(tag)
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, PostFilter::All)
    }

    pub fn matches(&self, post: &BlogPost) -> bool {
        match self {
            PostFilter::All => true,
            PostFilter::Search(query) => post.title_contains(query),
            PostFilter::Tag(tag) => post.has_tag(tag),
        }
    }

    /// Posts passing the filter, in catalog order.
    pub fn apply<'a>(&self, posts: &'a [BlogPost]) -> Vec<&'a BlogPost> {
        posts.iter().filter(|post| self.matches(post)).collect()
    }
}
