//! Page routes and home page anchors.
//!
//! Routes print and parse in URL form so they can be passed on the command
//! line and written to the log:
//!
//! | Route | Form |
//! |-------|------|
//! | `Home { anchor: None }` | `/` |
//! | `Home { anchor: Some(Work) }` | `/#work` |
//! | `BlogIndex { tag: None }` | `/blog` |
//! | `BlogIndex { tag: Some("c++") }` | `/blog?tag=c%2B%2B` |
//! | `BlogPost { slug }` | `/blog/<slug>` |

use std::fmt;
use std::str::FromStr;

use crate::error::ContentError;

/// Home page sections reachable by console commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Projects,
    Work,
    About,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 4] = [Anchor::Projects, Anchor::Work, Anchor::About, Anchor::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Projects => "projects",
            Anchor::Work => "work",
            Anchor::About => "about",
            Anchor::Contact => "contact",
        }
    }

    /// Section heading shown on the home page.
    pub fn title(self) -> &'static str {
        match self {
            Anchor::Projects => "Projects",
            Anchor::Work => "Work",
            Anchor::About => "About",
            Anchor::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Anchor> {
        Anchor::ALL.into_iter().find(|anchor| anchor.id() == id)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home { anchor: Option<Anchor> },
    BlogIndex { tag: Option<String> },
    BlogPost { slug: String },
}

impl Route {
    pub fn home() -> Self {
        Route::Home { anchor: None }
    }

    pub fn blog() -> Self {
        Route::BlogIndex { tag: None }
    }

    /// Whether two routes render the same page, ignoring anchors and queries.
    pub fn same_page(&self, other: &Route) -> bool {
        match (self, other) {
            (Route::Home { .. }, Route::Home { .. }) => true,
            (Route::BlogIndex { .. }, Route::BlogIndex { .. }) => true,
            (Route::BlogPost { slug: a }, Route::BlogPost { slug: b }) => a == b,
            _ => false,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home { .. })
    }

    pub fn is_blog_index(&self) -> bool {
        matches!(self, Route::BlogIndex { .. })
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::home()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home { anchor: None } => f.write_str("/"),
            Route::Home {
                anchor: Some(anchor),
            } => write!(f, "/#{}", anchor.id()),
            Route::BlogIndex { tag: None } => f.write_str("/blog"),
            Route::BlogIndex { tag: Some(tag) } => {
                write!(f, "/blog?tag={}", urlencoding::encode(tag))
            }
            Route::BlogPost { slug } => write!(f, "/blog/{}", slug),
        }
    }
}

impl FromStr for Route {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ContentError::InvalidRoute(s.to_string());
        let trimmed = s.trim();

        if trimmed.is_empty() || trimmed == "/" {
            return Ok(Route::home());
        }

        if let Some(fragment) = trimmed.strip_prefix("/#") {
            let anchor = Anchor::from_id(&fragment.to_lowercase()).ok_or_else(invalid)?;
            return Ok(Route::Home {
                anchor: Some(anchor),
            });
        }

        let rest = trimmed.strip_prefix("/blog").ok_or_else(invalid)?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        if rest.is_empty() {
            return Ok(Route::blog());
        }

        if let Some(query) = rest.strip_prefix('?') {
            let tag = query
                .split('&')
                .find_map(|pair| pair.strip_prefix("tag="))
                .ok_or_else(invalid)?;
            let tag = urlencoding::decode(tag).map_err(|_| invalid())?;
            let tag = tag.trim();
            return Ok(Route::BlogIndex {
                tag: (!tag.is_empty()).then(|| tag.to_string()),
            });
        }

        match rest.strip_prefix('/') {
            Some(slug) if !slug.is_empty() && !slug.contains('/') => Ok(Route::BlogPost {
                slug: slug.to_string(),
            }),
            _ => Err(invalid()),
        }
    }
}
