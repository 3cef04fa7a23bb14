//! Site content: profile, projects, experience and blog posts, plus the
//! routes and filters that select among them.

mod catalog;
mod filter;
mod post;
mod profile;
mod route;

pub use catalog::{resolve_project, Catalog};
pub use filter::PostFilter;
pub use post::{BlogPost, Section};
pub use profile::{Experience, ExternalLink, Profile, Project};
pub use route::{Anchor, Route};
