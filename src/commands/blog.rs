//! The blog index console.

use super::shared::{Clear, Echo, Help, ThemeCommand};
use crate::console::{Command, CommandContext, CommandRegistry, Effect};
use crate::content::{PostFilter, Route};
use crate::error::RegistryError;

pub const HOST: &str = "blog";

/// Title search.
pub struct Search;

impl Command for Search {
    fn name(&self) -> &'static str {
        "search"
    }

    fn description(&self) -> &'static str {
        "Filter posts by title"
    }

    fn usage(&self) -> Option<&'static str> {
        Some("search <query>")
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Option<String> {
        if args.len() < 2 {
            return Some("Usage: search <query>".to_string());
        }

        let query = args[1..].join(" ");
        ctx.request(Effect::ApplyFilter(PostFilter::search(query.clone())));
        Some(format!("Searching for posts containing: \"{}\"", query))
    }
}

/// `filter --tag <tag>`.
pub struct Filter;

impl Command for Filter {
    fn name(&self) -> &'static str {
        "filter"
    }

    fn description(&self) -> &'static str {
        "Filter posts by tag"
    }

    fn usage(&self) -> Option<&'static str> {
        Some("filter --tag <tagname>")
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Option<String> {
        let tag = match (args.get(1).map(String::as_str), args.get(2)) {
            (Some("--tag"), Some(tag)) => tag,
            _ => return Some("Usage: filter --tag <tagname>".to_string()),
        };

        ctx.request(Effect::ApplyFilter(PostFilter::tag(tag.clone())));
        Some(format!("Filtering posts by tag: {}", tag))
    }
}

/// Back to the home page.
pub struct GoHome;

impl Command for GoHome {
    fn name(&self) -> &'static str {
        "home"
    }

    fn description(&self) -> &'static str {
        "Go to homepage"
    }

    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Option<String> {
        ctx.request(Effect::Navigate(Route::home()));
        Some("Opening homepage...".to_string())
    }
}

/// Build the blog console's commands.
pub fn registry() -> Result<CommandRegistry, RegistryError> {
    CommandRegistry::new()
        .with(Help)?
        .with(Search)?
        .with(Filter)?
        .with(GoHome)?
        .with(ThemeCommand)?
        .with(Echo)?
        .with(Clear::with_filter_reset())
}
