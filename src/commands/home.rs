//! The home page console.

use std::path::Path;

use super::shared::{Clear, Echo, Help, ThemeCommand};
use crate::console::{Command, CommandContext, CommandRegistry, Effect};
use crate::content::{resolve_project, Anchor, ExternalLink, Profile, Route};
use crate::error::RegistryError;

/// Console host name shown in the prompt.
pub const HOST: &str = "home";

/// Scrolls the home page to one of its sections.
pub struct Section(pub Anchor);

impl Command for Section {
    fn name(&self) -> &'static str {
        self.0.id()
    }

    fn description(&self) -> &'static str {
        match self.0 {
            Anchor::Projects => "Navigate to projects section",
            Anchor::Work => "Navigate to work section",
            Anchor::About => "Navigate to about section",
            Anchor::Contact => "Navigate to contact section",
        }
    }

    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Option<String> {
        ctx.request(Effect::ScrollTo(self.0));
        Some(format!("Navigating to {} section...", self.0.id()))
    }
}

/// Opens the write-up for a project.
pub struct OpenProject;

impl Command for OpenProject {
    fn name(&self) -> &'static str {
        "project"
    }

    fn description(&self) -> &'static str {
        "Open blog page for project (e.g., project penguinframework)"
    }

    fn usage(&self) -> Option<&'static str> {
        Some("project <name>")
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Option<String> {
        let Some(name) = args.get(1) else {
            return Some("Usage: project <name>".to_string());
        };

        let slug = resolve_project(ctx.projects, name);
        ctx.request(Effect::Navigate(Route::BlogPost { slug }));
        Some(format!("Opening blog page for project: {}...", name))
    }
}

/// Opens something outside the terminal.
pub struct OpenLink {
    name: &'static str,
    description: &'static str,
    link: ExternalLink,
}

impl OpenLink {
    pub fn new(name: &'static str, description: &'static str, link: ExternalLink) -> Self {
        Self {
            name,
            description,
            link,
        }
    }
}

impl Command for OpenLink {
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Option<String> {
        ctx.request(Effect::OpenExternal(self.link.clone()));
        Some(format!("Opening {}...", self.link.label))
    }
}

/// Goes to the blog index.
pub struct OpenBlog;

impl Command for OpenBlog {
    fn name(&self) -> &'static str {
        "blog"
    }

    fn description(&self) -> &'static str {
        "Open blog page"
    }

    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Option<String> {
        ctx.request(Effect::Navigate(Route::blog()));
        Some("Opening blog page...".to_string())
    }
}

/// Build the home console's commands.
///
/// `data_dir` is where a relative resume path is looked up.
pub fn registry(profile: &Profile, data_dir: &Path) -> Result<CommandRegistry, RegistryError> {
    CommandRegistry::new()
        .with(Help)?
        .with(Section(Anchor::Projects))?
        .with(Section(Anchor::Work))?
        .with(Section(Anchor::About))?
        .with(Section(Anchor::Contact))?
        .with(OpenBlog)?
        .with(OpenProject)?
        .with(ThemeCommand)?
        .with(OpenLink::new(
            "linkedin",
            "Open LinkedIn profile",
            profile.linkedin_link(),
        ))?
        .with(OpenLink::new(
            "github",
            "Open GitHub profile",
            profile.github_link(),
        ))?
        .with(OpenLink::new(
            "email",
            "Open email client",
            profile.email_link(),
        ))?
        .with(OpenLink::new(
            "resume",
            "Open resume",
            profile.resume_link(data_dir),
        ))?
        .with(Echo)?
        .with(Clear::transcript_only())
}
