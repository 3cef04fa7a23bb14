//! The command contract shared by both consoles.

use super::effects::Effect;
use crate::content::Project;
use crate::theme::ThemeContext;

/// Name/description/usage of a registered command, as listed by `help`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSummary {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: Option<&'static str>,
}

impl CommandSummary {
    /// What `help` shows in the left column.
    pub fn synopsis(&self) -> &'static str {
        self.usage.unwrap_or(self.name)
    }
}

/// Everything a command may read or touch while it executes.
pub struct CommandContext<'a> {
    pub theme: &'a mut ThemeContext,
    /// Side effects requested by the command, applied by the caller.
    pub effects: &'a mut Vec<Effect>,
    /// Registry listing in registration order.
    pub commands: &'a [CommandSummary],
    pub projects: &'a [Project],
}

impl CommandContext<'_> {
    pub fn request(&mut self, effect: Effect) {
        self.effects.push(effect);
    }
}

/// A console command.
pub trait Command {
    /// The token users type. Must be a single lowercase word.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Example invocation, printed on misuse.
    fn usage(&self) -> Option<&'static str> {
        None
    }

    /// Run the command. `args[0]` is the command name.
    ///
    /// Returns the text to print; `None` or an empty string prints nothing.
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Option<String>;

    fn summary(&self) -> CommandSummary {
        CommandSummary {
            name: self.name(),
            description: self.description(),
            usage: self.usage(),
        }
    }
}
