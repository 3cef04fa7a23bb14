//! Commands present in both consoles.

use crate::console::{Command, CommandContext, Effect};
use crate::theme::Theme;

const THEME_USAGE: &str = "theme <light|dark>";

/// Lists every registered command.
pub struct Help;

impl Command for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Show available commands"
    }

    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Option<String> {
        let width = ctx
            .commands
            .iter()
            .map(|c| c.synopsis().len())
            .max()
            .unwrap_or(0);

        let mut lines = vec!["Available commands:".to_string()];
        lines.extend(ctx.commands.iter().map(|c| {
            format!("    {:<width$} - {}", c.synopsis(), c.description, width = width)
        }));
        lines.push(format!("Current theme: {}", ctx.theme.current()));
        Some(lines.join("\n"))
    }
}

/// Shows or sets the theme.
pub struct ThemeCommand;

impl Command for ThemeCommand {
    fn name(&self) -> &'static str {
        "theme"
    }

    fn description(&self) -> &'static str {
        "Toggle site theme"
    }

    fn usage(&self) -> Option<&'static str> {
        Some(THEME_USAGE)
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Option<String> {
        let Some(value) = args.get(1) else {
            return Some(format!(
                "Current theme: {}. Usage: {}",
                ctx.theme.current(),
                THEME_USAGE
            ));
        };

        match value.parse::<Theme>() {
            Ok(theme) => {
                ctx.theme.set(theme);
                Some(format!("Theme switched to {} mode", theme))
            }
            Err(()) => Some(format!("Usage: {}", THEME_USAGE)),
        }
    }
}

/// Prints its (lowercased) arguments.
pub struct Echo;

impl Command for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn description(&self) -> &'static str {
        "Print message"
    }

    fn usage(&self) -> Option<&'static str> {
        Some("echo <message>")
    }

    fn execute(&self, args: &[String], _ctx: &mut CommandContext<'_>) -> Option<String> {
        Some(args[1..].join(" "))
    }
}

/// Clears the transcript, optionally resetting the blog filter too.
pub struct Clear {
    reset_filter: bool,
}

impl Clear {
    pub fn transcript_only() -> Self {
        Self {
            reset_filter: false,
        }
    }

    pub fn with_filter_reset() -> Self {
        Self { reset_filter: true }
    }
}

impl Command for Clear {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        if self.reset_filter {
            "Reset all filters and clear terminal"
        } else {
            "Clear terminal history"
        }
    }

    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Option<String> {
        if self.reset_filter {
            ctx.request(Effect::ResetFilter);
            ctx.request(Effect::ClearScreen);
            // Dropped by the session along with the rest of the screen.
            return Some("Filters cleared, showing all posts".to_string());
        }
        ctx.request(Effect::ClearScreen);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::CommandSummary;
    use crate::theme::{MemoryThemeStore, ThemeContext};

    fn args(line: &str) -> Vec<String> {
        crate::console::tokenize(line)
    }

    fn run(command: &dyn Command, line: &str, store: &MemoryThemeStore) -> (Option<String>, Vec<Effect>) {
        let mut theme = ThemeContext::hydrate(Box::new(store.clone()), None);
        let mut effects = Vec::new();
        let commands = vec![
            Help.summary(),
            ThemeCommand.summary(),
            Echo.summary(),
            Clear::transcript_only().summary(),
        ];
        let mut ctx = CommandContext {
            theme: &mut theme,
            effects: &mut effects,
            commands: &commands,
            projects: &[],
        };
        let output = command.execute(&args(line), &mut ctx);
        (output, effects)
    }

    #[test]
    fn test_help_lists_commands_and_theme() {
        let (output, _) = run(&Help, "help", &MemoryThemeStore::new());
        let output = output.unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Available commands:");
        assert_eq!(lines[1], "    help               - Show available commands");
        assert_eq!(lines[2], "    theme <light|dark> - Toggle site theme");
        assert_eq!(lines.last().copied(), Some("Current theme: dark"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_theme_query_does_not_write() {
        let store = MemoryThemeStore::new();
        let (output, _) = run(&ThemeCommand, "theme", &store);
        assert_eq!(
            output.as_deref(),
            Some("Current theme: dark. Usage: theme <light|dark>")
        );
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_theme_set_writes_once() {
        let store = MemoryThemeStore::new();
        let (output, _) = run(&ThemeCommand, "theme LIGHT", &store);
        assert_eq!(output.as_deref(), Some("Theme switched to light mode"));
        assert_eq!(store.writes(), 1);
        assert_eq!(store.stored(), Some(Theme::Light));
    }

    #[test]
    fn test_theme_bad_value() {
        let store = MemoryThemeStore::new();
        let (output, _) = run(&ThemeCommand, "theme blue", &store);
        assert_eq!(output.as_deref(), Some("Usage: theme <light|dark>"));
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_echo() {
        let store = MemoryThemeStore::new();
        assert_eq!(run(&Echo, "echo a b  c", &store).0.as_deref(), Some("a b c"));
        assert_eq!(run(&Echo, "echo HELLO", &store).0.as_deref(), Some("hello"));
        assert_eq!(run(&Echo, "echo", &store).0.as_deref(), Some(""));
    }

    #[test]
    fn test_clear_variants() {
        let store = MemoryThemeStore::new();
        let (output, effects) = run(&Clear::transcript_only(), "clear", &store);
        assert_eq!(output, None);
        assert_eq!(effects, vec![Effect::ClearScreen]);

        let (_, effects) = run(&Clear::with_filter_reset(), "clear", &store);
        assert_eq!(effects, vec![Effect::ResetFilter, Effect::ClearScreen]);
    }

    #[test]
    fn test_synopsis_prefers_usage() {
        let summary: CommandSummary = ThemeCommand.summary();
        assert_eq!(summary.synopsis(), "theme <light|dark>");
        assert_eq!(Help.summary().synopsis(), "help");
    }
}
