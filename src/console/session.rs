//! One console instance: registry, transcript, history, input line and
//! pending effects, plus the dispatcher tying them together.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::command::CommandContext;
use super::effects::{Effect, EffectQueue};
use super::history::{HistoryBuffer, Recall};
use super::line::LineEditor;
use super::prompt::{PromptSet, ScreenSize};
use super::registry::CommandRegistry;
use super::tokenizer::tokenize;
use super::transcript::{LineKind, Transcript};
use crate::content::Project;
use crate::theme::ThemeContext;

/// What a submit did, mostly for callers that want to log or test it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Blank line; nothing changed.
    Ignored,
    /// First token matched no command.
    NotFound(String),
    /// A command ran.
    Executed { command: String, cleared: bool },
}

pub struct ConsoleSession {
    registry: CommandRegistry,
    prompts: PromptSet,
    screen: ScreenSize,
    transcript: Transcript,
    history: HistoryBuffer,
    line: LineEditor,
    effects: EffectQueue,
}

impl ConsoleSession {
    pub fn new(registry: CommandRegistry, prompts: PromptSet, effect_delay: Duration) -> Self {
        Self {
            registry,
            prompts,
            screen: ScreenSize::Large,
            transcript: Transcript::new(),
            history: HistoryBuffer::new(),
            line: LineEditor::new(),
            effects: EffectQueue::new(effect_delay),
        }
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.screen = ScreenSize::from_width(width);
    }

    pub fn screen_size(&self) -> ScreenSize {
        self.screen
    }

    pub fn prompt(&self) -> String {
        self.prompts.prompt(self.screen)
    }

    pub fn placeholder(&self) -> &'static str {
        self.screen.placeholder()
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn line(&self) -> &LineEditor {
        &self.line
    }

    pub fn line_mut(&mut self) -> &mut LineEditor {
        &mut self.line
    }

    pub fn effects(&self) -> &EffectQueue {
        &self.effects
    }

    /// Dispatch whatever is on the input line.
    pub fn submit(&mut self, theme: &mut ThemeContext, projects: &[Project]) -> DispatchOutcome {
        let raw = self.line.text().to_string();
        self.dispatch(&raw, theme, projects)
    }

    /// Run one raw input line through the console.
    pub fn dispatch(
        &mut self,
        raw: &str,
        theme: &mut ThemeContext,
        projects: &[Project],
    ) -> DispatchOutcome {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return DispatchOutcome::Ignored;
        }

        self.history.push(raw);
        let echo = format!("{} {}", self.prompt(), raw);
        self.transcript.push(LineKind::Input, echo);

        let args = tokenize(trimmed);
        let name = args[0].clone();

        let Some(command) = self.registry.lookup(&name) else {
            debug!("Unknown command: {}", name);
            self.transcript.push(
                LineKind::Error,
                format!(
                    "Command not found: {}. Type 'help' for available commands.",
                    name
                ),
            );
            self.line.clear();
            return DispatchOutcome::NotFound(name);
        };

        let summaries = self.registry.summaries();
        let mut requested = Vec::new();
        let output = {
            let mut ctx = CommandContext {
                theme,
                effects: &mut requested,
                commands: &summaries,
                projects,
            };
            command.execute(&args, &mut ctx)
        };
        info!("Executed command: {} (host {})", name, self.prompts.host);

        let cleared = requested.contains(&Effect::ClearScreen);
        if cleared {
            self.transcript.clear();
            self.line.clear();
        } else if let Some(text) = output.filter(|text| !text.is_empty()) {
            self.transcript.push(LineKind::Output, text);
        }

        for effect in requested
            .into_iter()
            .filter(|effect| *effect != Effect::ClearScreen)
        {
            self.effects.push(effect);
        }

        self.line.clear();
        DispatchOutcome::Executed {
            command: name,
            cleared,
        }
    }

    /// Report a failure that happened outside a command, such as an
    /// external open that the system refused.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.transcript.push(LineKind::Error, message);
    }

    /// Up arrow.
    pub fn recall_older(&mut self) {
        if let Recall::Entry(entry) = self.history.recall_older() {
            self.line.set(entry);
        }
    }

    /// Down arrow.
    pub fn recall_newer(&mut self) {
        match self.history.recall_newer() {
            Recall::Entry(entry) => self.line.set(entry),
            Recall::Cleared => self.line.clear(),
            Recall::Unchanged => {}
        }
    }

    /// The frame showing the latest output has been drawn.
    pub fn mark_rendered(&mut self, now: Instant) {
        self.effects.mark_rendered(now);
    }

    pub fn drain_ready(&mut self, now: Instant) -> Vec<Effect> {
        self.effects.drain_ready(now)
    }

    /// Tear down: cancel pending effects and forget transcript, history
    /// and input.
    pub fn reset(&mut self) {
        self.effects.cancel_all();
        self.transcript.clear();
        self.history.clear();
        self.line.clear();
    }
}
