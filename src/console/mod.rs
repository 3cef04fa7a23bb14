//! The embedded command console.
//!
//! A [`ConsoleSession`] turns typed lines into transcript output and
//! deferred [`Effect`]s. Which commands exist is decided by the
//! [`CommandRegistry`] it is built with; see `crate::commands`.

mod command;
mod effects;
mod history;
mod line;
mod prompt;
mod registry;
mod session;
mod tokenizer;
mod transcript;

pub use command::{Command, CommandContext, CommandSummary};
pub use effects::{Effect, EffectQueue, EffectSink, DEFAULT_EFFECT_DELAY};
pub use history::{HistoryBuffer, Recall};
pub use line::LineEditor;
pub use prompt::{viewport_width, PromptSet, ScreenSize, NOMINAL_CELL_WIDTH};
pub use registry::CommandRegistry;
pub use session::{ConsoleSession, DispatchOutcome};
pub use tokenizer::tokenize;
pub use transcript::{LineKind, Transcript, TranscriptLine};
