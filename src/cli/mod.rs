//! Command-line interface: argument parsing plus the non-TUI commands.
//!
//! ```ignore
//! use folio::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(text) = run_cli_command(&command) {
//!     println!("{}", text);
//!     return Ok(());
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, StartOptions};
pub use version::{help_text, version_text, VERSION};

/// Text to print for commands that do not start the TUI.
///
/// Returns `None` for [`CliCommand::Run`].
pub fn run_cli_command(command: &CliCommand) -> Option<String> {
    match command {
        CliCommand::Version => Some(version_text()),
        CliCommand::Help => Some(help_text()),
        CliCommand::Run(_) => None,
    }
}
