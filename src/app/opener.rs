//! Opening links outside the terminal.

use tracing::info;

use crate::error::{FolioResult, UiError};

/// Hands a URL, `mailto:` URI or file path to something outside the TUI.
pub trait UrlOpener {
    fn open(&mut self, target: &str) -> FolioResult<()>;
}

/// Opens targets with the platform's default handler.
#[derive(Debug, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&mut self, target: &str) -> FolioResult<()> {
        info!("Opening externally: {}", target);
        open::that(target).map_err(|e| {
            UiError::OpenFailed {
                target: target.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}
