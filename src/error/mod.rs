//! Unified error handling for folio.
//!
//! - **Error Categories**: classification for reporting decisions
//! - **Domain-specific Errors**: System, Content, Registry and UI errors
//! - **Unified Error Type**: `FolioError` consolidates them
//! - **Error Context**: operation/path/component attached to errors
//! - **Result Type Alias**: `FolioResult<T>`
//!
//! Nothing in here reaches the console transcript. Console mistakes such as
//! unknown commands or bad arguments are ordinary transcript lines, not
//! errors.
//!
//! | Category | Description |
//! |----------|-------------|
//! | Client | Bugs: malformed embedded content, duplicate commands |
//! | User | Bad CLI route, failed external open |
//! | System | Filesystem and terminal failures |
//! | Configuration | Environment / data directory problems |

mod category;
mod content;
mod context;
mod folio_error;
mod result;
mod system;
mod ui;

pub use category::ErrorCategory;
pub use content::{ContentError, RegistryError};
pub use context::ErrorContext;
pub use folio_error::FolioError;
pub use result::{FolioResult, ResultExt};
pub use system::{classify_io_error, SystemError};
pub use ui::UiError;
