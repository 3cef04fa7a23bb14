//! Panic hook that restores the terminal before the panic message prints.

use std::panic;

use super::setup::emergency_restore;

/// Install the hook. Call early in `main`, before creating the
/// `TerminalManager`, and after `color_eyre::install` so its hook is the
/// one chained to.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!("panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
