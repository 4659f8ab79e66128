//! Panic hook that gives the terminal back before printing the panic.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal restore in front of the current panic hook.
///
/// Call after `color_eyre::install()` so its report is the one printed.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!("panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
