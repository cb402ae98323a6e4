//! Panic hook that gives the terminal back before the panic is reported.

use super::setup::emergency_restore;
use std::panic;

/// Install a hook that restores the terminal, logs the panic, then runs the
/// previous hook (color-eyre's report, when installed).
///
/// Call early in `main`, before creating the `TerminalManager`.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!(panic = %panic_info, "campus-portal panicked");
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();
        // Reset to the default hook so other tests are unaffected
        let _ = panic::take_hook();
    }
}
