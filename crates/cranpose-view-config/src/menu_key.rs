//! Permanent menu key override.
//!
//! Whether the device reports a permanent (hardware) menu key is not derived
//! from display metrics. It is a toggle that tests flip before building UI,
//! so it lives outside the resolver in its own state container.

use std::sync::atomic::{AtomicBool, Ordering};

static GLOBAL_MENU_KEY_STATE: MenuKeyState = MenuKeyState::new();

/// Holds the permanent menu key flag. Starts out `true`.
///
/// Writes are totally ordered and the last one wins; a write only affects
/// reads that happen after it. Create a separate instance when a test needs
/// isolation from the process-wide one.
#[derive(Debug)]
pub struct MenuKeyState {
    has_permanent_menu_key: AtomicBool,
}

impl MenuKeyState {
    pub const fn new() -> Self {
        Self::with_value(true)
    }

    pub const fn with_value(has_permanent_menu_key: bool) -> Self {
        Self {
            has_permanent_menu_key: AtomicBool::new(has_permanent_menu_key),
        }
    }

    /// Process-wide instance used by [`has_permanent_menu_key`] and
    /// [`set_has_permanent_menu_key`].
    pub fn global() -> &'static MenuKeyState {
        &GLOBAL_MENU_KEY_STATE
    }

    pub fn has_permanent_menu_key(&self) -> bool {
        self.has_permanent_menu_key.load(Ordering::SeqCst)
    }

    pub fn set_has_permanent_menu_key(&self, value: bool) {
        let previous = self.has_permanent_menu_key.swap(value, Ordering::SeqCst);
        if previous != value {
            log::debug!("permanent menu key override changed: {previous} -> {value}");
        }
    }

    /// Restores the start-of-process value.
    pub fn reset(&self) {
        self.set_has_permanent_menu_key(true);
    }
}

impl Default for MenuKeyState {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads the process-wide permanent menu key flag.
pub fn has_permanent_menu_key() -> bool {
    MenuKeyState::global().has_permanent_menu_key()
}

/// Overrides the process-wide permanent menu key flag.
pub fn set_has_permanent_menu_key(value: bool) {
    MenuKeyState::global().set_has_permanent_menu_key(value);
}

#[cfg(test)]
#[path = "tests/menu_key_tests.rs"]
mod tests;
