//! Input actions for the overlay.
//!
//! # Invariants
//! - Actions are edge-triggered: "just pressed" is true for one frame per press.
//! - The overlay never reads raw device events, only named actions.

pub mod action;

pub use action::{Action, ActionInput, ActionMap, NoInput, ScriptedInput, TOGGLE_ACTION};

pub fn crate_info() -> &'static str {
    "debugdraw-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
