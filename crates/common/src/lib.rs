//! Shared types for the debug draw overlay.
//!
//! # Invariants
//! - Frame indices are monotonic and owned by the host renderer.
//! - `Transform` is a pure value; nothing here touches host resources.

pub mod error;
pub mod types;

pub use error::DrawError;
pub use types::{
    Color, FrameIndex, LINES_LINGER_FRAMES, TEXT_BG_COLOR, TEXT_COLOR, TEXT_LINGER_FRAMES,
    Transform,
};

pub fn crate_info() -> &'static str {
    "debugdraw-common v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("common"));
    }
}
