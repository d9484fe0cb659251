//! Developer tooling: overlay inspector and sweep profiling.
//!
//! # Invariants
//! - Tools only read overlay state; they never draw or evict.

mod inspector;
mod profiler;

pub use inspector::{OverlayInspector, OverlaySummary};
pub use profiler::SweepProfiler;

pub fn crate_info() -> &'static str {
    "debugdraw-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
