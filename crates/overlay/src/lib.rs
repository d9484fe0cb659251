//! Debug draw overlay: transient wireframe shapes and key/value text.
//!
//! Callers request boxes, lines, points and rays plus on-screen text without
//! managing the scene resources behind them. Every request carries a linger
//! in frames; [`DebugDraw::process_frame`] retires expired requests once per
//! frame and recycles their materials and box instances.
//!
//! # Invariants
//! - Draw calls are no-ops while the overlay is hidden; live entries still expire.
//! - An entry pushed at frame `n` with linger `f` is live for frames `n..n + f`,
//!   provided lingers within a queue never decrease.
//! - All box instances share one cube template registered at construction.
//!
//! # Threading
//! Draw calls, text and metrics may be issued from any thread. The sweep runs
//! on the thread that owns the renderer.

mod config;
mod draw;
mod sweep;

pub use config::{ConfigError, OverlayConfig};
pub use draw::{DebugDraw, LiveShape};
pub use sweep::SweepReport;

pub fn crate_info() -> &'static str {
    "debugdraw-overlay v0.1.0"
}
