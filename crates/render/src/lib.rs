//! Rendering adapter: the narrow interface the overlay needs from a host engine.
//!
//! # Invariants
//! - The overlay only touches the scene through [`RenderHost`].
//! - Geometry builders are pure; only handle creation reaches the host.
//!
//! # Headless host
//! [`HeadlessHost`] records every call instead of drawing. It backs the CLI
//! demo and the tests; a GPU backend implements the same trait.

mod geometry;
mod handle;
mod headless;
mod host;
mod text_overlay;

pub use geometry::{CubeTemplate, LineGeometry, LineVertex, POINT_MARKER_SIZE};
pub use handle::{InstanceId, MaterialId, MeshId};
pub use headless::{CanvasCommand, HeadlessHost, InstanceRecord, InstanceSource, MonospaceCanvas};
pub use host::{Canvas2d, FontMetrics, InstanceState, Rect, RenderHost};
pub use text_overlay::{TextOverlay, TextOverlayStyle};

pub fn crate_info() -> &'static str {
    "debugdraw-render v0.1.0"
}
