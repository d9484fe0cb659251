use debugdraw_common::FrameIndex;
use debugdraw_overlay::DebugDraw;
use debugdraw_render::RenderHost;

/// Read-only queries against a live overlay.
pub struct OverlayInspector;

impl OverlayInspector {
    /// Snapshot of the overlay's live and idle resources.
    pub fn summary<H: RenderHost>(overlay: &DebugDraw<H>) -> OverlaySummary {
        OverlaySummary {
            frame: overlay.current_frame(),
            visible: overlay.is_visible(),
            live_lines: overlay.live_lines(),
            live_boxes: overlay.live_boxes(),
            idle_boxes: overlay.idle_boxes(),
            idle_materials: overlay.idle_materials(),
            text_entries: overlay.text_entries(),
        }
    }
}

/// Counts reported by [`OverlayInspector::summary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlaySummary {
    pub frame: FrameIndex,
    pub visible: bool,
    pub live_lines: usize,
    pub live_boxes: usize,
    pub idle_boxes: usize,
    pub idle_materials: usize,
    pub text_entries: usize,
}

impl OverlaySummary {
    /// Handles currently owned by the overlay, live or pooled.
    pub fn owned_instances(&self) -> usize {
        self.live_lines + self.live_boxes + self.idle_boxes
    }
}

impl std::fmt::Display for OverlaySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DebugDraw: frame={} visible={} lines={} boxes={} idle_boxes={} idle_materials={} texts={}",
            self.frame,
            self.visible,
            self.live_lines,
            self.live_boxes,
            self.idle_boxes,
            self.idle_materials,
            self.text_entries,
        )
    }
}
