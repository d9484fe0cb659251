use std::fmt;

use debugdraw_common::FrameIndex;
use debugdraw_input::{Action, ActionInput};
use debugdraw_kernel::ExpiringQueue;
use debugdraw_render::RenderHost;

use crate::draw::{DebugDraw, LiveShape};

/// What one sweep did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub frame: FrameIndex,
    pub metrics_folded: usize,
    pub toggled: bool,
    pub lines_evicted: usize,
    pub boxes_evicted: usize,
    pub boxes_trimmed: usize,
    pub texts_evicted: usize,
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sweep frame={} metrics={} lines-={} boxes-={} trimmed={} texts-={}{}",
            self.frame,
            self.metrics_folded,
            self.lines_evicted,
            self.boxes_evicted,
            self.boxes_trimmed,
            self.texts_evicted,
            if self.toggled { " toggled" } else { "" }
        )
    }
}

impl<H: RenderHost> DebugDraw<H> {
    /// Per-frame sweep. Call once per rendered frame on the renderer's thread.
    ///
    /// In order: fold metrics into text, poll the toggle action, evict expired
    /// lines then boxes, trim the idle box pool, evict expired text, and ask
    /// the host to redraw the text layer.
    pub fn process_frame(&self, input: &dyn ActionInput) -> SweepReport {
        let _span = tracing::info_span!("debug_draw_sweep").entered();
        let mut report = SweepReport::default();

        for (key, total) in self.metrics.drain() {
            self.set_text(&key, total.to_string(), None);
            report.metrics_folded += 1;
        }

        if self.actions.just_triggered(Action::ToggleOverlay, input) {
            let visible = self.toggle_visibility();
            tracing::debug!(visible, "debug draw visibility toggled");
            report.toggled = true;
        }

        let frame = self.host.frames_drawn();
        report.frame = frame;

        report.lines_evicted = self.evict(&self.lines, frame, |shape| {
            self.material_pool.release(shape.material);
            self.host.destroy_instance(shape.instance);
        });

        report.boxes_evicted = self.evict(&self.boxes, frame, |shape| {
            self.material_pool.release(shape.material);
            if self.config.recycle_boxes {
                self.park_box(shape.instance);
            } else {
                self.host.destroy_instance(shape.instance);
            }
        });

        for _ in 0..self.config.box_trim_per_frame {
            let Some(instance) = self.box_pool.pop() else {
                break;
            };
            self.host.destroy_instance(instance);
            report.boxes_trimmed += 1;
        }
        if report.boxes_trimmed > 0 {
            tracing::debug!(
                trimmed = report.boxes_trimmed,
                idle = self.box_pool.len(),
                "trimmed idle box pool"
            );
        }

        report.texts_evicted = self.texts.lock().evict_expired(frame);

        self.host.request_overlay_redraw();

        tracing::trace!(
            frame,
            lines = self.lines.len(),
            boxes = self.boxes.len(),
            texts = report.texts_evicted,
            "debug draw sweep complete"
        );
        report
    }

    fn evict(
        &self,
        queue: &ExpiringQueue<LiveShape>,
        frame: FrameIndex,
        on_evict: impl FnMut(LiveShape),
    ) -> usize {
        if self.config.full_scan_eviction {
            queue.evict_expired_full_scan(frame, on_evict)
        } else {
            queue.evict_expired(frame, on_evict)
        }
    }
}
