use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use debugdraw_common::{Color, DrawError, FrameIndex, Transform};
use debugdraw_input::ActionMap;
use debugdraw_kernel::{ExpiringQueue, MetricsTable, ResourcePool, TextTable, TimedEntry};
use debugdraw_render::{
    Canvas2d, CubeTemplate, InstanceId, InstanceState, LineGeometry, MaterialId, MeshId,
    RenderHost, TextOverlay,
};
use glam::Vec3;
use parking_lot::Mutex;

use crate::config::OverlayConfig;

/// A scene instance and the pooled material coloring it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveShape {
    pub instance: InstanceId,
    pub material: MaterialId,
}

/// Transient debug geometry and text on top of a host renderer.
///
/// Draw calls may come from any thread. [`process_frame`](Self::process_frame)
/// must run exactly once per rendered frame on the thread that owns the
/// renderer. Every draw call is a silent no-op while the overlay is hidden.
pub struct DebugDraw<H: RenderHost> {
    pub(crate) host: Arc<H>,
    pub(crate) config: OverlayConfig,
    pub(crate) actions: ActionMap,
    pub(crate) text_overlay: TextOverlay,
    pub(crate) visible: AtomicBool,
    pub(crate) cube_mesh: MeshId,
    pub(crate) box_pool: ResourcePool<InstanceId>,
    pub(crate) material_pool: ResourcePool<MaterialId>,
    pub(crate) boxes: ExpiringQueue<LiveShape>,
    pub(crate) lines: ExpiringQueue<LiveShape>,
    pub(crate) texts: Mutex<TextTable>,
    pub(crate) metrics: MetricsTable,
}

impl<H: RenderHost> DebugDraw<H> {
    /// Well-known scene path the overlay is mounted at.
    pub const PATH: &'static str = "/root/DebugDraw";

    /// Build the overlay and register the shared cube template with the host.
    pub fn new(host: Arc<H>, config: OverlayConfig) -> Result<Self, DrawError> {
        config
            .validate()
            .map_err(|e| DrawError::PreconditionViolation(e.to_string()))?;
        let cube_mesh = host.register_mesh(&CubeTemplate::unit().line_list())?;
        tracing::debug!(%cube_mesh, "registered wire cube template");

        Ok(Self {
            actions: ActionMap::with_toggle(config.toggle_action.clone()),
            text_overlay: TextOverlay::new(config.text_style()),
            visible: AtomicBool::new(config.start_visible),
            cube_mesh,
            box_pool: ResourcePool::new(),
            material_pool: ResourcePool::new(),
            boxes: ExpiringQueue::new(),
            lines: ExpiringQueue::new(),
            texts: Mutex::new(TextTable::new()),
            metrics: MetricsTable::new(),
            host,
            config,
        })
    }

    /// Build the overlay for the scene node at `path` and hand back a shared handle.
    ///
    /// Fails unless `path` is [`PATH`](Self::PATH); callers find the overlay
    /// through the handle rather than by looking the path up later.
    pub fn mount(host: Arc<H>, config: OverlayConfig, path: &str) -> Result<Arc<Self>, DrawError> {
        if path != Self::PATH {
            return Err(DrawError::PreconditionViolation(format!(
                "debug draw mounted at {path}, expected {}",
                Self::PATH
            )));
        }
        let overlay = Self::new(host, config)?;
        tracing::info!(path, "debug draw overlay mounted");
        Ok(Arc::new(overlay))
    }

    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn cube_mesh(&self) -> MeshId {
        self.cube_mesh
    }

    pub fn current_frame(&self) -> FrameIndex {
        self.host.frames_drawn()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Acquire)
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.store(visible, Ordering::Release);
    }

    /// Flip visibility. Returns the new state.
    pub fn toggle_visibility(&self) -> bool {
        !self.visible.fetch_xor(true, Ordering::AcqRel)
    }

    /// Wireframe box: the unit cube `0..1` placed by `transform`.
    pub fn draw_box(
        &self,
        transform: Transform,
        color: Color,
        frames: Option<u32>,
    ) -> Result<(), DrawError> {
        if !self.is_visible() {
            return Ok(());
        }

        let instance = self
            .box_pool
            .acquire_with(|| -> Result<InstanceId, DrawError> {
                let instance = self.host.spawn_mesh_instance(self.cube_mesh)?;
                tracing::debug!(%instance, "box pool empty, spawned new box instance");
                Ok(instance)
            })?;
        let material = match self.acquire_material(color) {
            Ok(material) => material,
            Err(e) => {
                self.park_box(instance);
                return Err(e);
            }
        };

        self.host.set_instance(
            instance,
            InstanceState {
                transform,
                material: Some(material),
                visible: true,
            },
        );
        self.boxes.push(TimedEntry::lingering(
            LiveShape { instance, material },
            self.current_frame(),
            frames.unwrap_or(self.config.geometry_linger_frames),
        ));
        Ok(())
    }

    /// Axis-aligned box spanning `min..min + extent`.
    pub fn draw_aabb(
        &self,
        min: Vec3,
        extent: Vec3,
        color: Color,
        frames: Option<u32>,
    ) -> Result<(), DrawError> {
        if !self.is_visible() {
            return Ok(());
        }
        self.draw_box(Transform::from_min_extent(min, extent), color, frames)
    }

    /// Axis-aligned box of `size` centered on `center`.
    pub fn draw_box_centered(
        &self,
        center: Vec3,
        size: Vec3,
        color: Color,
        frames: Option<u32>,
    ) -> Result<(), DrawError> {
        if !self.is_visible() {
            return Ok(());
        }
        self.draw_aabb(center - size * 0.5, size, color, frames)
    }

    pub fn draw_line(
        &self,
        a: Vec3,
        b: Vec3,
        color: Color,
        frames: Option<u32>,
    ) -> Result<(), DrawError> {
        if !self.is_visible() {
            return Ok(());
        }
        self.push_lines(LineGeometry::segment(a, b, color), color, frames)
    }

    /// Small star marker made of seven segments through `position`.
    pub fn draw_point(
        &self,
        position: Vec3,
        color: Color,
        frames: Option<u32>,
    ) -> Result<(), DrawError> {
        if !self.is_visible() {
            return Ok(());
        }
        self.push_lines(LineGeometry::point_marker(position, color), color, frames)
    }

    /// Line from `origin` along `direction` for `length` units.
    ///
    /// `direction` is normalized first; a zero or non-finite direction is rejected.
    pub fn draw_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        length: f32,
        color: Color,
        frames: Option<u32>,
    ) -> Result<(), DrawError> {
        if !self.is_visible() {
            return Ok(());
        }
        let Some(dir) = direction.try_normalize() else {
            tracing::warn!(?direction, "rejected ray with degenerate direction");
            return Err(DrawError::InvalidArgument(format!(
                "ray direction {direction} cannot be normalized"
            )));
        };
        self.draw_line(origin, origin + dir * length, color, frames)
    }

    /// Line from `start` to `hit` plus a point marker at `hit`.
    pub fn draw_ray_cast(
        &self,
        start: Vec3,
        hit: Vec3,
        color: Color,
        frames: Option<u32>,
    ) -> Result<(), DrawError> {
        if !self.is_visible() {
            return Ok(());
        }
        self.draw_line(start, hit, color, frames)?;
        self.draw_point(hit, color, frames)
    }

    /// Show `key: value` on screen. Setting a key again replaces its value and
    /// restarts its linger.
    pub fn set_text(&self, key: &str, value: impl Into<String>, frames: Option<u32>) {
        if !self.is_visible() {
            return;
        }
        let linger = frames.unwrap_or(self.config.text_linger_frames);
        let expires_at = self.current_frame().saturating_add(u64::from(linger));
        self.texts.lock().set(key, value, expires_at);
    }

    /// Add to a per-frame counter. Totals show up as text after the next sweep
    /// and the counter starts again from zero.
    pub fn increment_metric(&self, key: &str, amount: i64) {
        if !self.is_visible() {
            return;
        }
        self.metrics.increment(key, amount);
    }

    /// Paint the text table onto the host's 2D layer.
    pub fn draw_overlay(&self, canvas: &mut dyn Canvas2d) -> usize {
        let texts = self.texts.lock();
        self.text_overlay.draw(&texts, canvas)
    }

    pub fn text(&self, key: &str) -> Option<String> {
        self.texts.lock().get(key).map(|e| e.value.clone())
    }

    pub fn text_entries(&self) -> usize {
        self.texts.lock().len()
    }

    /// Pending (not yet folded) total for a metric.
    pub fn metric(&self, key: &str) -> Option<i64> {
        self.metrics.get(key)
    }

    pub fn live_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn live_boxes(&self) -> usize {
        self.boxes.len()
    }

    pub fn idle_boxes(&self) -> usize {
        self.box_pool.len()
    }

    pub fn idle_materials(&self) -> usize {
        self.material_pool.len()
    }

    /// Box instances currently on screen, oldest first.
    pub fn live_box_shapes(&self) -> Vec<LiveShape> {
        self.boxes.values()
    }

    /// Line instances currently on screen, oldest first.
    pub fn live_line_shapes(&self) -> Vec<LiveShape> {
        self.lines.values()
    }

    /// Destroy every live and idle resource and empty the text and metric tables.
    ///
    /// The cube template stays registered so the overlay remains usable.
    pub fn clear(&self) {
        let mut destroyed = 0usize;
        for entry in self.lines.drain().into_iter().chain(self.boxes.drain()) {
            self.host.destroy_instance(entry.value.instance);
            self.host.destroy_material(entry.value.material);
            destroyed += 1;
        }
        for instance in self.box_pool.drain() {
            self.host.destroy_instance(instance);
        }
        for material in self.material_pool.drain() {
            self.host.destroy_material(material);
        }
        self.texts.lock().clear();
        self.metrics.drain();
        tracing::debug!(destroyed, "cleared debug draw overlay");
    }

    fn acquire_material(&self, color: Color) -> Result<MaterialId, DrawError> {
        let material = self
            .material_pool
            .acquire_with(|| self.host.create_material())?;
        self.host.set_material_color(material, color);
        Ok(material)
    }

    fn push_lines(
        &self,
        geometry: LineGeometry,
        color: Color,
        frames: Option<u32>,
    ) -> Result<(), DrawError> {
        let material = self.acquire_material(color)?;
        let instance = match self.host.spawn_line_instance(geometry, material) {
            Ok(instance) => instance,
            Err(e) => {
                self.material_pool.release(material);
                return Err(e);
            }
        };
        self.lines.push(TimedEntry::lingering(
            LiveShape { instance, material },
            self.current_frame(),
            frames.unwrap_or(self.config.geometry_linger_frames),
        ));
        Ok(())
    }

    /// Hide a box instance and return it to the pool.
    pub(crate) fn park_box(&self, instance: InstanceId) {
        self.host.set_instance(instance, InstanceState::parked());
        self.box_pool.release(instance);
    }
}

impl<H: RenderHost> Drop for DebugDraw<H> {
    fn drop(&mut self) {
        self.clear();
        self.host.destroy_mesh(self.cube_mesh);
    }
}

impl<H: RenderHost> std::fmt::Debug for DebugDraw<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebugDraw")
            .field("visible", &self.is_visible())
            .field("live_boxes", &self.live_boxes())
            .field("live_lines", &self.live_lines())
            .field("idle_boxes", &self.idle_boxes())
            .field("idle_materials", &self.idle_materials())
            .field("text_entries", &self.text_entries())
            .finish()
    }
}
