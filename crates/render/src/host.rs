use debugdraw_common::{Color, DrawError, FrameIndex, Transform};
use glam::Vec2;

use crate::geometry::LineGeometry;
use crate::handle::{InstanceId, MaterialId, MeshId};

/// Visual state applied to a scene instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceState {
    pub transform: Transform,
    /// `None` detaches the material, used when parking an idle instance.
    pub material: Option<MaterialId>,
    pub visible: bool,
}

impl InstanceState {
    /// Hidden, material-less state for instances waiting in a pool.
    pub fn parked() -> Self {
        Self {
            transform: Transform::default(),
            material: None,
            visible: false,
        }
    }
}

/// What the overlay needs from the host engine's 3D scene.
///
/// Methods take `&self` so draw calls can be issued from producer threads;
/// implementations synchronize internally. Creation calls fail with
/// [`DrawError::ResourceExhausted`] when the host is out of resources.
pub trait RenderHost: Send + Sync {
    /// Monotonic count of frames the host has drawn.
    fn frames_drawn(&self) -> FrameIndex;

    /// Upload shared line geometry that instances can reference.
    fn register_mesh(&self, geometry: &LineGeometry) -> Result<MeshId, DrawError>;

    /// Release geometry registered with [`register_mesh`](Self::register_mesh).
    fn destroy_mesh(&self, mesh: MeshId);

    /// Create an unshaded material that uses vertex color as albedo.
    fn create_material(&self) -> Result<MaterialId, DrawError>;

    fn set_material_color(&self, material: MaterialId, color: Color);

    fn destroy_material(&self, material: MaterialId);

    /// Attach a new instance of a shared mesh to the scene.
    fn spawn_mesh_instance(&self, mesh: MeshId) -> Result<InstanceId, DrawError>;

    /// Attach a new instance owning its own line geometry.
    fn spawn_line_instance(
        &self,
        geometry: LineGeometry,
        material: MaterialId,
    ) -> Result<InstanceId, DrawError>;

    fn set_instance(&self, instance: InstanceId, state: InstanceState);

    /// Detach and free an instance.
    fn destroy_instance(&self, instance: InstanceId);

    /// Invalidate the 2D overlay layer so it redraws this frame.
    fn request_overlay_redraw(&self);
}

/// Screen-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }
}

/// Font measurement supplied by the host.
pub trait FontMetrics {
    /// On-screen size of `text` in the overlay font.
    fn string_size(&self, text: &str) -> Vec2;
    /// Distance from the top of a line to the baseline.
    fn ascent(&self) -> f32;
    /// Full line height.
    fn height(&self) -> f32;
}

/// 2D drawing primitives for the text layer.
pub trait Canvas2d: FontMetrics {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Draw `text` with its baseline starting at `position`.
    fn draw_string(&mut self, position: Vec2, text: &str, color: Color);
}
