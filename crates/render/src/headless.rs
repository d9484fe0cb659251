use std::collections::BTreeMap;
use std::fmt::Write as _;

use debugdraw_common::{Color, DrawError, FrameIndex, Transform};
use glam::{Vec2, Vec3};
use parking_lot::Mutex;

use crate::geometry::LineGeometry;
use crate::handle::{InstanceId, MaterialId, MeshId};
use crate::host::{Canvas2d, FontMetrics, InstanceState, Rect, RenderHost};

/// What an instance draws.
#[derive(Debug, Clone, PartialEq)]
pub enum InstanceSource {
    Mesh(MeshId),
    Lines(LineGeometry),
}

/// Recorded state of one scene instance.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceRecord {
    pub source: InstanceSource,
    pub transform: Transform,
    pub material: Option<MaterialId>,
    pub visible: bool,
}

#[derive(Debug, Default)]
struct HeadlessState {
    frame: FrameIndex,
    next_id: u64,
    meshes: BTreeMap<MeshId, LineGeometry>,
    materials: BTreeMap<MaterialId, Color>,
    instances: BTreeMap<InstanceId, InstanceRecord>,
    instance_capacity: Option<usize>,
    instances_created: u64,
    instances_destroyed: u64,
    materials_created: u64,
    redraw_requests: u64,
}

impl HeadlessState {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn insert_instance(&mut self, record: InstanceRecord) -> Result<InstanceId, DrawError> {
        if let Some(cap) = self.instance_capacity {
            if self.instances.len() >= cap {
                tracing::debug!(cap, "headless host out of instances");
                return Err(DrawError::ResourceExhausted(format!(
                    "instance capacity {cap} reached"
                )));
            }
        }
        let id = InstanceId(self.next_id());
        self.instances.insert(id, record);
        self.instances_created += 1;
        Ok(id)
    }
}

/// Render host that records scene changes instead of drawing them.
///
/// Owns a frame counter advanced with [`advance_frame`](Self::advance_frame).
#[derive(Debug, Default)]
pub struct HeadlessHost {
    state: Mutex<HeadlessState>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host that refuses to hold more than `capacity` live instances.
    pub fn with_instance_capacity(capacity: usize) -> Self {
        let host = Self::new();
        host.state.lock().instance_capacity = Some(capacity);
        host
    }

    /// Finish the current frame. Returns the new frame count.
    pub fn advance_frame(&self) -> FrameIndex {
        let mut state = self.state.lock();
        state.frame += 1;
        state.frame
    }

    pub fn instance_count(&self) -> usize {
        self.state.lock().instances.len()
    }

    pub fn visible_instance_count(&self) -> usize {
        self.state
            .lock()
            .instances
            .values()
            .filter(|r| r.visible)
            .count()
    }

    pub fn material_count(&self) -> usize {
        self.state.lock().materials.len()
    }

    pub fn mesh_count(&self) -> usize {
        self.state.lock().meshes.len()
    }

    pub fn instances_created(&self) -> u64 {
        self.state.lock().instances_created
    }

    pub fn instances_destroyed(&self) -> u64 {
        self.state.lock().instances_destroyed
    }

    pub fn materials_created(&self) -> u64 {
        self.state.lock().materials_created
    }

    pub fn redraw_requests(&self) -> u64 {
        self.state.lock().redraw_requests
    }

    pub fn instance(&self, id: InstanceId) -> Option<InstanceRecord> {
        self.state.lock().instances.get(&id).cloned()
    }

    pub fn material_color(&self, id: MaterialId) -> Option<Color> {
        self.state.lock().materials.get(&id).copied()
    }

    /// World-space segments of every visible instance, with the color of its material.
    pub fn world_segments(&self) -> Vec<(Vec3, Vec3, Color)> {
        let state = self.state.lock();
        let mut out = Vec::new();
        for record in state.instances.values().filter(|r| r.visible) {
            let color = record
                .material
                .and_then(|m| state.materials.get(&m).copied())
                .unwrap_or_default();
            let geometry = match &record.source {
                InstanceSource::Mesh(mesh) => match state.meshes.get(mesh) {
                    Some(g) => g,
                    None => continue,
                },
                InstanceSource::Lines(g) => g,
            };
            for (a, b) in geometry.segments() {
                out.push((
                    record.transform.transform_point(a),
                    record.transform.transform_point(b),
                    color,
                ));
            }
        }
        out
    }

    /// Human-readable dump of the recorded scene.
    pub fn describe(&self) -> String {
        let state = self.state.lock();
        let mut out = String::new();
        let _ = writeln!(out, "=== Headless scene (frame={}) ===", state.frame);
        let _ = writeln!(
            out,
            "Instances: {} Materials: {} Meshes: {}",
            state.instances.len(),
            state.materials.len(),
            state.meshes.len()
        );
        for (id, record) in &state.instances {
            let p = record.transform.position;
            let s = record.transform.scale;
            let kind = match &record.source {
                InstanceSource::Mesh(mesh) => format!("{mesh}"),
                InstanceSource::Lines(g) => format!("lines({})", g.segment_count()),
            };
            let _ = writeln!(
                out,
                "  [{id}] {kind} pos=({:.2}, {:.2}, {:.2}) scale=({:.2}, {:.2}, {:.2}){}",
                p.x,
                p.y,
                p.z,
                s.x,
                s.y,
                s.z,
                if record.visible { "" } else { " hidden" }
            );
        }
        out
    }
}

impl RenderHost for HeadlessHost {
    fn frames_drawn(&self) -> FrameIndex {
        self.state.lock().frame
    }

    fn register_mesh(&self, geometry: &LineGeometry) -> Result<MeshId, DrawError> {
        let mut state = self.state.lock();
        let id = MeshId(state.next_id());
        state.meshes.insert(id, geometry.clone());
        Ok(id)
    }

    fn destroy_mesh(&self, mesh: MeshId) {
        self.state.lock().meshes.remove(&mesh);
    }

    fn create_material(&self) -> Result<MaterialId, DrawError> {
        let mut state = self.state.lock();
        let id = MaterialId(state.next_id());
        state.materials.insert(id, Color::WHITE);
        state.materials_created += 1;
        Ok(id)
    }

    fn set_material_color(&self, material: MaterialId, color: Color) {
        match self.state.lock().materials.get_mut(&material) {
            Some(c) => *c = color,
            None => tracing::warn!(%material, "color set on unknown material"),
        }
    }

    fn destroy_material(&self, material: MaterialId) {
        self.state.lock().materials.remove(&material);
    }

    fn spawn_mesh_instance(&self, mesh: MeshId) -> Result<InstanceId, DrawError> {
        self.state.lock().insert_instance(InstanceRecord {
            source: InstanceSource::Mesh(mesh),
            transform: Transform::default(),
            material: None,
            visible: true,
        })
    }

    fn spawn_line_instance(
        &self,
        geometry: LineGeometry,
        material: MaterialId,
    ) -> Result<InstanceId, DrawError> {
        self.state.lock().insert_instance(InstanceRecord {
            source: InstanceSource::Lines(geometry),
            transform: Transform::default(),
            material: Some(material),
            visible: true,
        })
    }

    fn set_instance(&self, instance: InstanceId, update: InstanceState) {
        match self.state.lock().instances.get_mut(&instance) {
            Some(record) => {
                record.transform = update.transform;
                record.material = update.material;
                record.visible = update.visible;
            }
            None => tracing::warn!(%instance, "state set on unknown instance"),
        }
    }

    fn destroy_instance(&self, instance: InstanceId) {
        let mut state = self.state.lock();
        if state.instances.remove(&instance).is_some() {
            state.instances_destroyed += 1;
        }
    }

    fn request_overlay_redraw(&self) {
        self.state.lock().redraw_requests += 1;
    }
}

/// A recorded 2D draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCommand {
    FillRect { rect: Rect, color: Color },
    Text {
        position: Vec2,
        text: String,
        color: Color,
    },
}

/// Canvas with a fixed-width font that records draw calls.
#[derive(Debug, Clone)]
pub struct MonospaceCanvas {
    glyph_width: f32,
    line_height: f32,
    ascent: f32,
    commands: Vec<CanvasCommand>,
}

impl MonospaceCanvas {
    pub fn new() -> Self {
        Self::with_metrics(7.0, 14.0, 11.0)
    }

    pub fn with_metrics(glyph_width: f32, line_height: f32, ascent: f32) -> Self {
        Self {
            glyph_width,
            line_height,
            ascent,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[CanvasCommand] {
        &self.commands
    }

    /// Text of every string drawn so far, in draw order.
    pub fn lines(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                CanvasCommand::Text { text, .. } => Some(text.as_str()),
                CanvasCommand::FillRect { .. } => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Default for MonospaceCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl FontMetrics for MonospaceCanvas {
    fn string_size(&self, text: &str) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * self.glyph_width, self.line_height)
    }

    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn height(&self) -> f32 {
        self.line_height
    }
}

impl Canvas2d for MonospaceCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(CanvasCommand::FillRect { rect, color });
    }

    fn draw_string(&mut self, position: Vec2, text: &str, color: Color) {
        self.commands.push(CanvasCommand::Text {
            position,
            text: text.to_owned(),
            color,
        });
    }
}
