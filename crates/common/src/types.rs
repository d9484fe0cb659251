use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Frame counter value as reported by the host renderer.
pub type FrameIndex = u64;

/// Default number of frames a text entry stays on screen.
pub const TEXT_LINGER_FRAMES: u32 = 5;

/// Default number of frames boxes, lines, points and rays stay on screen.
pub const LINES_LINGER_FRAMES: u32 = 120;

/// Foreground color of overlay text.
pub const TEXT_COLOR: Color = Color::WHITE;

/// Background color behind each overlay text line.
pub const TEXT_BG_COLOR: Color = Color::new(0.09, 0.1, 0.13, 0.8);

/// Linear RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Spatial transform: position, rotation, scale.
///
/// Applied as scale, then rotation, then translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Axis-aligned transform mapping the unit cube onto `min..min + extent`.
    pub fn from_min_extent(min: Vec3, extent: Vec3) -> Self {
        Self {
            position: min,
            rotation: Quat::IDENTITY,
            scale: extent,
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.position + self.rotation * (self.scale * p)
    }
}
