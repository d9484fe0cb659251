use debugdraw_common::Color;
use glam::Vec3;

/// Half-length of each arm of the point marker.
pub const POINT_MARKER_SIZE: f32 = 0.06;

/// A line-list vertex: every consecutive pair forms one segment.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }
}

/// Uniformly colored line-list geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineGeometry {
    vertices: Vec<LineVertex>,
}

impl LineGeometry {
    /// Build from explicit endpoints. `points` must have an even length.
    pub fn from_points(points: &[Vec3], color: Color) -> Self {
        debug_assert!(points.len() % 2 == 0, "line list needs vertex pairs");
        Self {
            vertices: points.iter().map(|&p| LineVertex::new(p, color)).collect(),
        }
    }

    /// A single segment from `a` to `b`.
    pub fn segment(a: Vec3, b: Vec3, color: Color) -> Self {
        Self::from_points(&[a, b], color)
    }

    /// Star-shaped marker centered on `p`: three axis crosses plus four
    /// diagonals through the cube corners.
    pub fn point_marker(p: Vec3, color: Color) -> Self {
        let s = POINT_MARKER_SIZE;
        let d = std::f32::consts::FRAC_PI_4.sin() * s;
        let offsets = [
            Vec3::Y * s,
            Vec3::NEG_Y * s,
            Vec3::NEG_X * s,
            Vec3::X * s,
            Vec3::NEG_Z * s,
            Vec3::Z * s,
            Vec3::splat(d),
            Vec3::splat(-d),
            Vec3::new(-d, d, -d),
            Vec3::new(d, -d, d),
            Vec3::new(d, d, -d),
            Vec3::new(-d, -d, d),
            Vec3::new(-d, d, d),
            Vec3::new(d, -d, -d),
        ];
        let points: Vec<Vec3> = offsets.iter().map(|&o| p + o).collect();
        Self::from_points(&points, color)
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Segments as position pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.vertices
            .chunks_exact(2)
            .map(|pair| (Vec3::from(pair[0].position), Vec3::from(pair[1].position)))
    }

    /// Raw vertex bytes for upload into a vertex buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Unit wireframe cube spanning `0..1` on every axis.
///
/// Built once and registered with the host; every box instance references it
/// through its own transform.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeTemplate {
    corners: [Vec3; 8],
    edges: [[u8; 2]; 12],
}

impl CubeTemplate {
    pub fn unit() -> Self {
        Self {
            corners: [
                Vec3::ZERO,
                Vec3::X,
                Vec3::X + Vec3::Z,
                Vec3::Z,
                Vec3::Y,
                Vec3::Y + Vec3::X,
                Vec3::Y + Vec3::X + Vec3::Z,
                Vec3::Y + Vec3::Z,
            ],
            edges: [
                // bottom
                [0, 1],
                [1, 2],
                [2, 3],
                [3, 0],
                // top
                [4, 5],
                [5, 6],
                [6, 7],
                [7, 4],
                // verticals
                [0, 4],
                [1, 5],
                [2, 6],
                [3, 7],
            ],
        }
    }

    pub fn corners(&self) -> &[Vec3; 8] {
        &self.corners
    }

    pub fn edges(&self) -> &[[u8; 2]; 12] {
        &self.edges
    }

    /// Expand the indexed edges into a 24-vertex line list.
    pub fn line_list(&self) -> LineGeometry {
        let points: Vec<Vec3> = self
            .edges
            .iter()
            .flat_map(|&[a, b]| [self.corners[a as usize], self.corners[b as usize]])
            .collect();
        LineGeometry::from_points(&points, Color::WHITE)
    }
}

impl Default for CubeTemplate {
    fn default() -> Self {
        Self::unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_has_two_vertices() {
        let g = LineGeometry::segment(Vec3::ZERO, Vec3::X, Color::RED);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.vertices()[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(g.vertices()[0].color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn point_marker_shape() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let g = LineGeometry::point_marker(p, Color::GREEN);
        assert_eq!(g.vertex_count(), 14);
        assert_eq!(g.segment_count(), 7);

        let d = std::f32::consts::FRAC_PI_4.sin() * POINT_MARKER_SIZE;
        for (i, (a, b)) in g.segments().enumerate() {
            // every arm passes through the center
            assert!(((a + b) * 0.5 - p).length() < 1e-6, "segment {i}");
            let half = (a - p).length();
            let expected = if i < 3 {
                POINT_MARKER_SIZE
            } else {
                (3.0 * d * d).sqrt()
            };
            assert!((half - expected).abs() < 1e-6, "segment {i}");
        }
    }

    #[test]
    fn cube_has_twelve_unit_edges() {
        let cube = CubeTemplate::unit();
        let lines = cube.line_list();
        assert_eq!(lines.vertex_count(), 24);
        for (a, b) in lines.segments() {
            assert!(((a - b).length() - 1.0).abs() < 1e-6);
        }
        for c in cube.corners() {
            assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
        }
    }

    #[test]
    fn cube_corners_are_distinct() {
        let cube = CubeTemplate::unit();
        for (i, a) in cube.corners().iter().enumerate() {
            for b in &cube.corners()[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn bytes_cover_every_vertex() {
        let g = LineGeometry::segment(Vec3::ZERO, Vec3::ONE, Color::WHITE);
        assert_eq!(g.as_bytes().len(), 2 * std::mem::size_of::<LineVertex>());
        assert_eq!(std::mem::size_of::<LineVertex>(), 28);
    }
}
