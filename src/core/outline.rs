use super::constants::{OUTLINE_SAMPLES_MAX, OUTLINE_SAMPLES_MIN, OUTLINE_SAMPLE_SPACING};
use glam::Vec2;

/// 2D affine transform in SVG matrix layout (a b c d e f), as returned by
/// an element's screen CTM.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2d {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform2d {
    pub const IDENTITY: Transform2d = Transform2d {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }
}

/// Closed polyline outline of a scene shape, in surface-local CSS pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    pub points: Vec<Vec2>,
}

impl Outline {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Outline from an ordered polygon vertex list: each vertex goes through the
/// element's screen transform, then into surface coordinates. Fewer than
/// three vertices cannot enclose anything.
pub fn polygon_outline(vertices: &[Vec2], ctm: &Transform2d, origin: Vec2) -> Option<Outline> {
    if vertices.len() < 3 {
        return None;
    }
    let points = vertices.iter().map(|v| ctm.apply(*v) - origin).collect();
    Some(Outline { points })
}

/// Number of samples to take along a curved shape of the given path length.
/// More points for longer outlines, clamped to a sane range.
pub fn sample_count(total_length: f32) -> usize {
    if !total_length.is_finite() || total_length <= 0.0 {
        return OUTLINE_SAMPLES_MIN;
    }
    ((total_length / OUTLINE_SAMPLE_SPACING) as usize)
        .clamp(OUTLINE_SAMPLES_MIN, OUTLINE_SAMPLES_MAX)
}

/// Bounding-box fallback when a shape's length cannot be determined:
/// a 4-point closed rectangle in surface coordinates.
pub fn rect_outline(x: f32, y: f32, w: f32, h: f32) -> Outline {
    Outline {
        points: vec![
            Vec2::new(x, y),
            Vec2::new(x + w, y),
            Vec2::new(x + w, y + h),
            Vec2::new(x, y + h),
        ],
    }
}
