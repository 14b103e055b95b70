//! Geometric containment tests over 2D court coordinates.
//!
//! Provides the point type and the pure containment predicates used by the
//! region classifier: even-odd ray casting for polygons and Euclidean
//! distance for circles.

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Test whether a point lies inside a simple polygon.
///
/// Standard even-odd ray casting: a horizontal ray from the point crosses
/// each edge (including the wrap-around edge from the last vertex back to
/// the first); an odd crossing count means the point is inside. Points
/// exactly on an edge may land on either side of the comparison, but the
/// result is deterministic for identical input.
///
/// Degenerate polygons with fewer than 3 vertices contain no point.
#[must_use]
pub fn point_in_polygon(point: Point, vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let vi = vertices[i];
        let vj = vertices[j];

        if (vi.y > point.y) != (vj.y > point.y) {
            let crossing_x = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
            if point.x < crossing_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Test whether a point lies inside (or on) a circle.
#[must_use]
pub fn point_in_circle(point: Point, center: Point, radius: f32) -> bool {
    point.distance(center) <= radius
}
