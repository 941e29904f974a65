//! Sub-triangle areas and the "base sub-triangle is largest" test.
//!
//! Each edge of the triangle together with the point P spans a sub-triangle whose
//! base is one side and whose height is P's perpendicular distance to that edge.
//! For an interior point the three areas add up to the whole area (Viviani); a
//! gap larger than the tolerance means the geometry is broken and is fatal.

use std::fmt;

use crate::cfg::SIDE;
use crate::geom::{Line, Triangle};
use crate::Point;

/// Area sum check failed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConsistencyViolation {
    pub point: Point,
    pub computed: f64,
    pub expected: f64,
    /// Gap actually allowed for this triangle (see `test_statement`).
    pub tolerance: f64,
}

impl fmt::Display for ConsistencyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sub-triangle areas at ({}, {}) sum to {}, expected {} (tolerance {})",
            self.point.x, self.point.y, self.computed, self.expected, self.tolerance
        )
    }
}

impl std::error::Error for ConsistencyViolation {}

/// Areas of the sub-triangles resting on each edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubAreas {
    pub base: f64,
    pub left: f64,
    pub right: f64,
}

impl SubAreas {
    #[inline]
    pub fn total(&self) -> f64 {
        self.base + self.left + self.right
    }

    /// Base sub-triangle strictly larger than both others.
    #[inline]
    pub fn base_is_largest(&self) -> bool {
        self.base > self.left && self.base > self.right
    }
}

/// Shortest distance from `p` to `line`.
///
/// Uses the right triangle formed by `p` and the line's points straight above/below
/// and level with it: the distance is its height over the hypotenuse,
/// `Δx·Δy / √(Δx² + Δy²)`. Horizontal lines reduce to the vertical gap.
pub fn perpendicular_distance(line: &Line, p: Point) -> f64 {
    let dy = (line.y_at(p.x) - p.y).abs();
    let Some(x_on_line) = line.x_at(p.y) else {
        return dy;
    };
    let dx = (x_on_line - p.x).abs();
    let hyp = dx.hypot(dy);
    if hyp == 0.0 {
        return 0.0;
    }
    dx * dy / hyp
}

/// Areas of the three sub-triangles formed by `p` and the edges of `triangle`.
pub fn sub_triangle_areas(triangle: &Triangle, p: Point) -> SubAreas {
    let area = |line: &Line| triangle.side * perpendicular_distance(line, p) / 2.0;
    SubAreas {
        base: area(&triangle.base),
        left: area(&triangle.left),
        right: area(&triangle.right),
    }
}

/// Area of `triangle` relative to the side-`SIDE` triangle, never below 1.
#[inline]
fn area_scale(triangle: &Triangle) -> f64 {
    (triangle.side / SIDE).powi(2).max(1.0)
}

/// Does the sub-triangle on the base edge beat both others?
///
/// Errors with `ConsistencyViolation` if the areas do not add up to the whole
/// triangle within the allowed gap (a NaN sum counts as a violation).
///
/// `tolerance` is the absolute gap for triangles up to side `SIDE`. Larger
/// triangles scale it with their area, since the rounding error of the sum
/// grows with the magnitude of the areas.
pub fn test_statement(
    triangle: &Triangle,
    p: Point,
    tolerance: f64,
) -> Result<bool, ConsistencyViolation> {
    let areas = sub_triangle_areas(triangle, p);
    let computed = areas.total();
    let expected = triangle.area();
    let allowed = tolerance * area_scale(triangle);
    if !((computed - expected).abs() <= allowed) {
        return Err(ConsistencyViolation {
            point: p,
            computed,
            expected,
            tolerance: allowed,
        });
    }
    Ok(areas.base_is_largest())
}
