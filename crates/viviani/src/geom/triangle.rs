//! The equilateral triangle sampled by the simulation.

use std::fmt;

use super::line::{Boundary, Line};
use crate::{cfg::SIDE, Point};

/// Axis-aligned box `[min.x, max.x] × [min.y, max.y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    #[inline]
    pub fn area(&self) -> f64 {
        (self.max.x - self.min.x) * (self.max.y - self.min.y)
    }
}

/// Equilateral triangle with the base on the x axis and the left vertex at the origin.
///
/// Vertices: `(0, 0)`, `(side, 0)`, `(side/2, side·√3/2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub base: Line,
    pub left: Line,
    pub right: Line,
    pub side: f64,
}

impl Default for Triangle {
    fn default() -> Self {
        Self::equilateral(SIDE)
    }
}

impl Triangle {
    /// Left edge `y = √3·x`, right edge `y = −√3·x + side·√3`, base `y = 0`.
    pub fn equilateral(side: f64) -> Self {
        let sqrt3 = 3f64.sqrt();
        Self {
            base: Line::horizontal(0.0),
            left: Line::new(sqrt3, 0.0),
            right: Line::new(-sqrt3, side * sqrt3),
            side,
        }
    }

    /// Whole-triangle area `side²·√3/4`.
    #[inline]
    pub fn area(&self) -> f64 {
        self.side * self.side * 3f64.sqrt() / 4.0
    }

    /// Distance from the base to the apex.
    #[inline]
    pub fn height(&self) -> f64 {
        self.side * 3f64.sqrt() / 2.0
    }

    /// Square `[0, side]²`; it contains the triangle since the height is below `side`.
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            min: Point::new(0.0, 0.0),
            max: Point::new(self.side, self.side),
        }
    }

    /// Below both slanted edges and above the base, under the given boundary policy.
    #[inline]
    pub fn contains(&self, p: Point, boundary: Boundary) -> bool {
        self.left.is_below(p.x, p.y, boundary)
            && self.right.is_below(p.x, p.y, boundary)
            && self.base.is_above(p.x, p.y, boundary)
    }

    /// Pairwise intersections of the edges: (base∩left, base∩right, left∩right).
    pub fn vertices(&self) -> Option<[Point; 3]> {
        Some([
            self.base.intersection(&self.left)?,
            self.base.intersection(&self.right)?,
            self.left.intersection(&self.right)?,
        ])
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "base: {}", self.base)?;
        writeln!(f, "left: {}", self.left)?;
        write!(f, "right: {}", self.right)
    }
}
