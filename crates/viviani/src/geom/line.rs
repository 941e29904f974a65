//! Slope/intercept lines and their half-plane predicates.

use std::fmt;

use crate::Point;

/// What a half-plane test answers for a point lying exactly on the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Points on the line are outside.
    #[default]
    Open,
    /// Points on the line are inside.
    Closed,
}

impl Boundary {
    #[inline]
    fn allows_equal(self) -> bool {
        matches!(self, Boundary::Closed)
    }
}

/// Line `y = slope·x + intercept`. Vertical lines are not representable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

impl Line {
    #[inline]
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Horizontal line `y = c`.
    #[inline]
    pub fn horizontal(c: f64) -> Self {
        Self::new(0.0, c)
    }

    /// Line through two points; `None` if they share an x coordinate.
    pub fn through(p: Point, q: Point) -> Option<Self> {
        let dx = p.x - q.x;
        if dx == 0.0 {
            return None;
        }
        let slope = (p.y - q.y) / dx;
        let line = Self::new(slope, p.y - slope * p.x);
        (slope.is_finite() && line.intercept.is_finite()).then_some(line)
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.slope == 0.0
    }

    /// y coordinate of the line at `x`.
    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// x coordinate where the line reaches height `y`; `None` for horizontal lines.
    #[inline]
    pub fn x_at(&self, y: f64) -> Option<f64> {
        if self.is_horizontal() {
            None
        } else {
            Some((y - self.intercept) / self.slope)
        }
    }

    /// Is `(x, y)` above the line?
    #[inline]
    pub fn is_above(&self, x: f64, y: f64, boundary: Boundary) -> bool {
        let y_line = self.y_at(x);
        if y_line == y {
            return boundary.allows_equal();
        }
        y_line < y
    }

    /// Is `(x, y)` below the line?
    #[inline]
    pub fn is_below(&self, x: f64, y: f64, boundary: Boundary) -> bool {
        let y_line = self.y_at(x);
        if y_line == y {
            return boundary.allows_equal();
        }
        y_line > y
    }

    /// Crossing point with `other`; `None` for parallel lines.
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        let dm = self.slope - other.slope;
        if dm == 0.0 {
            return None;
        }
        let x = (other.intercept - self.intercept) / dm;
        Some(Point::new(x, self.y_at(x)))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {}x + {}", self.slope, self.intercept)
    }
}
