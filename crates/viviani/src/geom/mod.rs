//! Planar geometry for the sampled triangle.
//!
//! Purpose
//! - `Line`: non-vertical line `y = m·x + b` with above/below half-plane tests.
//! - `Triangle`: equilateral triangle described by its base, left and right lines.
//!
//! Boundary convention
//! - Half-plane tests take a `Boundary` policy deciding what happens for points
//!   exactly on the line. The triangle's interior test uses `Boundary::Open` on
//!   all three edges, so only strictly interior points are accepted.

mod line;
mod triangle;

pub use line::{Boundary, Line};
pub use triangle::{BoundingBox, Triangle};

#[cfg(test)]
mod tests;
