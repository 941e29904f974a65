//! Uniform interior points by rejection sampling.
//!
//! Model
//! - Draw x and y independently and uniformly from the triangle's bounding box,
//!   keep the first candidate that passes the open interior test.
//! - Expected draws per accepted point: box area / triangle area (≈ 2.31 for the
//!   default triangle). The loop is capped by `max_attempts` so a broken region
//!   reports an error instead of spinning forever.

use std::fmt;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::cfg::MAX_ATTEMPTS;
use crate::geom::{Boundary, BoundingBox, Triangle};
use crate::Point;

/// Rejection loop ran out of attempts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleError {
    AttemptsExhausted { attempts: u64 },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttemptsExhausted { attempts } => {
                write!(f, "no interior point after {attempts} draws")
            }
        }
    }
}

impl std::error::Error for SampleError {}

/// Accepted point plus the number of draws it took (>= 1).
#[derive(Clone, Copy, Debug)]
pub struct Accepted {
    pub point: Point,
    pub draws: u64,
}

/// Box sampler bound to one triangle.
#[derive(Clone, Debug)]
pub struct PointSampler {
    triangle: Triangle,
    xs: Uniform<f64>,
    ys: Uniform<f64>,
    max_attempts: u64,
}

impl PointSampler {
    pub fn new(triangle: Triangle, max_attempts: u64) -> Self {
        Self::with_box(triangle, triangle.bounding_box(), max_attempts)
    }

    /// Sample from a caller-chosen box. The box should cover the triangle, otherwise
    /// the accepted points are uniform only on the overlap.
    pub fn with_box(triangle: Triangle, bbox: BoundingBox, max_attempts: u64) -> Self {
        Self {
            triangle,
            xs: Uniform::new_inclusive(bbox.min.x, bbox.max.x),
            ys: Uniform::new_inclusive(bbox.min.y, bbox.max.y),
            max_attempts,
        }
    }

    #[inline]
    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    /// Draw until a strictly interior point shows up.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Accepted, SampleError> {
        for draws in 1..=self.max_attempts {
            let p = Point::new(self.xs.sample(rng), self.ys.sample(rng));
            if self.triangle.contains(p, Boundary::Open) {
                return Ok(Accepted { point: p, draws });
            }
        }
        Err(SampleError::AttemptsExhausted {
            attempts: self.max_attempts,
        })
    }
}

/// One interior point of `triangle` with the default attempt cap.
pub fn generate_random_point<R: Rng + ?Sized>(
    triangle: &Triangle,
    rng: &mut R,
) -> Result<Point, SampleError> {
    PointSampler::new(*triangle, MAX_ATTEMPTS)
        .sample(rng)
        .map(|a| a.point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn accepted_points_are_strictly_interior() {
        let tri = Triangle::default();
        let sampler = PointSampler::new(tri, MAX_ATTEMPTS);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let a = sampler.sample(&mut rng).unwrap();
            assert!(a.draws >= 1);
            assert!(tri.contains(a.point, Boundary::Open));
            assert!(a.point.x > 0.0 && a.point.x < 3.0);
            assert!(a.point.y > 0.0 && a.point.y < tri.height());
        }
    }

    #[test]
    fn acceptance_rate_matches_area_ratio() {
        let tri = Triangle::default();
        let sampler = PointSampler::new(tri, MAX_ATTEMPTS);
        let mut rng = StdRng::seed_from_u64(11);
        let n = 50_000u64;
        let draws: u64 = (0..n).map(|_| sampler.sample(&mut rng).unwrap().draws).sum();
        let mean = draws as f64 / n as f64;
        let expected = tri.bounding_box().area() / tri.area();
        assert!((mean - expected).abs() < 0.05, "mean draws {mean}, expected {expected}");
    }

    #[test]
    fn box_outside_triangle_exhausts_attempts() {
        let tri = Triangle::default();
        let far = BoundingBox {
            min: Point::new(10.0, 10.0),
            max: Point::new(11.0, 11.0),
        };
        let sampler = PointSampler::with_box(tri, far, 25);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            sampler.sample(&mut rng).unwrap_err(),
            SampleError::AttemptsExhausted { attempts: 25 }
        );
    }

    #[test]
    fn same_seed_same_point() {
        let tri = Triangle::default();
        let p1 = generate_random_point(&tri, &mut StdRng::seed_from_u64(3)).unwrap();
        let p2 = generate_random_point(&tri, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(p1, p2);
    }

    proptest! {
        #[test]
        fn any_seed_any_side_stays_inside(seed in any::<u64>(), side in 0.1f64..100.0) {
            let tri = Triangle::equilateral(side);
            let mut rng = StdRng::seed_from_u64(seed);
            let p = generate_random_point(&tri, &mut rng).unwrap();
            prop_assert!(tri.contains(p, Boundary::Open));
        }
    }
}
