//! Monte Carlo estimate of the "largest sub-triangle" probability.
//!
//! A point P is drawn uniformly inside the equilateral triangle ABC. We ask how
//! often the sub-triangle APB (the one resting on the base edge) has a strictly
//! larger area than both APC and BPC.
//!
//! Layout
//! - `geom`: `Line` (slope/intercept half-planes) and the `Triangle` built from three of them.
//! - `sampler`: bounded rejection sampling of strictly interior points.
//! - `predicate`: sub-triangle areas via perpendicular distances, with the
//!   Viviani sum check (distances add up to the height).
//! - `fraction`: exact reduced rationals used to average run results.
//! - `sim`: the driver (independent seeded runs, observer hooks, reports).
//! - `cfg`: fixed defaults and the run configuration.

pub mod cfg;
pub mod fraction;
pub mod geom;
pub mod predicate;
pub mod sampler;
pub mod sim;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Points in the plane. Kept as a plain vector, matching the rest of the geometry.
pub type Point = nalgebra::Vector2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{DupScan, InvalidCfg, SimCfg};
    pub use crate::fraction::{average, Fraction, FractionError, Ratio};
    pub use crate::geom::{Boundary, BoundingBox, Line, Triangle};
    pub use crate::predicate::{sub_triangle_areas, test_statement, ConsistencyViolation, SubAreas};
    pub use crate::sampler::{PointSampler, SampleError};
    pub use crate::sim::{
        run_once, simulate, NoopObserver, Observer, RunOutcome, RunReport, RunToken,
        SimulationError, SimulationReport,
    };
    pub use crate::Point;
}
