//! Fixed defaults and the simulation configuration.
//!
//! Policy
//! - The constants reproduce the standard experiment (4 runs × 3,000,000 points).
//! - Callers override them through `SimCfg`; nothing reads the environment.

use std::fmt;

/// Accepted sample points per run.
pub const N_POINTS: u64 = 3_000_000;
/// Independent runs averaged into the final estimate.
pub const N_ITERATIONS: usize = 4;
/// Maximum allowed gap between the summed sub-triangle areas and the triangle area.
pub const AREA_TOLERANCE: f64 = 1e-10;
/// Side length of the sampled equilateral triangle.
pub const SIDE: f64 = 3.0;
/// Rejection draws allowed per accepted point before the sampler gives up.
/// Acceptance probability is ~0.43 for the default box, so this is never hit in practice.
pub const MAX_ATTEMPTS: u64 = 1_000_000;
/// Master seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 0x5eed_7a1e;

/// Duplicate-point scan performed within a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DupScan {
    /// Skip the scan; memory use stays constant per run.
    Off,
    /// Remember the bit pattern of every accepted point and stop the run on a repeat.
    #[default]
    Full,
}

/// Simulation configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimCfg {
    pub points_per_run: u64,
    pub iterations: usize,
    pub tolerance: f64,
    pub max_attempts: u64,
    pub seed: u64,
    pub dup_scan: DupScan,
    /// Observer progress events fire every `progress_stride` accepted points (0 disables them).
    pub progress_stride: u64,
}

impl Default for SimCfg {
    fn default() -> Self {
        Self {
            points_per_run: N_POINTS,
            iterations: N_ITERATIONS,
            tolerance: AREA_TOLERANCE,
            max_attempts: MAX_ATTEMPTS,
            seed: DEFAULT_SEED,
            dup_scan: DupScan::Full,
            progress_stride: N_POINTS / 10,
        }
    }
}

/// Rejected simulation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidCfg {
    pub reason: String,
}

impl InvalidCfg {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InvalidCfg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid simulation config: {}", self.reason)
    }
}

impl std::error::Error for InvalidCfg {}

impl SimCfg {
    /// Check the numeric fields.
    pub fn validate(&self) -> Result<(), InvalidCfg> {
        if self.points_per_run == 0 {
            return Err(InvalidCfg::new("points_per_run must be > 0"));
        }
        if i64::try_from(self.points_per_run).is_err() {
            return Err(InvalidCfg::new("points_per_run must fit in i64"));
        }
        if self.iterations == 0 {
            return Err(InvalidCfg::new("need at least one iteration"));
        }
        if self.max_attempts == 0 {
            return Err(InvalidCfg::new("max_attempts must be > 0"));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(InvalidCfg::new("tolerance must be finite and non-negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_experiment() {
        let cfg = SimCfg::default();
        assert_eq!(cfg.points_per_run, 3_000_000);
        assert_eq!(cfg.iterations, 4);
        assert_eq!(cfg.tolerance, 1e-10);
        assert_eq!(cfg.dup_scan, DupScan::Full);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        let base = SimCfg::default();
        assert!(SimCfg { points_per_run: 0, ..base }.validate().is_err());
        assert!(SimCfg { iterations: 0, ..base }.validate().is_err());
        assert!(SimCfg { max_attempts: 0, ..base }.validate().is_err());
        assert!(SimCfg { tolerance: f64::NAN, ..base }.validate().is_err());
        assert!(SimCfg { tolerance: -1.0, ..base }.validate().is_err());
        assert!(SimCfg { points_per_run: u64::MAX, ..base }.validate().is_err());
        assert_eq!(
            SimCfg { iterations: 0, ..base }.validate(),
            Err(InvalidCfg::new("need at least one iteration"))
        );
        let err = SimCfg { max_attempts: 0, ..base }.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid simulation config: max_attempts must be > 0");
    }
}
