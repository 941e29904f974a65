//! Simulation driver: independent seeded runs averaged exactly.
//!
//! Each run draws `points_per_run` interior points, counts how many satisfy the
//! base-largest statement, and reports `Fraction(true_count, points_per_run)`.
//! The runs are then averaged with exact rational arithmetic.
//!
//! Failure policy
//! - A consistency violation is fatal: the whole simulation stops with an error.
//! - A duplicate point ends only the current run; it yields no probability and is
//!   left out of the average.

mod observer;
mod token;

use std::collections::HashSet;
use std::fmt;

use crate::cfg::{DupScan, InvalidCfg, SimCfg};
use crate::fraction::{average, Fraction, FractionError};
use crate::geom::Triangle;
use crate::predicate::{test_statement, ConsistencyViolation};
use crate::sampler::{PointSampler, SampleError};
use crate::Point;

pub use observer::{NoopObserver, Observer};
pub use token::RunToken;

/// Errors that abort a simulation.
#[derive(Clone, Debug, PartialEq)]
pub enum SimulationError {
    InvalidConfig(InvalidCfg),
    Sampling { run: u64, source: SampleError },
    Consistency { run: u64, source: ConsistencyViolation },
    Fraction(FractionError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(e) => e.fmt(f),
            Self::Sampling { run, source } => write!(f, "run {run}: {source}"),
            Self::Consistency { run, source } => {
                write!(f, "run {run}: area consistency check failed: {source}")
            }
            Self::Fraction(e) => write!(f, "averaging failed: {e}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            Self::Sampling { source, .. } => Some(source),
            Self::Consistency { source, .. } => Some(source),
            Self::Fraction(e) => Some(e),
        }
    }
}

impl From<InvalidCfg> for SimulationError {
    fn from(e: InvalidCfg) -> Self {
        Self::InvalidConfig(e)
    }
}

impl From<FractionError> for SimulationError {
    fn from(e: FractionError) -> Self {
        Self::Fraction(e)
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RunOutcome {
    Estimated { true_count: u64, probability: Fraction },
    /// `point` was drawn twice; `accepted` points had been kept before the repeat.
    Duplicate { point: Point, accepted: u64 },
}

/// Result of one run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunReport {
    pub token: RunToken,
    pub points: u64,
    /// Rejection draws spent, including the accepted ones.
    pub draws: u64,
    pub outcome: RunOutcome,
}

impl RunReport {
    #[inline]
    pub fn probability(&self) -> Option<Fraction> {
        match self.outcome {
            RunOutcome::Estimated { probability, .. } => Some(probability),
            RunOutcome::Duplicate { .. } => None,
        }
    }

    /// Accepted points per draw.
    pub fn acceptance_rate(&self) -> f64 {
        let accepted = match self.outcome {
            RunOutcome::Estimated { .. } => self.points,
            RunOutcome::Duplicate { accepted, .. } => accepted + 1,
        };
        if self.draws == 0 {
            return 0.0;
        }
        accepted as f64 / self.draws as f64
    }
}

/// All runs plus their exact average.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationReport {
    pub cfg: SimCfg,
    pub runs: Vec<RunReport>,
    /// Mean of the estimated runs; `Empty` when every run hit a duplicate.
    pub average: Fraction,
}

impl SimulationReport {
    pub fn completed_runs(&self) -> usize {
        self.runs.iter().filter(|r| r.probability().is_some()).count()
    }
}

/// Upper bound on the slots reserved up front for the duplicate scan.
const DUP_RESERVE_CAP: u64 = 1 << 22;

/// Set of accepted point bit patterns, pre-sized for a full scan.
fn dup_set(cfg: &SimCfg) -> HashSet<(u64, u64)> {
    match cfg.dup_scan {
        DupScan::Off => HashSet::new(),
        DupScan::Full => HashSet::with_capacity(cfg.points_per_run.min(DUP_RESERVE_CAP) as usize),
    }
}

/// Execute one run with the RNG stream derived from `token`.
///
/// Rejects an invalid `cfg` the same way `simulate` does.
pub fn run_once<O: Observer + ?Sized>(
    sampler: &PointSampler,
    cfg: &SimCfg,
    token: RunToken,
    observer: &mut O,
) -> Result<RunReport, SimulationError> {
    cfg.validate()?;
    let total = cfg.points_per_run;
    // validate() guarantees 0 < total <= i64::MAX.
    let denom = total as i64;
    let triangle = sampler.triangle();
    let mut rng = token.to_std_rng();
    let mut seen = dup_set(cfg);
    let mut true_count: u64 = 0;
    let mut draws: u64 = 0;

    observer.run_started(token, total);
    for done in 0..total {
        let accepted = sampler
            .sample(&mut rng)
            .map_err(|source| SimulationError::Sampling {
                run: token.index,
                source,
            })?;
        draws += accepted.draws;
        let p = accepted.point;

        if cfg.dup_scan == DupScan::Full && !seen.insert((p.x.to_bits(), p.y.to_bits())) {
            let report = RunReport {
                token,
                points: total,
                draws,
                outcome: RunOutcome::Duplicate {
                    point: p,
                    accepted: done,
                },
            };
            observer.run_finished(&report);
            return Ok(report);
        }

        let holds = test_statement(triangle, p, cfg.tolerance).map_err(|source| {
            SimulationError::Consistency {
                run: token.index,
                source,
            }
        })?;
        if holds {
            true_count += 1;
        }

        if cfg.progress_stride > 0 && (done + 1) % cfg.progress_stride == 0 {
            observer.progress(token.index, done + 1, total);
        }
    }

    // true_count <= total, which fits in i64.
    let probability = Fraction::new(true_count as i64, denom)?;
    let report = RunReport {
        token,
        points: total,
        draws,
        outcome: RunOutcome::Estimated {
            true_count,
            probability,
        },
    };
    observer.run_finished(&report);
    Ok(report)
}

/// Run `cfg.iterations` independent runs on `triangle` and average them exactly.
pub fn simulate<O: Observer + ?Sized>(
    triangle: &Triangle,
    cfg: &SimCfg,
    observer: &mut O,
) -> Result<SimulationReport, SimulationError> {
    cfg.validate()?;
    if !(triangle.side.is_finite() && triangle.side > 0.0) {
        return Err(InvalidCfg::new(format!(
            "triangle side must be finite and positive, got {}",
            triangle.side
        ))
        .into());
    }
    let sampler = PointSampler::new(*triangle, cfg.max_attempts);
    let mut runs = Vec::with_capacity(cfg.iterations);
    for index in 0..cfg.iterations as u64 {
        runs.push(run_once(&sampler, cfg, RunToken::new(cfg.seed, index), observer)?);
    }
    let estimates: Vec<Fraction> = runs.iter().filter_map(RunReport::probability).collect();
    let average = average(&estimates)?;
    Ok(SimulationReport {
        cfg: *cfg,
        runs,
        average,
    })
}
