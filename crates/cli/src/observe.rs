//! Driver events → tracing.

use viviani::prelude::*;

/// Logs run boundaries at info and progress ticks at debug.
#[derive(Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn run_started(&mut self, token: RunToken, points: u64) {
        tracing::info!(
            run = token.index + 1,
            run_seed = token.run_seed(),
            points,
            "run_started"
        );
    }

    fn progress(&mut self, run: u64, done: u64, total: u64) {
        let pct = 100.0 * done as f64 / total as f64;
        tracing::debug!(run = run + 1, done, total, pct = pct.round() as u64, "progress");
    }

    fn run_finished(&mut self, report: &RunReport) {
        match report.outcome {
            RunOutcome::Estimated {
                true_count,
                probability,
            } => tracing::info!(
                run = report.token.index + 1,
                true_count,
                probability = %probability,
                decimal = probability.to_f64(),
                acceptance = report.acceptance_rate(),
                "run_finished"
            ),
            RunOutcome::Duplicate { point, accepted } => tracing::warn!(
                run = report.token.index + 1,
                x = point.x,
                y = point.y,
                accepted,
                "duplicate point, run abandoned"
            ),
        }
    }
}
