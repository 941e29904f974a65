//! JSON and text rendering of a `SimulationReport`.

use serde::Serialize;
use serde_json::{json, Value};
use viviani::prelude::*;

#[derive(Debug, Serialize)]
pub struct FractionRow {
    pub numerator: Option<i64>,
    pub denominator: Option<i64>,
    pub decimal: Option<f64>,
}

impl From<&Fraction> for FractionRow {
    fn from(f: &Fraction) -> Self {
        Self {
            numerator: f.numer(),
            denominator: f.denom(),
            decimal: f.to_f64(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RunRow {
    pub index: u64,
    pub run_seed: u64,
    pub points: u64,
    pub draws: u64,
    pub acceptance_rate: f64,
    pub true_count: Option<u64>,
    pub probability: Option<FractionRow>,
    /// Repeated point `[x, y]` when the run stopped on a duplicate.
    pub duplicate: Option<[f64; 2]>,
}

impl From<&RunReport> for RunRow {
    fn from(r: &RunReport) -> Self {
        let (true_count, probability, duplicate) = match r.outcome {
            RunOutcome::Estimated {
                true_count,
                probability,
            } => (Some(true_count), Some(FractionRow::from(&probability)), None),
            RunOutcome::Duplicate { point, .. } => (None, None, Some([point.x, point.y])),
        };
        Self {
            index: r.token.index,
            run_seed: r.token.run_seed(),
            points: r.points,
            draws: r.draws,
            acceptance_rate: r.acceptance_rate(),
            true_count,
            probability,
            duplicate,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportDoc {
    pub params: Value,
    pub runs: Vec<RunRow>,
    pub completed_runs: usize,
    pub average: FractionRow,
}

/// Parameters of a run as recorded in reports and provenance sidecars.
pub fn params_json(triangle: &Triangle, cfg: &SimCfg) -> Value {
    json!({
        "side": triangle.side,
        "points_per_run": cfg.points_per_run,
        "iterations": cfg.iterations,
        "tolerance": cfg.tolerance,
        "max_attempts": cfg.max_attempts,
        "seed": cfg.seed,
        "dup_scan": format!("{:?}", cfg.dup_scan),
    })
}

pub fn to_doc(triangle: &Triangle, report: &SimulationReport) -> ReportDoc {
    ReportDoc {
        params: params_json(triangle, &report.cfg),
        runs: report.runs.iter().map(RunRow::from).collect(),
        completed_runs: report.completed_runs(),
        average: FractionRow::from(&report.average),
    }
}

/// Plain-text summary, one line per run plus the average.
pub fn to_text(report: &SimulationReport) -> String {
    let mut out = String::new();
    for run in &report.runs {
        let line = match run.outcome {
            RunOutcome::Estimated { probability, .. } => format!(
                "run {}: {} = {:.6} (acceptance {:.4})",
                run.token.index + 1,
                probability,
                probability.to_f64().unwrap_or(f64::NAN),
                run.acceptance_rate()
            ),
            RunOutcome::Duplicate { point, accepted } => format!(
                "run {}: duplicate point ({}, {}) after {} points, no estimate",
                run.token.index + 1,
                point.x,
                point.y,
                accepted
            ),
        };
        out.push_str(&line);
        out.push('\n');
    }
    match report.average.to_f64() {
        Some(decimal) => out.push_str(&format!(
            "average over {} runs: {} = {:.6}\n",
            report.completed_runs(),
            report.average,
            decimal
        )),
        None => out.push_str("average: no completed runs\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_report() -> (Triangle, SimulationReport) {
        let tri = Triangle::default();
        let cfg = SimCfg {
            points_per_run: 300,
            iterations: 2,
            progress_stride: 0,
            ..SimCfg::default()
        };
        let report = simulate(&tri, &cfg, &mut NoopObserver).unwrap();
        (tri, report)
    }

    #[test]
    fn doc_serializes_runs_and_average() {
        let (tri, report) = small_report();
        let doc = serde_json::to_value(to_doc(&tri, &report)).unwrap();
        assert_eq!(doc["params"]["points_per_run"], 300);
        assert_eq!(doc["params"]["dup_scan"], "Full");
        assert_eq!(doc["runs"].as_array().unwrap().len(), 2);
        assert_eq!(doc["completed_runs"], 2);
        assert!(doc["runs"][0]["duplicate"].is_null());
        let avg = doc["average"]["decimal"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&avg));
    }

    #[test]
    fn empty_average_serializes_as_nulls() {
        let row = FractionRow::from(&Fraction::empty());
        let v = serde_json::to_value(row).unwrap();
        assert!(v["numerator"].is_null() && v["denominator"].is_null() && v["decimal"].is_null());
    }

    #[test]
    fn text_has_one_line_per_run_plus_average() {
        let (_, report) = small_report();
        let text = to_text(&report);
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("run 1: "));
        assert!(text.contains("average over 2 runs"));
    }
}
