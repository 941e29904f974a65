//! Replay record written next to a saved report.
//!
//! A sidecar holds what is needed to reproduce a report: build revision, library
//! version, parameters, and the stream seed of every run.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;
use viviani::prelude::*;

use crate::report::params_json;

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

#[derive(Debug, Serialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub viviani_version: &'static str,
    pub callsite: Callsite,
    pub params: Value,
    /// Mixed seed of each run's stream, in run order.
    pub run_seeds: Vec<u64>,
    pub outputs: Vec<String>,
}

impl Sidecar {
    /// Record for a finished simulation.
    #[track_caller]
    pub fn for_report(triangle: &Triangle, report: &SimulationReport) -> Self {
        let seeds = report.runs.iter().map(|r| r.token.run_seed()).collect();
        Self::build(params_json(triangle, &report.cfg), seeds)
    }

    /// Record for a simulation that has not run yet; seeds follow from `cfg`.
    #[track_caller]
    pub fn planned(triangle: &Triangle, cfg: &SimCfg) -> Self {
        let seeds = (0..cfg.iterations as u64)
            .map(|i| RunToken::new(cfg.seed, i).run_seed())
            .collect();
        Self::build(params_json(triangle, cfg), seeds)
    }

    #[track_caller]
    fn build(params: Value, run_seeds: Vec<u64>) -> Self {
        let at = Location::caller();
        Self {
            code_rev: code_rev(),
            viviani_version: viviani::VERSION,
            callsite: Callsite {
                file: at.file(),
                line: at.line(),
            },
            params,
            run_seeds,
            outputs: Vec::new(),
        }
    }
}

/// Write `<stem>.provenance.json` beside `artifact`, listing it as the output.
pub fn write_sidecar(artifact: &Path, mut sidecar: Sidecar) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    sidecar.outputs = vec![artifact.to_string_lossy().into_owned()];
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "report".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit from `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
