use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use viviani::cfg::{AREA_TOLERANCE, DEFAULT_SEED, MAX_ATTEMPTS, N_ITERATIONS, N_POINTS, SIDE};
use viviani::prelude::*;

mod observe;
mod provenance;
mod report;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Monte Carlo estimate of P(area APB > area APC and area BPC)")]
struct Cmd {
    /// Log progress ticks (-v) in addition to run boundaries
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run the simulation and print per-run and averaged estimates
    Run {
        /// Accepted points per run
        #[arg(long, default_value_t = N_POINTS)]
        points: u64,
        /// Independent runs to average
        #[arg(long, default_value_t = N_ITERATIONS)]
        iterations: usize,
        /// Master seed; run i uses a stream mixed from (seed, i)
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        /// Allowed gap between summed sub-triangle areas and the triangle area
        /// (scaled by area for sides above 3)
        #[arg(long, default_value_t = AREA_TOLERANCE)]
        tolerance: f64,
        /// Rejection draws allowed per accepted point
        #[arg(long, default_value_t = MAX_ATTEMPTS)]
        max_attempts: u64,
        /// Side length of the equilateral triangle
        #[arg(long, default_value_t = SIDE)]
        side: f64,
        /// Skip the per-run duplicate point scan
        #[arg(long)]
        no_dup_check: bool,
        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Also write the JSON report (plus a provenance sidecar) to this path
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the provenance record a default run would carry
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose > 0 {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Run {
            points,
            iterations,
            seed,
            tolerance,
            max_attempts,
            side,
            no_dup_check,
            json,
            out,
        } => {
            let cfg = SimCfg {
                points_per_run: points,
                iterations,
                tolerance,
                max_attempts,
                seed,
                dup_scan: if no_dup_check {
                    DupScan::Off
                } else {
                    DupScan::Full
                },
                progress_stride: (points / 10).max(1),
            };
            run(side, cfg, json, out.as_deref())
        }
        Action::Report => report(),
    }
}

fn run(side: f64, cfg: SimCfg, json: bool, out: Option<&Path>) -> Result<()> {
    if !(side.is_finite() && side > 0.0) {
        bail!("side must be finite and positive, got {side}");
    }
    let triangle = Triangle::equilateral(side);
    tracing::info!(
        side,
        points = cfg.points_per_run,
        iterations = cfg.iterations,
        seed = cfg.seed,
        dup_scan = ?cfg.dup_scan,
        "run"
    );
    tracing::debug!(triangle = %triangle, "triangle");

    let sim = simulate(&triangle, &cfg, &mut observe::TracingObserver)
        .context("simulation aborted")?;
    tracing::info!(
        completed = sim.completed_runs(),
        average = %sim.average,
        decimal = sim.average.to_f64(),
        "average"
    );

    let doc = report::to_doc(&triangle, &sim);
    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print!("{}", report::to_text(&sim));
    }

    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let prov =
            provenance::write_sidecar(out, provenance::Sidecar::for_report(&triangle, &sim))?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
    }
    Ok(())
}

fn report() -> Result<()> {
    let planned = provenance::Sidecar::planned(&Triangle::default(), &SimCfg::default());
    println!("{}", serde_json::to_string_pretty(&planned)?);
    Ok(())
}
