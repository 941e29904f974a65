//! Hooks for progress reporting.
//!
//! The driver owns all state; observers only see events. Every method has a no-op
//! default so implementations pick what they need.

use super::{RunReport, RunToken};

/// Receives driver events in order: `run_started`, zero or more `progress`, `run_finished`.
pub trait Observer {
    fn run_started(&mut self, _token: RunToken, _points: u64) {}

    /// `done` accepted points out of `total` in run `run`.
    fn progress(&mut self, _run: u64, _done: u64, _total: u64) {}

    fn run_finished(&mut self, _report: &RunReport) {}
}

/// Ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}
