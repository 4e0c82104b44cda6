//! Progress reporting for a generation run.
//!
//! The pipeline talks to a [`ProgressReporter`]; the CLI drives a progress bar
//! from it, and channel or closure adapters cover other front ends. Updates
//! pass through a wrapper that keeps the reported fraction within 0.0..=1.0
//! and never lets it move backwards.

use std::cell::Cell;
use std::sync::mpsc::Sender;

/// Receives one-way status updates while a game list is generated.
///
/// Calls are fire-and-forget: an implementation must not block, and nothing
/// it does can change the outcome of the run.
pub trait ProgressReporter {
    /// A human-readable description of the current step.
    fn on_status(&self, message: &str);

    /// Overall completion from 0.0 to 1.0.
    fn on_progress(&self, fraction: f64);
}

/// Discards all updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn on_status(&self, _message: &str) {}

    fn on_progress(&self, _fraction: f64) {}
}

/// Progress update sent to a channel-based reporter.
///
/// Intended for GUI front ends that render progress on another thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateProgress {
    Status(String),
    Progress(f64),
}

impl ProgressReporter for Sender<GenerateProgress> {
    fn on_status(&self, message: &str) {
        // A dropped receiver just means nobody is watching.
        let _ = self.send(GenerateProgress::Status(message.to_string()));
    }

    fn on_progress(&self, fraction: f64) {
        let _ = self.send(GenerateProgress::Progress(fraction));
    }
}

/// Adapts a closure into a reporter.
pub struct FnReporter<F: Fn(GenerateProgress)>(pub F);

impl<F: Fn(GenerateProgress)> ProgressReporter for FnReporter<F> {
    fn on_status(&self, message: &str) {
        (self.0)(GenerateProgress::Status(message.to_string()));
    }

    fn on_progress(&self, fraction: f64) {
        (self.0)(GenerateProgress::Progress(fraction));
    }
}

/// Wraps a reporter so the fractions it sees are clamped to `[0, 1]` and
/// never go backwards within a run.
pub(crate) struct Monotonic<'a> {
    inner: &'a dyn ProgressReporter,
    last: Cell<f64>,
}

impl<'a> Monotonic<'a> {
    pub(crate) fn new(inner: &'a dyn ProgressReporter) -> Self {
        Self {
            inner,
            last: Cell::new(0.0),
        }
    }
}

impl ProgressReporter for Monotonic<'_> {
    fn on_status(&self, message: &str) {
        log::debug!("{message}");
        self.inner.on_status(message);
    }

    fn on_progress(&self, fraction: f64) {
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        let value = fraction.max(self.last.get());
        self.last.set(value);
        self.inner.on_progress(value);
    }
}

#[cfg(test)]
#[path = "tests/progress_tests.rs"]
mod tests;
