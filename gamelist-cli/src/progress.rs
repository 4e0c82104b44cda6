//! Progress bar rendering for pipeline updates.

use gamelist_lib::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};

/// Bar resolution; pipeline fractions are scaled onto this many steps.
const STEPS: u64 = 1000;

/// Draws pipeline progress as a single `indicatif` bar on stderr.
pub(crate) struct BarReporter {
    bar: ProgressBar,
}

impl BarReporter {
    /// When `quiet` is true the bar is never drawn.
    pub(crate) fn new(quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(STEPS)
        };
        bar.set_length(STEPS);
        bar.set_style(
            ProgressStyle::with_template("  {bar:40.cyan/blue} {percent:>3}% {wide_msg}")
                .expect("static pattern")
                .progress_chars("=> "),
        );
        Self { bar }
    }

    /// Remove the bar from the terminal.
    pub(crate) fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressReporter for BarReporter {
    fn on_status(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    fn on_progress(&self, fraction: f64) {
        self.bar.set_position((fraction * STEPS as f64).round() as u64);
    }
}
