//! Terminal progress display for long scans.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use trine_core::Progress;

/// A spinner counting processed lines. Hidden in quiet mode.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Starts a spinner labelled `stage`.
    pub fn start(stage: &'static str, quiet: bool) -> Self {
        if quiet {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }
        let bar = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::with_template("{spinner} {prefix:8} {human_pos} lines {msg}")
        {
            bar.set_style(style);
        }
        bar.set_prefix(stage);
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Stops and removes the spinner.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Progress for Spinner {
    fn advance(&self, lines: u64) {
        self.bar.inc(lines);
    }
}
