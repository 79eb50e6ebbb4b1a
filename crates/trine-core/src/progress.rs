//! Progress reporting for long scans.
//!
//! Every stage logs a line count through `tracing` each
//! [`PROGRESS_INTERVAL`] lines. Front ends that want a live display implement
//! [`Progress`] and pass it to the `*_with_progress` entry points.

use tracing::info;

/// Number of lines between two progress reports.
pub const PROGRESS_INTERVAL: u64 = 1_000_000;

/// Receives line counts from a running scan.
///
/// Implementations must be `Sync`: sharded scans report from several threads.
pub trait Progress: Sync {
    /// Called with the number of lines processed since the previous call.
    fn advance(&self, lines: u64) {
        let _ = lines;
    }
}

/// Discards all progress reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {}

/// Counts lines for one scan and forwards them in [`PROGRESS_INTERVAL`] steps.
pub(crate) struct LineTicker<'a> {
    stage: &'static str,
    shard: Option<usize>,
    progress: &'a dyn Progress,
    lines: u64,
    reported: u64,
}

impl<'a> LineTicker<'a> {
    pub(crate) fn new(stage: &'static str, progress: &'a dyn Progress) -> Self {
        Self {
            stage,
            shard: None,
            progress,
            lines: 0,
            reported: 0,
        }
    }

    /// A ticker for one shard of a parallel scan. Its log lines carry the
    /// shard index, since the count is local to the shard.
    pub(crate) fn for_shard(
        stage: &'static str,
        shard: usize,
        progress: &'a dyn Progress,
    ) -> Self {
        Self {
            shard: Some(shard),
            ..Self::new(stage, progress)
        }
    }

    #[inline]
    pub(crate) fn tick(&mut self) {
        self.lines += 1;
        if self.lines % PROGRESS_INTERVAL == 0 {
            match self.shard {
                Some(shard) => {
                    info!(
                        stage = self.stage,
                        shard,
                        "shard processed {} lines",
                        self.lines
                    );
                }
                None => info!(stage = self.stage, "processed {} lines", self.lines),
            }
            self.flush();
        }
    }

    /// Forwards the remaining count and returns the total.
    pub(crate) fn finish(mut self) -> u64 {
        self.flush();
        self.lines
    }

    fn flush(&mut self) {
        if self.lines > self.reported {
            self.progress.advance(self.lines - self.reported);
            self.reported = self.lines;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    struct Counter(AtomicU64);

    impl Progress for Counter {
        fn advance(&self, lines: u64) {
            self.0.fetch_add(lines, Ordering::Relaxed);
        }
    }

    #[test]
    fn test_ticker_forwards_every_line() {
        let counter = Counter(AtomicU64::new(0));
        let mut ticker = LineTicker::new("test", &counter);
        for _ in 0..2_500_000 {
            ticker.tick();
        }
        assert_eq!(counter.0.load(Ordering::Relaxed), 2_000_000);
        assert_eq!(ticker.finish(), 2_500_000);
        assert_eq!(counter.0.load(Ordering::Relaxed), 2_500_000);
    }

    #[test]
    fn test_shard_ticker_reports_into_shared_progress() {
        let counter = Counter(AtomicU64::new(0));
        let mut first = LineTicker::for_shard("test", 0, &counter);
        let mut second = LineTicker::for_shard("test", 1, &counter);
        assert_eq!(first.shard, Some(0));
        assert_eq!(second.shard, Some(1));
        assert_eq!(LineTicker::new("test", &counter).shard, None);

        for _ in 0..1_200_000 {
            first.tick();
            second.tick();
        }
        assert_eq!(counter.0.load(Ordering::Relaxed), 2_000_000);
        assert_eq!(first.finish() + second.finish(), 2_400_000);
        assert_eq!(counter.0.load(Ordering::Relaxed), 2_400_000);
    }
}
