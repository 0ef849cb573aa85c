//! Incremental progress reporting for seeding phases.

use tracing::info;

/// Sink for per-unit progress during a seeding batch.
///
/// `advance` is called once per created top-level unit; `finish` once after
/// the whole batch.
pub trait ProgressSink {
    fn advance(&mut self);
    fn finish(&mut self);
}

/// Progress sink that reports through tracing.
pub struct LogProgress {
    label: &'static str,
    total: usize,
    done: usize,
    log_every: usize,
}

impl LogProgress {
    pub fn new(label: &'static str, total: usize) -> Self {
        Self {
            label,
            total,
            done: 0,
            log_every: 10,
        }
    }

    /// Sets how many units pass between progress lines.
    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every.max(1);
        self
    }

    pub fn done(&self) -> usize {
        self.done
    }
}

impl ProgressSink for LogProgress {
    fn advance(&mut self) {
        self.done += 1;
        if self.done % self.log_every == 0 && self.done < self.total {
            info!("  {}: {}/{}", self.label, self.done, self.total);
        }
    }

    fn finish(&mut self) {
        info!("{}: {}/{} created", self.label, self.done, self.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_counts_units() {
        let mut progress = LogProgress::new("customers", 50);
        for _ in 0..50 {
            progress.advance();
        }
        assert_eq!(progress.done(), 50);
        progress.finish();
    }

    /// Recording sink used to assert call patterns.
    #[derive(Default)]
    pub(crate) struct RecordingProgress {
        pub advances: usize,
        pub finishes: usize,
    }

    impl ProgressSink for RecordingProgress {
        fn advance(&mut self) {
            self.advances += 1;
        }

        fn finish(&mut self) {
            self.finishes += 1;
        }
    }

    #[test]
    fn test_recording_sink() {
        let mut progress = RecordingProgress::default();
        progress.advance();
        progress.advance();
        progress.finish();
        assert_eq!(progress.advances, 2);
        assert_eq!(progress.finishes, 1);
    }
}
