use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Batch progress tracking, shared across worker threads
pub struct BatchProcessor {
    pub total_files: usize,
    processed_count: AtomicUsize,
    failed_count: AtomicUsize,
    completed_count: AtomicUsize,
    start_time: Instant,
}

impl BatchProcessor {
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            processed_count: AtomicUsize::new(0),
            failed_count: AtomicUsize::new(0),
            completed_count: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record one finished job and return its 1-based finishing position.
    /// Positions are unique even when workers finish at the same time.
    pub fn record(&self, succeeded: bool) -> usize {
        if succeeded {
            self.processed_count.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed_count.fetch_add(1, Ordering::Relaxed);
        }
        self.completed_count.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn completed(&self) -> usize {
        self.completed_count.load(Ordering::Relaxed)
    }

    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            total_files: self.total_files,
            processed: self.processed_count.load(Ordering::Relaxed),
            failed: self.failed_count.load(Ordering::Relaxed),
            elapsed: self.start_time.elapsed(),
        }
    }
}

/// Outcome counts of a finished batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub total_files: usize,
    pub processed: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

impl BatchSummary {
    pub fn success_rate(&self) -> f64 {
        if self.total_files == 0 {
            0.0
        } else {
            (self.processed as f64 / self.total_files as f64) * 100.0
        }
    }

    pub fn average_duration(&self) -> Duration {
        if self.total_files == 0 {
            Duration::new(0, 0)
        } else {
            self.elapsed / self.total_files as u32
        }
    }
}
