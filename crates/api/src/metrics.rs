use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use cases::DataSource;

pub struct Metrics {
    // Counters
    total_requests: AtomicUsize,
    successful_requests: AtomicUsize,
    rejected_requests: AtomicUsize,

    // Which path answered
    upstream_hits: AtomicUsize,
    mock_fallbacks: AtomicUsize,

    // Timing (in microseconds)
    total_search_time_us: AtomicU64,
    searches: AtomicUsize,
}

impl Metrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            total_requests: AtomicUsize::new(0),
            successful_requests: AtomicUsize::new(0),
            rejected_requests: AtomicUsize::new(0),
            upstream_hits: AtomicUsize::new(0),
            mock_fallbacks: AtomicUsize::new(0),
            total_search_time_us: AtomicU64::new(0),
            searches: AtomicUsize::new(0),
        })
    }

    pub fn record_request(&self, success: bool) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        if success {
            self.successful_requests.fetch_add(1, Ordering::Relaxed);
        } else {
            self.rejected_requests.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_source(&self, source: DataSource) {
        match source {
            DataSource::Upstream => self.upstream_hits.fetch_add(1, Ordering::Relaxed),
            DataSource::Mock => self.mock_fallbacks.fetch_add(1, Ordering::Relaxed),
        };
    }

    pub fn record_search(&self, duration: Duration) {
        self.total_search_time_us.fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        self.searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            successful_requests: self.successful_requests.load(Ordering::Relaxed),
            rejected_requests: self.rejected_requests.load(Ordering::Relaxed),
            upstream_hits: self.upstream_hits.load(Ordering::Relaxed),
            mock_fallbacks: self.mock_fallbacks.load(Ordering::Relaxed),
            avg_search_time_ms: self.avg_time_ms(&self.total_search_time_us, &self.searches),
        }
    }

    fn avg_time_ms(&self, total_us: &AtomicU64, count: &AtomicUsize) -> f64 {
        let total = total_us.load(Ordering::Relaxed) as f64;
        let cnt = count.load(Ordering::Relaxed) as f64;
        if cnt > 0.0 {
            total / cnt / 1000.0 // Convert to ms
        } else {
            0.0
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub total_requests: usize,
    pub successful_requests: usize,
    pub rejected_requests: usize,
    pub upstream_hits: usize,
    pub mock_fallbacks: usize,
    pub avg_search_time_ms: f64,
}

pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
