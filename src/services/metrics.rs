//! Request counters surfaced by the status endpoint

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

pub struct MetricsService {
    requests_processed: AtomicUsize,
    requests_failed: AtomicUsize,
    total_latency_ms: AtomicU64,
    start_time: Instant,
}

impl MetricsService {
    pub fn new() -> Self {
        Self {
            requests_processed: AtomicUsize::new(0),
            requests_failed: AtomicUsize::new(0),
            total_latency_ms: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_request(&self, latency_ms: u64) {
        self.requests_processed.fetch_add(1, Ordering::Relaxed);
        self.total_latency_ms.fetch_add(latency_ms, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.requests_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_stats(&self) -> MetricsStats {
        let requests = self.requests_processed.load(Ordering::Relaxed);
        let failed = self.requests_failed.load(Ordering::Relaxed);
        let total_latency = self.total_latency_ms.load(Ordering::Relaxed);

        MetricsStats {
            requests_processed: requests,
            requests_failed: failed,
            avg_latency_ms: if requests > 0 {
                total_latency / requests as u64
            } else {
                0
            },
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct MetricsStats {
    pub requests_processed: usize,
    pub requests_failed: usize,
    pub avg_latency_ms: u64,
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_over_successful_requests() {
        let metrics = MetricsService::new();
        metrics.record_request(100);
        metrics.record_request(300);
        metrics.record_failure();

        let stats = metrics.get_stats();
        assert_eq!(stats.requests_processed, 2);
        assert_eq!(stats.requests_failed, 1);
        assert_eq!(stats.avg_latency_ms, 200);
    }
}
