//! Translation fetch metrics.
//!
//! Counters are owned by a [`TranslationStore`](crate::i18n::TranslationStore)
//! instance rather than a global, so parallel tests see only their own numbers.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct FetchMetrics {
    /// Requests issued to the translation endpoint
    fetches: AtomicUsize,

    /// Requests that failed (transport, status, decode or timeout)
    failures: AtomicUsize,

    /// Times the bundled translations were served instead
    fallbacks: AtomicUsize,

    /// Completed fetches dropped because a newer language switch started
    stale_discards: AtomicUsize,
}

impl FetchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_fetch(&self) {
        self.fetches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_stale_discard(&self) {
        self.stale_discards.fetch_add(1, Ordering::Relaxed);
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }

    pub fn failures(&self) -> usize {
        self.failures.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn stale_discards(&self) -> usize {
        self.stale_discards.load(Ordering::Relaxed)
    }

    pub fn report(&self) -> MetricsReport {
        let fetches = self.fetches();
        let failures = self.failures();
        let success_rate = if fetches > 0 {
            (fetches.saturating_sub(failures) as f64 / fetches as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            fetches,
            failures,
            fallbacks: self.fallbacks(),
            stale_discards: self.stale_discards(),
            success_rate,
        }
    }
}

/// Snapshot of the fetch counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub fetches: usize,
    pub failures: usize,
    pub fallbacks: usize,
    pub stale_discards: usize,

    /// Successful fetches as a percentage (0-100)
    pub success_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = FetchMetrics::new();
        assert_eq!(metrics.fetches(), 0);
        assert_eq!(metrics.failures(), 0);
        assert_eq!(metrics.fallbacks(), 0);
        assert_eq!(metrics.stale_discards(), 0);
    }

    #[test]
    fn test_report_success_rate() {
        let metrics = FetchMetrics::new();
        for _ in 0..4 {
            metrics.record_fetch();
        }
        metrics.record_failure();
        metrics.record_fallback();

        let report = metrics.report();
        assert_eq!(report.fetches, 4);
        assert_eq!(report.fallbacks, 1);
        assert_eq!(report.success_rate, 75.0);
    }

    #[test]
    fn test_report_without_fetches() {
        let report = FetchMetrics::new().report();
        assert_eq!(report.success_rate, 0.0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = FetchMetrics::new();
        metrics.record_stale_discard();
        let json = serde_json::to_value(metrics.report()).unwrap();
        assert_eq!(json["stale_discards"], 1);
    }
}
