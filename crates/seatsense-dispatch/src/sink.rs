//! Per-sink delivery accounting with failure-streak log suppression.
//!
//! Delivery failures to an unreachable sink would otherwise flood the log
//! once per message per tick. Each sink therefore tracks its consecutive
//! failure count: the warning is emitted exactly when the count moves from
//! 0 to 1, every further consecutive failure is silent, and any success
//! resets the streak so the next outage warns again.
//!
//! The counter is atomic because delivery results arrive from detached
//! request tasks, not from the tick thread.

use std::sync::atomic::{AtomicU32, Ordering};

/// One configured telemetry destination.
#[derive(Debug)]
pub struct Sink {
    base_url: String,
    consecutive_failures: AtomicU32,
}

impl Sink {
    /// Create a sink for a validated base URL.
    pub const fn new(base_url: String) -> Self {
        Self {
            base_url,
            consecutive_failures: AtomicU32::new(0),
        }
    }

    /// The sink's base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Record a delivery failure. Returns `true` exactly when this failure
    /// starts a new streak — the caller should log its warning then and
    /// only then.
    pub fn record_failure(&self) -> bool {
        let previous = self.consecutive_failures.fetch_add(1, Ordering::Relaxed);
        previous == 0
    }

    /// Record a successful delivery, ending any failure streak.
    pub fn record_success(&self) {
        self.consecutive_failures.store(0, Ordering::Relaxed);
    }

    /// Current consecutive failure count.
    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_consecutive_failures_warn_once() {
        let sink = Sink::new(String::from("http://localhost:5000"));
        let warnings: u32 = (0..5).map(|_| u32::from(sink.record_failure())).sum();
        assert_eq!(warnings, 1);
        assert_eq!(sink.consecutive_failures(), 5);
    }

    #[test]
    fn success_resets_the_streak() {
        let sink = Sink::new(String::from("http://localhost:5000"));

        // Failures #1..#3, then a success on the next attempt.
        assert!(sink.record_failure());
        assert!(!sink.record_failure());
        assert!(!sink.record_failure());
        sink.record_success();
        assert_eq!(sink.consecutive_failures(), 0);

        // Failure #4 starts a fresh streak and warns again.
        assert!(sink.record_failure());
    }

    #[test]
    fn success_on_a_clean_sink_is_a_no_op() {
        let sink = Sink::new(String::from("http://localhost:5000"));
        sink.record_success();
        assert_eq!(sink.consecutive_failures(), 0);
        assert!(sink.record_failure());
    }
}
