//! Logger metrics for observability
//!
//! The emission API never surfaces a failure, so these counters are the only
//! way to see that something went wrong inside the logger.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for logger observability
///
/// # Example
///
/// ```
/// use level_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_line();
/// assert_eq!(metrics.lines_written(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Number of lines written to the destination
    lines_written: AtomicU64,

    /// Number of debug lines dropped because debug output is disabled
    suppressed: AtomicU64,

    /// Number of lines lost to destination write failures
    write_failures: AtomicU64,

    /// Number of `print_struct` calls whose serialization failed
    serialize_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            serialize_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn serialize_failures(&self) -> u64 {
        self.serialize_failures.load(Ordering::Relaxed)
    }

    /// Record a line written to the destination
    #[inline]
    pub fn record_line(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a debug line dropped by the discarding sink
    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a destination write failure
    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a serialization failure inside `print_struct`
    #[inline]
    pub fn record_serialize_failure(&self) -> u64 {
        self.serialize_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all counters to zero
    ///
    /// Useful for testing or periodic reset of metrics.
    pub fn reset(&self) {
        self.lines_written.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.serialize_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            lines_written: AtomicU64::new(self.lines_written()),
            suppressed: AtomicU64::new(self.suppressed()),
            write_failures: AtomicU64::new(self.write_failures()),
            serialize_failures: AtomicU64::new(self.serialize_failures()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.lines_written(), 0);
        assert_eq!(metrics.suppressed(), 0);
        assert_eq!(metrics.write_failures(), 0);
        assert_eq!(metrics.serialize_failures(), 0);
    }

    #[test]
    fn test_metrics_record() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_line(), 0); // Returns previous value
        metrics.record_line();
        metrics.record_suppressed();
        assert_eq!(metrics.lines_written(), 2);
        assert_eq!(metrics.suppressed(), 1);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_line();
        metrics.record_write_failure();
        metrics.record_serialize_failure();

        metrics.reset();

        assert_eq!(metrics.lines_written(), 0);
        assert_eq!(metrics.write_failures(), 0);
        assert_eq!(metrics.serialize_failures(), 0);
    }

    #[test]
    fn test_metrics_clone() {
        let metrics = LoggerMetrics::new();
        metrics.record_line();
        metrics.record_line();

        let snapshot = metrics.clone();
        assert_eq!(snapshot.lines_written(), 2);

        // Original and clone are independent
        metrics.record_line();
        assert_eq!(metrics.lines_written(), 3);
        assert_eq!(snapshot.lines_written(), 2);
    }
}
