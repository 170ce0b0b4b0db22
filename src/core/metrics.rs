//! Logger metrics for observability
//!
//! Counters for monitoring facade health: emitted and filtered calls plus
//! isolated hook, extractor, and appender failures. Counters only; nothing
//! is exported anywhere.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// Failures on the emission path never reach the caller, so these counters
/// (together with the stderr diagnostic line) are the only place they are
/// visible.
///
/// # Example
///
/// ```
/// use kvlog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_emitted();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.emitted_count(), 1);
/// assert_eq!(metrics.filtered_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines handed to the appender
    emitted_count: AtomicU64,

    /// Calls dropped by the severity filter
    filtered_count: AtomicU64,

    /// Before/after hooks that returned an error or panicked
    hook_failures: AtomicU64,

    /// Context extractors that panicked
    extractor_failures: AtomicU64,

    /// Appender calls that returned an error or panicked
    appender_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            emitted_count: AtomicU64::new(0),
            filtered_count: AtomicU64::new(0),
            hook_failures: AtomicU64::new(0),
            extractor_failures: AtomicU64::new(0),
            appender_failures: AtomicU64::new(0),
        }
    }

    /// Get the number of lines handed to the appender
    #[inline]
    pub fn emitted_count(&self) -> u64 {
        self.emitted_count.load(Ordering::Relaxed)
    }

    /// Get the number of calls dropped by the severity filter
    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered_count.load(Ordering::Relaxed)
    }

    /// Get the number of failed hook invocations
    #[inline]
    pub fn hook_failures(&self) -> u64 {
        self.hook_failures.load(Ordering::Relaxed)
    }

    /// Get the number of panicking extractor invocations
    #[inline]
    pub fn extractor_failures(&self) -> u64 {
        self.extractor_failures.load(Ordering::Relaxed)
    }

    /// Get the number of failed appender calls
    #[inline]
    pub fn appender_failures(&self) -> u64 {
        self.appender_failures.load(Ordering::Relaxed)
    }

    /// Record an emitted line
    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.emitted_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a filtered call
    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed hook invocation
    #[inline]
    pub fn record_hook_failure(&self) -> u64 {
        self.hook_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a panicking extractor invocation
    #[inline]
    pub fn record_extractor_failure(&self) -> u64 {
        self.extractor_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed appender call
    #[inline]
    pub fn record_appender_failure(&self) -> u64 {
        self.appender_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Fraction of non-filtered calls whose appender write failed,
    /// as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been emitted.
    pub fn appender_failure_rate(&self) -> f64 {
        let failures = self.appender_failures() as f64;
        let emitted = self.emitted_count() as f64;
        if emitted == 0.0 {
            0.0
        } else {
            (failures / emitted) * 100.0
        }
    }

    /// Reset all metrics to zero
    ///
    /// Useful for testing or periodic reset of metrics.
    pub fn reset(&self) {
        self.emitted_count.store(0, Ordering::Relaxed);
        self.filtered_count.store(0, Ordering::Relaxed);
        self.hook_failures.store(0, Ordering::Relaxed);
        self.extractor_failures.store(0, Ordering::Relaxed);
        self.appender_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            emitted_count: AtomicU64::new(self.emitted_count()),
            filtered_count: AtomicU64::new(self.filtered_count()),
            hook_failures: AtomicU64::new(self.hook_failures()),
            extractor_failures: AtomicU64::new(self.extractor_failures()),
            appender_failures: AtomicU64::new(self.appender_failures()),
        }
    }
}
