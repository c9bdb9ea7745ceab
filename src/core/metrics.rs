//! Logger metrics for observability
//!
//! Counters for emitted lines, filtered calls and appender failures.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use console_enhancer::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_emitted();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.emitted_count(), 1);
/// assert_eq!(metrics.filtered_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Calls that passed the level filter and were dispatched
    emitted: AtomicU64,

    /// Calls rejected by the level filter
    filtered: AtomicU64,

    /// Synchronous appender errors returned during dispatch
    append_failures: AtomicU64,

    /// Asynchronous file writes that failed
    file_write_failures: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            emitted: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            append_failures: AtomicU64::new(0),
            file_write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn emitted_count(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn append_failures(&self) -> u64 {
        self.append_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_write_failures(&self) -> u64 {
        self.file_write_failures.load(Ordering::Relaxed)
    }

    /// Record a dispatched call. Returns the previous count.
    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_append_failure(&self) -> u64 {
        self.append_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_write_failure(&self) -> u64 {
        self.file_write_failures.fetch_add(1, Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.emitted.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.append_failures.store(0, Ordering::Relaxed);
        self.file_write_failures.store(0, Ordering::Relaxed);
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
            emitted: AtomicU64::new(self.emitted_count()),
            filtered: AtomicU64::new(self.filtered_count()),
            append_failures: AtomicU64::new(self.append_failures()),
            file_write_failures: AtomicU64::new(self.file_write_failures()),
        }
    }
}
