// src/utils/time.rs
//! Clock abstraction used by the tempo tracking logic

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Time provider trait for dependency injection and testing
pub trait TimeProvider: Send + Sync {
    /// Current time as nanoseconds since the Unix epoch
    fn now_nanos(&self) -> u64;

    /// Seconds elapsed since an earlier `now_nanos` reading
    fn elapsed_secs_since(&self, start_nanos: u64) -> f32 {
        (self.now_nanos().saturating_sub(start_nanos)) as f64 as f32 / 1_000_000_000.0
    }
}

/// System time provider using the actual system clock
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_nanos(&self) -> u64 {
        current_timestamp_nanos()
    }
}

/// Mock time provider for deterministic tempo tests
pub struct MockTimeProvider {
    current_time: AtomicU64,
}

impl MockTimeProvider {
    /// Create a mock clock starting at the given timestamp
    pub fn new(initial_time_nanos: u64) -> Self {
        Self {
            current_time: AtomicU64::new(initial_time_nanos),
        }
    }

    /// Advance the mock clock by the given number of nanoseconds
    pub fn advance_by(&self, nanos: u64) {
        self.current_time.fetch_add(nanos, Ordering::Relaxed);
    }

    /// Advance the mock clock by the given number of seconds
    pub fn advance_secs(&self, secs: f32) {
        self.advance_by((secs as f64 * 1_000_000_000.0) as u64);
    }

    /// Set the mock clock to an absolute timestamp
    pub fn set_time(&self, nanos: u64) {
        self.current_time.store(nanos, Ordering::Relaxed);
    }
}

impl TimeProvider for MockTimeProvider {
    fn now_nanos(&self) -> u64 {
        self.current_time.load(Ordering::Relaxed)
    }
}

/// Current system time as nanoseconds since the Unix epoch
pub fn current_timestamp_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}
