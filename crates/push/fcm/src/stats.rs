//! In-memory delivery counters.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::StatStore;

/// Process-local success/error totals.
#[derive(Debug, Default)]
pub struct MemoryStats {
    success: AtomicU64,
    error: AtomicU64,
}

impl MemoryStats {
    pub fn success(&self) -> u64 {
        self.success.load(Ordering::Relaxed)
    }

    pub fn error(&self) -> u64 {
        self.error.load(Ordering::Relaxed)
    }

    /// Reset both counters to zero.
    pub fn reset(&self) {
        self.success.store(0, Ordering::Relaxed);
        self.error.store(0, Ordering::Relaxed);
    }
}

impl StatStore for MemoryStats {
    fn add_android_success(&self, count: u64) {
        self.success.fetch_add(count, Ordering::Relaxed);
    }

    fn add_android_error(&self, count: u64) {
        self.error.fetch_add(count, Ordering::Relaxed);
    }
}
