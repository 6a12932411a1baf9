//! Monotonic Clock Source
//!
//! A single process-local clock in integer nanoseconds, anchored on
//! `std::time::Instant` at first use. Values never decrease within a
//! process run; workload bodies time themselves with [`monotonic_ns`]
//! directly or through the [`Timer`] convenience.

use std::sync::OnceLock;
use std::time::Instant;

static CLOCK_EPOCH: OnceLock<Instant> = OnceLock::new();

/// Nanoseconds since an arbitrary process-local epoch.
///
/// Monotonically non-decreasing within a process run. All harness
/// components assume this unit end to end.
#[inline]
pub fn monotonic_ns() -> i64 {
    let epoch = CLOCK_EPOCH.get_or_init(Instant::now);
    epoch.elapsed().as_nanos() as i64
}

/// Timer for measuring one workload invocation.
pub struct Timer {
    start: i64,
}

impl Timer {
    /// Start a new timer.
    #[inline]
    pub fn start() -> Self {
        Self {
            start: monotonic_ns(),
        }
    }

    /// Elapsed nanoseconds since [`Timer::start`].
    #[inline]
    pub fn stop(&self) -> i64 {
        monotonic_ns() - self.start
    }
}
