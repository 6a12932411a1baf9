#![warn(missing_docs)]
//! Pulsebench Statistical Engine
//!
//! Reduces an ordered collection of per-sample durations into a robust
//! summary:
//! - Rank-based percentiles (p50/p90/p95/p99) with deterministic tie-breaking
//! - Iterative, bounded trimming of extreme high outliers (one-off scheduler
//!   preemption and similar stragglers)
//! - Min/max divergence from the 95th percentile, for flagging noisy runs
//!
//! All durations are integer nanoseconds end to end.

mod percentile;
mod summary;

pub use percentile::percentile;
pub use summary::{SummaryStatistics, compute_summary};

/// Divergence above the rolling p95 (in percent of p95) beyond which the
/// current top sample is dropped.
pub const TRIM_DIVERGENCE_PCT: f64 = 300.0;

/// Trimming never reduces the working set below this many samples.
pub const TRIM_FLOOR: usize = 21;

/// Trimming never drops more than this many samples.
pub const TRIM_MAX_DROPPED: usize = 4;
