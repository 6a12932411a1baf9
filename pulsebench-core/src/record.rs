//! Benchmark Run Record
//!
//! One record per `run()` invocation: identity, configuration, outcome, the
//! raw duration buffer, and the derived summary. The controller owns and
//! mutates it during the run; afterwards it is frozen, handed by reference
//! to the reporter, and returned to the caller. The harness keeps no
//! registry of past records.

use pulsebench_stats::SummaryStatistics;
use serde::{Deserialize, Serialize};

/// Completed (or failed) benchmark run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Category label, fixed at controller construction.
    pub group: String,
    /// Benchmark label, fixed at controller construction.
    pub name: String,
    /// Descriptive thread count supplied by the caller (the harness never
    /// spawns threads); unset by default.
    pub threads: Option<usize>,
    /// Outer repetition count requested for this run.
    pub samples: usize,
    /// Inner invocations per sample requested for this run.
    pub iterations: usize,
    /// Whether the run completed without a failure.
    pub success: bool,
    /// Error text of the first failure, if any.
    pub error: Option<String>,
    /// Per-sample durations in nanoseconds, one averaged value per outer
    /// sample. Insertion order until the statistics engine sorts the
    /// buffer; partial on mid-run failure.
    pub durations: Vec<i64>,
    /// Summary computed by the statistics engine on success with at least
    /// one sample.
    pub summary: Option<SummaryStatistics>,
}

impl BenchmarkRecord {
    pub(crate) fn new(
        group: String,
        name: String,
        threads: Option<usize>,
        samples: usize,
        iterations: usize,
    ) -> Self {
        Self {
            group,
            name,
            threads,
            samples,
            iterations,
            success: false,
            error: None,
            durations: Vec::new(),
            summary: None,
        }
    }

    /// A run that succeeded without producing a single sample (degenerate
    /// `samples == 0` or `iterations == 0` request).
    pub fn is_skip(&self) -> bool {
        self.success && self.durations.is_empty()
    }
}
