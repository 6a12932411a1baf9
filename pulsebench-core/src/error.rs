//! Run Failure Signaling
//!
//! Workload hooks signal failure by returning a [`BenchError`]; the
//! controller converts the first failure into the record's error text and
//! aborts the run. Nothing here escapes `run()` as a panic.

use thiserror::Error;

/// Failure raised by a workload hook or by measurement validation.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The workload reported an elapsed time below zero. Clock or
    /// instrumentation inconsistency; always fatal, never retried.
    #[error("negative duration")]
    NegativeDuration,

    /// Failure signaled by the workload itself (setup, measurement, or
    /// verification of its own results). Rendered verbatim.
    #[error("{0}")]
    Workload(String),

    /// I/O failure in a workload hook (typically setup reading fixtures).
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl BenchError {
    /// Shorthand for a workload-signaled failure message.
    pub fn msg(text: impl Into<String>) -> Self {
        BenchError::Workload(text.into())
    }
}

impl From<String> for BenchError {
    fn from(text: String) -> Self {
        BenchError::Workload(text)
    }
}

impl From<&str> for BenchError {
    fn from(text: &str) -> Self {
        BenchError::Workload(text.to_string())
    }
}
