//! Reporter Capability
//!
//! The controller's outward seam: anything that can consume a completed
//! [`BenchmarkRecord`] (a console table, a file, a metrics pipe) plugs in
//! here without controller changes.

use crate::record::BenchmarkRecord;

/// Consumer of completed benchmark records.
///
/// Invoked exactly once per `run()`, synchronously, after the cleanup hook.
/// The record is frozen by the time it arrives. Implementations must not
/// unwind into the controller; a sink's own failures are its own
/// responsibility. Sinks are shared by reference across runners, so
/// stateful ones use interior mutability (all access is single-threaded).
pub trait Reporter {
    /// Render or forward one completed record.
    fn report(&self, record: &BenchmarkRecord);
}

/// Reporter that discards every record.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _record: &BenchmarkRecord) {}
}
