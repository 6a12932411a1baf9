//! Benchmark Execution Controller
//!
//! Owns the run lifecycle: setup → repeated timed invocation → teardown →
//! summary → report. One `run()` call produces exactly one record and
//! exactly one reporter hand-off, from both terminal states.
//!
//! Recording mode: each outer sample stores the *average* of `iterations`
//! inner durations (integer division). The console header's `ns/Iter`
//! columns reflect this.

use crate::error::BenchError;
use crate::record::BenchmarkRecord;
use crate::reporter::Reporter;
use pulsebench_stats::compute_summary;

/// A unit of work under measurement.
///
/// `bench` times one invocation of the workload body and returns the
/// elapsed nanoseconds (measured via [`crate::monotonic_ns`] or
/// [`crate::Timer`]); setup work belongs in `prepare`, not inside the
/// timed region. The first error returned from `prepare` or `bench`
/// aborts the run; there is no per-sample retry.
pub trait Workload {
    /// One-time setup before measurement. Failure skips measurement
    /// entirely and fails the run with this error's text.
    fn prepare(&mut self) -> Result<(), BenchError> {
        Ok(())
    }

    /// One timed invocation; returns elapsed nanoseconds. A negative
    /// return is treated as clock misbehavior and is fatal to the run.
    fn bench(&mut self) -> Result<i64, BenchError>;

    /// Teardown. Runs exactly once per `run()`, on every exit path,
    /// before reporting. Has no error channel; a panic here propagates to
    /// the caller environment (the run outcome is already fixed).
    fn cleanup(&mut self) {}
}

/// Benchmark execution controller.
///
/// Identity (`group`, `name`) and the reporter are fixed at construction;
/// the optional `threads` label before `run()`. The controller never
/// spawns threads; `threads` is descriptive metadata recorded verbatim.
pub struct Runner<'r> {
    group: String,
    name: String,
    reporter: &'r dyn Reporter,
    threads: Option<usize>,
}

impl<'r> Runner<'r> {
    /// Create a controller for one benchmark identity.
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        reporter: &'r dyn Reporter,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            reporter,
            threads: None,
        }
    }

    /// Record a descriptive thread count on subsequent runs.
    pub fn set_threads(&mut self, threads: usize) {
        self.threads = Some(threads);
    }

    /// Execute one run: `samples` outer repetitions of `iterations` timed
    /// inner invocations each.
    ///
    /// `samples == 0` or `iterations == 0` is a degenerate no-op run:
    /// prepare and cleanup still execute, the duration set stays empty,
    /// and the record reports success (the SKIP path).
    ///
    /// All failures are converted into `(success = false, error = text)`
    /// on the returned record; nothing escapes as a panic under normal
    /// operation. Cleanup always runs, exactly once, before the record is
    /// summarized and handed to the reporter.
    pub fn run(
        &self,
        workload: &mut dyn Workload,
        samples: usize,
        iterations: usize,
    ) -> BenchmarkRecord {
        let mut record = BenchmarkRecord::new(
            self.group.clone(),
            self.name.clone(),
            self.threads,
            samples,
            iterations,
        );

        match measure(workload, samples, iterations, &mut record.durations) {
            Ok(()) => record.success = true,
            Err(e) => record.error = Some(e.to_string()),
        }

        workload.cleanup();

        if record.success && !record.durations.is_empty() {
            record.summary = Some(compute_summary(&mut record.durations));
        }

        self.reporter.report(&record);
        record
    }
}

/// Prepare, then collect one averaged duration per outer sample.
fn measure(
    workload: &mut dyn Workload,
    samples: usize,
    iterations: usize,
    durations: &mut Vec<i64>,
) -> Result<(), BenchError> {
    workload.prepare()?;

    if samples == 0 || iterations == 0 {
        return Ok(());
    }

    durations.reserve(samples);
    for _ in 0..samples {
        let mut total: i64 = 0;
        for _ in 0..iterations {
            let elapsed = workload.bench()?;
            if elapsed < 0 {
                return Err(BenchError::NegativeDuration);
            }
            total += elapsed;
        }
        durations.push(total / iterations as i64);
    }
    Ok(())
}
