//! Parameterized Benchmarks
//!
//! A thin generic specialization of the controller that carries a typed
//! payload for the workload hooks to read. The payload is injected once
//! via [`ParamRunner::set_param`] before `run()` and exposed read-only as
//! `Option<&P>`; the harness itself never validates its presence. A
//! workload that requires it signals its own configuration error on
//! `None`.

use crate::error::BenchError;
use crate::record::BenchmarkRecord;
use crate::reporter::Reporter;
use crate::runner::{Runner, Workload};

/// A unit of work under measurement that reads a typed parameter payload.
///
/// Hook-for-hook identical to [`Workload`], with the payload threaded
/// through each call.
pub trait ParamWorkload<P> {
    /// One-time setup before measurement.
    fn prepare(&mut self, param: Option<&P>) -> Result<(), BenchError> {
        let _ = param;
        Ok(())
    }

    /// One timed invocation; returns elapsed nanoseconds.
    fn bench(&mut self, param: Option<&P>) -> Result<i64, BenchError>;

    /// Teardown; runs exactly once per `run()`, on every exit path.
    fn cleanup(&mut self, param: Option<&P>) {
        let _ = param;
    }
}

/// Execution controller with an attached parameter payload.
///
/// Delegates the whole lifecycle to the plain [`Runner`]; only the payload
/// hand-off is added.
pub struct ParamRunner<'r, P> {
    runner: Runner<'r>,
    param: Option<P>,
}

impl<'r, P> ParamRunner<'r, P> {
    /// Create a parameterized controller for one benchmark identity.
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        reporter: &'r dyn Reporter,
    ) -> Self {
        Self {
            runner: Runner::new(group, name, reporter),
            param: None,
        }
    }

    /// Inject the payload. Call before `run()`; the payload is read-only
    /// during execution.
    pub fn set_param(&mut self, param: P) {
        self.param = Some(param);
    }

    /// The currently attached payload, if any.
    pub fn param(&self) -> Option<&P> {
        self.param.as_ref()
    }

    /// Record a descriptive thread count on subsequent runs.
    pub fn set_threads(&mut self, threads: usize) {
        self.runner.set_threads(threads);
    }

    /// Execute one run; see [`Runner::run`] for the lifecycle contract.
    pub fn run<W: ParamWorkload<P>>(
        &self,
        workload: &mut W,
        samples: usize,
        iterations: usize,
    ) -> BenchmarkRecord {
        let mut bound = Bound {
            workload,
            param: self.param.as_ref(),
        };
        self.runner.run(&mut bound, samples, iterations)
    }
}

/// Adapter binding a parameterized workload to its payload so the plain
/// controller drives it; keeps the lifecycle implemented exactly once.
struct Bound<'a, W, P> {
    workload: &'a mut W,
    param: Option<&'a P>,
}

impl<W: ParamWorkload<P>, P> Workload for Bound<'_, W, P> {
    fn prepare(&mut self) -> Result<(), BenchError> {
        self.workload.prepare(self.param)
    }

    fn bench(&mut self) -> Result<i64, BenchError> {
        self.workload.bench(self.param)
    }

    fn cleanup(&mut self) {
        self.workload.cleanup(self.param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::NullReporter;

    struct PayloadSize {
        seen: Vec<Option<usize>>,
    }

    impl ParamWorkload<usize> for PayloadSize {
        fn bench(&mut self, param: Option<&usize>) -> Result<i64, BenchError> {
            self.seen.push(param.copied());
            match param {
                Some(_) => Ok(10),
                None => Err(BenchError::msg("parameter not set")),
            }
        }
    }

    #[test]
    fn test_payload_reaches_hooks() {
        let mut runner = ParamRunner::new("group", "bench", &NullReporter);
        runner.set_param(64usize);
        let mut workload = PayloadSize { seen: Vec::new() };

        let record = runner.run(&mut workload, 2, 1);
        assert!(record.success);
        assert_eq!(workload.seen, vec![Some(64), Some(64)]);
    }

    #[test]
    fn test_missing_payload_is_workload_error() {
        let runner: ParamRunner<'_, usize> = ParamRunner::new("group", "bench", &NullReporter);
        let mut workload = PayloadSize { seen: Vec::new() };

        let record = runner.run(&mut workload, 2, 1);
        assert!(!record.success);
        assert_eq!(record.error.as_deref(), Some("parameter not set"));
        assert_eq!(workload.seen, vec![None]);
    }

    #[test]
    fn test_param_accessor() {
        let mut runner: ParamRunner<'_, String> = ParamRunner::new("g", "n", &NullReporter);
        assert!(runner.param().is_none());
        runner.set_param("data".to_string());
        assert_eq!(runner.param().map(String::as_str), Some("data"));
    }
}
