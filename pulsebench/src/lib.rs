#![warn(missing_docs)]
//! # Pulsebench
//!
//! Micro-benchmark harness for comparing competing implementations of the
//! same operation:
//! - Timed runs: setup → `samples` × `iterations` timed invocations →
//!   teardown, durations measured with a monotonic nanosecond clock
//! - Robust reduction: rank percentiles (p50/p90/p95/p99) with bounded
//!   trimming of extreme high outliers
//! - Pluggable reporting: console table, JSON lines, or any custom sink
//!
//! ## Quick Start
//!
//! ```no_run
//! use pulsebench::prelude::*;
//!
//! struct SumBench;
//!
//! impl Workload for SumBench {
//!     fn bench(&mut self) -> Result<i64, BenchError> {
//!         let data: Vec<u64> = (0..1000).collect();
//!
//!         let timer = Timer::start();
//!         let sum: u64 = data.iter().sum();
//!         let elapsed = timer.stop();
//!
//!         if sum != 499_500 {
//!             return Err(BenchError::msg("checksum mismatch"));
//!         }
//!         Ok(elapsed)
//!     }
//! }
//!
//! let reporter = StdoutReporter::new();
//! let runner = Runner::new("math", "sum_1k", &reporter);
//! runner.run(&mut SumBench, 100, 10);
//! ```
//!
//! ## Parameterized Benchmarks
//!
//! ```no_run
//! use pulsebench::prelude::*;
//!
//! struct Size(usize);
//! struct FillBench;
//!
//! impl ParamWorkload<Size> for FillBench {
//!     fn bench(&mut self, param: Option<&Size>) -> Result<i64, BenchError> {
//!         let size = param.ok_or_else(|| BenchError::msg("parameter not set"))?.0;
//!
//!         let timer = Timer::start();
//!         let v = vec![0u8; size];
//!         let elapsed = timer.stop();
//!
//!         std::hint::black_box(v);
//!         Ok(elapsed)
//!     }
//! }
//!
//! let reporter = StdoutReporter::new();
//! let mut runner = ParamRunner::new("alloc", "fill", &reporter);
//! runner.set_param(Size(4096));
//! runner.run(&mut FillBench, 100, 1);
//! ```

mod config;

pub use config::{CONFIG_FILE, PulseConfig, RunConfig};

// Re-export core types
pub use pulsebench_core::{
    BenchError, BenchmarkRecord, NullReporter, ParamRunner, ParamWorkload, Reporter, Runner,
    Timer, Workload, monotonic_ns,
};

// Re-export reporter sinks
pub use pulsebench_report::{JsonLinesReporter, StdoutReporter, format_header, format_row};

// Re-export the statistics engine
pub use pulsebench_stats::{SummaryStatistics, compute_summary, percentile};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BenchError, ParamRunner, ParamWorkload, Reporter, Runner, StdoutReporter, Timer, Workload,
    };
}
