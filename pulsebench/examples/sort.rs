//! Fixed-data sort benchmark.
//!
//! Sorts the same small vector on every invocation and verifies the result,
//! failing the whole run on a mismatch.
//!
//! Run with:
//!   cargo run --example sort

use pulsebench::PulseConfig;
use pulsebench::prelude::*;

struct StdSortBench;

impl Workload for StdSortBench {
    fn bench(&mut self) -> Result<i64, BenchError> {
        // test and verify dataset
        let mut data = vec![1, 5, 2, 8, 45, 13, -1, 1];
        let verify = vec![-1, 1, 1, 2, 5, 8, 13, 45];

        let timer = Timer::start();
        data.sort_unstable();
        let elapsed = timer.stop();

        if data != verify {
            return Err(BenchError::msg("result mismatch"));
        }
        Ok(elapsed)
    }
}

fn main() {
    let config = PulseConfig::discover_or_default();
    let reporter = StdoutReporter::new();

    let mut runner = Runner::new("Sort", "std_sort", &reporter);
    if let Some(threads) = config.run.threads {
        runner.set_threads(threads);
    }
    runner.run(&mut StdSortBench, config.run.samples, config.run.iterations);
}
