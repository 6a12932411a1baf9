//! Randomized-data sort benchmark using the parameterized controller.
//!
//! The payload carries the input size; each invocation generates a fresh
//! random vector outside the timed region, sorts it, and verifies the
//! result against an independently sorted copy.
//!
//! Run with:
//!   cargo run --example sort_random

use pulsebench::prelude::*;
use rand::Rng;

struct SortParam {
    data_size: usize,
}

struct RandomSortBench;

impl ParamWorkload<SortParam> for RandomSortBench {
    fn bench(&mut self, param: Option<&SortParam>) -> Result<i64, BenchError> {
        let param = param.ok_or_else(|| BenchError::msg("parameter not set"))?;

        let mut rng = rand::thread_rng();
        let mut data: Vec<i32> = (0..param.data_size)
            .map(|_| rng.gen_range(-1_000..1_000))
            .collect();
        let mut verify = data.clone();
        verify.sort_unstable();

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
    let reporter = StdoutReporter::new();

    for data_size in [10, 100, 1_000] {
        let mut runner = ParamRunner::new("Sort (rnd)", format!("n={data_size}"), &reporter);
        runner.set_param(SortParam { data_size });
        runner.run(&mut RandomSortBench, 100, 10);
    }
}
