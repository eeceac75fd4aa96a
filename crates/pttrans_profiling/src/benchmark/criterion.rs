//! Benchmarking using `criterion`.

pub use ::criterion::*;

use crate::benchmark::Benchmarker;

/// Defines a `criterion` target function named `$name` that runs the
/// benchmark function `$group::$name`, reporting it under the label `$id`.
/// An optional fourth argument sets the number of samples to collect.
#[macro_export]
macro_rules! define_criterion_target {
    ($group:ident, $name:ident, $id:literal) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            $group::$name(
                $crate::benchmark::criterion::CriterionFunctionBenchmarker::new(c, $id, None),
            );
        }
    };
    ($group:ident, $name:ident, $id:literal, $sample_count:expr) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            $group::$name(
                $crate::benchmark::criterion::CriterionFunctionBenchmarker::new(
                    c,
                    $id,
                    Some($sample_count),
                ),
            );
        }
    };
}

/// [`Benchmarker`] that hands the function over to `criterion` for
/// measurement and statistical analysis.
#[allow(missing_debug_implementations)]
pub struct CriterionFunctionBenchmarker<'a> {
    c: &'a mut Criterion,
    id: &'static str,
    sample_count: Option<usize>,
}

impl<'a> CriterionFunctionBenchmarker<'a> {
    pub fn new(c: &'a mut Criterion, id: &'static str, sample_count: Option<usize>) -> Self {
        Self {
            c,
            id,
            sample_count,
        }
    }
}

impl Benchmarker for CriterionFunctionBenchmarker<'_> {
    fn benchmark<T>(self, mut f: &mut impl FnMut() -> T) {
        match self.sample_count {
            Some(sample_count) => {
                let mut benchmark_group = self.c.benchmark_group(self.id);
                benchmark_group.sample_size(sample_count);
                benchmark_group.bench_function(self.id, |b| b.iter(&mut f));
                benchmark_group.finish();
            }
            None => {
                self.c.bench_function(self.id, |b| b.iter(&mut f));
            }
        }
    }
}

/// Returns the `criterion` configuration to use for the benchmarks. With the
/// `flamegraph` feature enabled, a flamegraph is recorded for each benchmark
/// when it is run with `--profile-time`.
pub fn config() -> Criterion {
    #[cfg(feature = "flamegraph")]
    {
        use pprof::criterion::{Output, PProfProfiler};
        Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
    }
    #[cfg(not(feature = "flamegraph"))]
    {
        Criterion::default()
    }
}
