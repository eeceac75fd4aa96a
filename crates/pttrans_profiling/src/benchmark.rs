//! Running benchmark functions.

#[cfg(feature = "criterion")]
pub mod criterion;

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

/// Something that can measure the execution of a function.
///
/// Benchmark functions prepare their inputs and then hand the code to be
/// measured to [`Benchmarker::benchmark`], which may call it any number of
/// times (but at least once).
pub trait Benchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T);
}

/// [`Benchmarker`] that simply calls the function repeatedly until the given
/// duration has passed, optionally after waiting for a delay. This is useful
/// for running a benchmark under an external profiler.
#[derive(Clone, Debug)]
pub struct BasicBenchmarker {
    duration: Duration,
    delayer: Delayer,
}

/// Holds off the start of a benchmark until a given time has passed since
/// the program started, to give an external profiler time to attach.
#[derive(Clone, Debug)]
pub struct Delayer {
    program_start: Instant,
    delay: Duration,
}

impl BasicBenchmarker {
    pub fn new(duration: Duration, delayer: Delayer) -> Self {
        Self { duration, delayer }
    }
}

impl Benchmarker for BasicBenchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        self.delayer.wait();

        let start = Instant::now();
        let mut n_iterations: u64 = 0;
        loop {
            black_box(f());
            n_iterations += 1;

            if start.elapsed() > self.duration {
                break;
            }
        }
        let elapsed = start.elapsed();

        pttrans_log::info!(
            "Completed {} iterations in {:.3} s ({:.3} ms per iteration)",
            n_iterations,
            elapsed.as_secs_f64(),
            elapsed.as_secs_f64() * 1e3 / n_iterations as f64
        );
    }
}

impl Delayer {
    pub fn new(program_start: Instant, delay_seconds: f64) -> Self {
        Self {
            program_start,
            delay: Duration::from_secs_f64(delay_seconds),
        }
    }

    /// Returns how much of the delay is left.
    pub fn remaining(&self) -> Duration {
        self.delay.saturating_sub(self.program_start.elapsed())
    }

    fn wait(self) {
        let remaining = self.remaining();
        if remaining > Duration::ZERO {
            pttrans_log::debug!("Waiting {:.3} s before starting", remaining.as_secs_f64());
            std::thread::sleep(remaining);
        }
    }
}

/// Defines an enum with one variant for each of the listed benchmark
/// functions, along with the human-readable label to report each one under.
///
/// The variant for function `func` in module `module` (relative to the given
/// benchmarks module) is named `ModuleFunc`. The generated enum has the
/// associated constant `ALL` listing every variant, the method `label`
/// returning the label of a variant and the method `execute` calling the
/// benchmark function with a given [`Benchmarker`].
#[macro_export]
macro_rules! define_target_enum {
(
    $name:ident,
    $benchmarks_mod:path,
    $(
        $module:ident => {
            $($func:ident: $label:literal),* $(,)?
        }
    ),* $(,)?
) => {
    ::pastey::paste! {
        #[allow(clippy::enum_variant_names)]
        #[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
        pub enum $name {
            $(
                $( [<$module:camel $func:camel>] ),*
            ),*
        }

        impl $name {
            pub const ALL: &'static [Self] = &[
                $(
                    $( Self::[<$module:camel $func:camel>], )*
                )*
            ];

            pub fn label(&self) -> &'static str {
                match self {
                    $(
                        $( Self::[<$module:camel $func:camel>] => $label, )*
                    )*
                }
            }

            pub fn execute(&self, benchmarker: impl $crate::benchmark::Benchmarker) {
                match self {
                    $(
                        $( Self::[<$module:camel $func:camel>] => $benchmarks_mod::$module::$func(benchmarker), )*
                    )*
                }
            }
        }
    }};
}

/// Runs the benchmark `execute` with a [`BasicBenchmarker`] for `duration`
/// seconds, after waiting until `delay` seconds have passed since this
/// function was called.
pub fn benchmark(execute: impl Fn(BasicBenchmarker), duration: f64, delay: f64) {
    let start = Instant::now();

    let delayer = Delayer::new(start, delay);
    let duration = Duration::from_secs_f64(duration);

    let benchmarker = BasicBenchmarker::new(duration, delayer);

    execute(benchmarker);
}
