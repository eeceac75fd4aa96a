//! Benchmark targets.

pub mod benchmarks;

pttrans_profiling::define_target_enum! {
    Target,
    crate::benchmark::benchmarks,
    transformation => {
        looped_f64: "raw loop double",
        batched_f64: "eigen matrix double",
        looped_f32: "raw loop float",
        batched_f32: "eigen matrix float",
    },
}

/// Runs the given target repeatedly for `duration` seconds, starting once
/// `delay` seconds have passed.
pub fn benchmark(target: Target, duration: f64, delay: f64) {
    pttrans_log::with_timing_info_logging!(
        "Benchmark \"{}\"", target.label();
        pttrans_profiling::benchmark::benchmark(
            |benchmarker| target.execute(benchmarker),
            duration,
            delay,
        )
    );
}
