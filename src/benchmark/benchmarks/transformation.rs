//! Benchmarks for transforming batches of points.
//!
//! Each benchmark generates a fresh batch of random points and a random
//! rigid transform from the default [`BenchmarkConfig`], and then measures
//! repeated application of one strategy to that fixed input.

use pttrans_math::{
    Float,
    config::BenchmarkConfig,
    random::{create_random_points, create_random_transform},
    strategy::{TransformationStrategy, transform_points_batched, transform_points_looped},
};
use pttrans_profiling::benchmark::Benchmarker;

pub fn looped_f64(benchmarker: impl Benchmarker) {
    benchmark_strategy::<f64>(benchmarker, transform_points_looped);
}

pub fn batched_f64(benchmarker: impl Benchmarker) {
    benchmark_strategy::<f64>(benchmarker, transform_points_batched);
}

pub fn looped_f32(benchmarker: impl Benchmarker) {
    benchmark_strategy::<f32>(benchmarker, transform_points_looped);
}

pub fn batched_f32(benchmarker: impl Benchmarker) {
    benchmark_strategy::<f32>(benchmarker, transform_points_batched);
}

fn benchmark_strategy<F: Float>(
    benchmarker: impl Benchmarker,
    strategy: TransformationStrategy<F>,
) {
    let config = BenchmarkConfig::default();
    let points = create_random_points::<F>(&config);
    let transform = create_random_transform::<F>(&config);
    benchmarker.benchmark(&mut || strategy(&points, &transform));
}
