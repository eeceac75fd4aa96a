//! Configuration of the benchmark inputs.

/// Number of spatial dimensions of the transformed points.
pub const N_DIMS: usize = 3;

/// Seed shared by every random generator, so that all scenarios within a
/// process see the same inputs.
pub const SEED: u64 = 0xDEAD_BEEF;

/// Number of points per batch in unoptimized builds, where timings are not
/// meaningful and the benchmarks serve as smoke tests.
pub const N_POINTS_SMOKE: usize = 50;

/// Number of points per batch in optimized builds.
pub const N_POINTS_FULL: usize = 500_000;

/// Parameters for generating the inputs of a benchmark scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Number of points in each generated batch.
    pub n_points: usize,
    /// Seed for the random point and transform generators.
    pub seed: u64,
}

impl BenchmarkConfig {
    /// Returns the number of points to use for the current build mode.
    pub const fn n_points_for_build() -> usize {
        if cfg!(debug_assertions) {
            N_POINTS_SMOKE
        } else {
            N_POINTS_FULL
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            n_points: Self::n_points_for_build(),
            seed: SEED,
        }
    }
}
