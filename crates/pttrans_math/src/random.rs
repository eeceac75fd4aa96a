//! Deterministic generation of random benchmark inputs.

use crate::{Float, config::BenchmarkConfig, point::PointBatch, transform::RigidTransform};
use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Generator of batches of points with every coordinate drawn uniformly from
/// `[0, 1)`.
#[derive(Clone, Debug)]
pub struct RandomPointGenerator {
    rng: Pcg64Mcg,
}

/// Generator of rigid transforms with a translation drawn uniformly from
/// `[-10, 10)^3` and a uniformly distributed rotation.
///
/// The rotation is obtained by normalizing a quaternion whose four components
/// are drawn from the standard normal distribution. If all four draws are
/// exactly zero the rotation is undefined, which is accepted as it does not
/// happen in practice.
#[derive(Clone, Debug)]
pub struct RandomTransformGenerator {
    rng: Pcg64Mcg,
}

impl RandomPointGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Generates a batch of `n_points` random points.
    pub fn generate<F: Float>(&mut self, n_points: usize) -> PointBatch<F> {
        let mut points = PointBatch::zeros(n_points);
        for coord in points.as_matrix_mut().iter_mut() {
            *coord = self.rng.random_range(F::ZERO..F::ONE);
        }
        points
    }
}

impl RandomTransformGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    pub fn generate<F: Float>(&mut self) -> RigidTransform<F> {
        let translation = Vector3::from_fn(|_, _| self.rng.random_range(-F::TEN..F::TEN));

        let [w, i, j, k] = std::array::from_fn(|_| F::sample_standard_normal(&mut self.rng));
        let rotation = UnitQuaternion::from_quaternion(Quaternion::new(w, i, j, k));

        RigidTransform::from_parts(translation, rotation)
    }
}

/// Generates the batch of points for a benchmark scenario, using a fresh
/// generator seeded from the configuration so that every call gives the same
/// batch.
pub fn create_random_points<F: Float>(config: &BenchmarkConfig) -> PointBatch<F> {
    pttrans_log::with_timing_trace_logging!(
        "Generating {} random points with seed {:#x}", config.n_points, config.seed;
        RandomPointGenerator::new(config.seed).generate(config.n_points)
    )
}

/// Generates the transform for a benchmark scenario, using a fresh generator
/// seeded from the configuration so that every call gives the same
/// transform.
pub fn create_random_transform<F: Float>(config: &BenchmarkConfig) -> RigidTransform<F> {
    pttrans_log::trace!("Generating random transform with seed {:#x}", config.seed);
    RandomTransformGenerator::new(config.seed).generate()
}
