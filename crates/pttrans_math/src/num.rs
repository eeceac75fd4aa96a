//! Numbers and numerics.

use nalgebra as na;
use rand::{Rng, distr::uniform::SampleUniform};
use rand_distr::StandardNormal;

/// Gathers traits useful for working with generic floating point types, along
/// with what the point transformation benchmark needs to know about each
/// precision.
pub trait Float: Copy + na::RealField + SampleUniform {
    const ZERO: Self;
    const ONE: Self;
    const TEN: Self;

    /// Tolerance within which two transformations of the same point batch are
    /// considered to agree, both as an absolute and a relative difference.
    const TRANSFORM_TOLERANCE: Self;

    /// Draws a sample from the normal distribution with zero mean and unit
    /// standard deviation.
    fn sample_standard_normal<R: Rng>(rng: &mut R) -> Self;
}

macro_rules! impl_float {
    ($f:ty, $tolerance:expr) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TEN: Self = 10.0;
            const TRANSFORM_TOLERANCE: Self = $tolerance;

            #[inline]
            fn sample_standard_normal<R: Rng>(rng: &mut R) -> Self {
                rng.sample(StandardNormal)
            }
        }
    };
}

impl_float!(f32, 1e-5);
impl_float!(f64, 1e-12);
