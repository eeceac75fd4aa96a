//! Rigid transforms.

use crate::Float;
use approx::{AbsDiffEq, RelativeEq};
use nalgebra::{Isometry3, Matrix4, Translation3, UnitQuaternion, Vector3};

/// A rotation followed by a translation, preserving distances and angles.
///
/// The transform is kept both as an [`Isometry3`] and as the equivalent
/// homogeneous `4 x 4` matrix, which is what gets applied to points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigidTransform<F: Float> {
    isometry: Isometry3<F>,
    matrix: Matrix4<F>,
}

impl<F: Float> RigidTransform<F> {
    #[inline]
    pub fn identity() -> Self {
        Self::from_isometry(Isometry3::identity())
    }

    /// Creates the transform that first applies the given rotation and then
    /// the given translation.
    #[inline]
    pub fn from_parts(translation: Vector3<F>, rotation: UnitQuaternion<F>) -> Self {
        Self::from_isometry(Isometry3::from_parts(
            Translation3::from(translation),
            rotation,
        ))
    }

    #[inline]
    pub fn from_translation(translation: Vector3<F>) -> Self {
        Self::from_parts(translation, UnitQuaternion::identity())
    }

    #[inline]
    pub fn from_rotation(rotation: UnitQuaternion<F>) -> Self {
        Self::from_parts(Vector3::zeros(), rotation)
    }

    #[inline]
    pub fn from_isometry(isometry: Isometry3<F>) -> Self {
        Self {
            isometry,
            matrix: isometry.to_homogeneous(),
        }
    }

    #[inline]
    pub fn inverse(&self) -> Self {
        Self::from_isometry(self.isometry.inverse())
    }

    #[inline]
    pub fn translation(&self) -> &Vector3<F> {
        &self.isometry.translation.vector
    }

    #[inline]
    pub fn rotation(&self) -> &UnitQuaternion<F> {
        &self.isometry.rotation
    }

    #[inline]
    pub fn isometry(&self) -> &Isometry3<F> {
        &self.isometry
    }

    /// Returns the homogeneous matrix of the transform. Its bottom row is
    /// always `[0, 0, 0, 1]`.
    #[inline]
    pub fn homogeneous_matrix(&self) -> &Matrix4<F> {
        &self.matrix
    }
}

impl<F: Float> AbsDiffEq for RigidTransform<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.isometry.abs_diff_eq(&other.isometry, epsilon)
    }
}

impl<F: Float> RelativeEq for RigidTransform<F> {
    fn default_max_relative() -> F {
        F::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
        self.isometry.relative_eq(&other.isometry, epsilon, max_relative)
    }
}
