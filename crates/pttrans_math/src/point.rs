//! Batches of points.

use crate::{Float, config::N_DIMS};
use approx::{AbsDiffEq, RelativeEq};
use nalgebra::{Matrix3xX, Point3};

/// An ordered batch of 3D points.
///
/// The points are stored as the columns of a `3 x N` matrix, so the three
/// coordinates of each point are adjacent in memory.
#[derive(Clone, Debug, PartialEq)]
pub struct PointBatch<F: Float> {
    coords: Matrix3xX<F>,
}

impl<F: Float> PointBatch<F> {
    /// The largest number of points a batch can hold while leaving room for
    /// its homogeneous (four-row) counterpart in the address space.
    pub const MAX_POINTS: usize = isize::MAX as usize / ((N_DIMS + 1) * size_of::<F>());

    /// Creates a batch of `n_points` points at the origin.
    ///
    /// # Panics
    /// In debug builds, if `n_points` exceeds [`Self::MAX_POINTS`].
    pub fn zeros(n_points: usize) -> Self {
        debug_assert!(
            n_points <= Self::MAX_POINTS,
            "Point count {} exceeds batch capacity {}",
            n_points,
            Self::MAX_POINTS
        );
        Self {
            coords: Matrix3xX::zeros(n_points),
        }
    }

    /// Creates a batch holding the given points in order.
    pub fn from_points(points: &[Point3<F>]) -> Self {
        Self {
            coords: Matrix3xX::from_fn(points.len(), |i, j| points[j][i]),
        }
    }

    /// Wraps a matrix whose columns are the points of the batch.
    pub fn from_matrix(coords: Matrix3xX<F>) -> Self {
        Self { coords }
    }

    /// Returns the number of points in the batch.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.coords.ncols()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_points() == 0
    }

    /// Returns the point at the given index.
    ///
    /// # Panics
    /// If the index is out of bounds.
    #[inline]
    pub fn point(&self, idx: usize) -> Point3<F> {
        Point3::from(self.coords.column(idx).into_owned())
    }

    /// Returns an iterator over the points in the batch.
    pub fn points(&self) -> impl ExactSizeIterator<Item = Point3<F>> + '_ {
        self.coords
            .column_iter()
            .map(|column| Point3::from(column.into_owned()))
    }

    /// Returns the `3 x N` matrix of point coordinates.
    #[inline]
    pub fn as_matrix(&self) -> &Matrix3xX<F> {
        &self.coords
    }

    #[inline]
    pub fn as_matrix_mut(&mut self) -> &mut Matrix3xX<F> {
        &mut self.coords
    }
}

impl<F: Float> AbsDiffEq for PointBatch<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.n_points() == other.n_points() && self.coords.abs_diff_eq(&other.coords, epsilon)
    }
}

impl<F: Float> RelativeEq for PointBatch<F> {
    fn default_max_relative() -> F {
        F::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
        self.n_points() == other.n_points()
            && self.coords.relative_eq(&other.coords, epsilon, max_relative)
    }
}
