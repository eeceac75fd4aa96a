//! Strategies for applying a rigid transform to a batch of points.
//!
//! Both strategies lift each point to homogeneous coordinates with unit
//! weight, multiply by the homogeneous matrix of the transform and drop the
//! weight again. They borrow the input batch immutably and return a newly
//! allocated batch, so that their timings are directly comparable.

use crate::{Float, point::PointBatch, transform::RigidTransform};
use approx::RelativeEq;
use nalgebra::{Matrix4xX, Vector4};

/// A function applying a rigid transform to a batch of points.
pub type TransformationStrategy<F> = fn(&PointBatch<F>, &RigidTransform<F>) -> PointBatch<F>;

/// Transforms all the points with a single matrix product between the
/// homogeneous transform matrix and the homogeneous coordinates of the whole
/// batch.
pub fn transform_points_batched<F: Float>(
    points: &PointBatch<F>,
    transform: &RigidTransform<F>,
) -> PointBatch<F> {
    let mut homogeneous_points = Matrix4xX::from_element(points.n_points(), F::ONE);
    homogeneous_points
        .fixed_rows_mut::<3>(0)
        .copy_from(points.as_matrix());

    // The last row of the product would just be the unit weights, so only the
    // first three rows of the transform are multiplied in
    let affine_rows = transform.homogeneous_matrix().fixed_rows::<3>(0);

    PointBatch::from_matrix(affine_rows * homogeneous_points)
}

/// Transforms the points one at a time, each through a separate product
/// between the homogeneous transform matrix and the homogeneous coordinates
/// of the point.
///
/// # Panics
/// With the `cross_check` feature enabled, if the result does not agree with
/// that of [`transform_points_batched`] within
/// [`Float::TRANSFORM_TOLERANCE`].
pub fn transform_points_looped<F: Float>(
    points: &PointBatch<F>,
    transform: &RigidTransform<F>,
) -> PointBatch<F> {
    let matrix = transform.homogeneous_matrix();

    let mut transformed_points = points.clone();

    for mut point in transformed_points.as_matrix_mut().column_iter_mut() {
        let homogeneous_point = matrix * Vector4::new(point[0], point[1], point[2], F::ONE);
        point.copy_from(&homogeneous_point.xyz());
    }

    #[cfg(feature = "cross_check")]
    assert!(
        transformations_agree(
            &transformed_points,
            &transform_points_batched(points, transform)
        ),
        "Looped and batched point transformations disagree"
    );

    transformed_points
}

/// Whether the two batches hold the same number of points and all their
/// coordinates agree within [`Float::TRANSFORM_TOLERANCE`], either in absolute
/// or in relative terms.
pub fn transformations_agree<F: Float>(a: &PointBatch<F>, b: &PointBatch<F>) -> bool {
    a.relative_eq(b, F::TRANSFORM_TOLERANCE, F::TRANSFORM_TOLERANCE)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::random::{RandomPointGenerator, RandomTransformGenerator};
    use approx::{assert_abs_diff_eq, relative_eq};
    use nalgebra::{Point3, UnitQuaternion, Vector3, point, vector};
    use proptest::prelude::*;

    const STRATEGIES_F32: [TransformationStrategy<f32>; 2] =
        [transform_points_batched, transform_points_looped];
    const STRATEGIES_F64: [TransformationStrategy<f64>; 2] =
        [transform_points_batched, transform_points_looped];

    prop_compose! {
        fn point_batch_strategy()(
            seed in any::<u64>(),
            n_points in 0_usize..200,
        ) -> PointBatch<f64> {
            RandomPointGenerator::new(seed).generate(n_points)
        }
    }

    prop_compose! {
        fn transform_strategy()(seed in any::<u64>()) -> RigidTransform<f64> {
            RandomTransformGenerator::new(seed).generate()
        }
    }

    prop_compose! {
        fn point_batch_strategy_f32()(
            seed in any::<u64>(),
            n_points in 0_usize..200,
        ) -> PointBatch<f32> {
            RandomPointGenerator::new(seed).generate(n_points)
        }
    }

    prop_compose! {
        fn transform_strategy_f32()(seed in any::<u64>()) -> RigidTransform<f32> {
            RandomTransformGenerator::new(seed).generate()
        }
    }

    fn example_points<F: Float>() -> PointBatch<F> {
        PointBatch::from_matrix(
            PointBatch::from_points(&[
                point![0.1, 0.2, 0.3],
                point![0.4, 0.5, 0.6],
                point![0.7, 0.8, 0.9],
            ])
            .as_matrix()
            .clone()
            .cast::<F>(),
        )
    }

    fn translated_example_points<F: Float>() -> PointBatch<F> {
        PointBatch::from_matrix(
            PointBatch::from_points(&[
                point![1.1, 0.2, 0.3],
                point![1.4, 0.5, 0.6],
                point![1.7, 0.8, 0.9],
            ])
            .as_matrix()
            .clone()
            .cast::<F>(),
        )
    }

    #[test]
    fn translating_example_points_along_x_gives_expected_points() {
        let transform = RigidTransform::from_translation(vector![1.0, 0.0, 0.0]);
        for strategy in STRATEGIES_F64 {
            assert_abs_diff_eq!(
                strategy(&example_points(), &transform),
                translated_example_points(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn translating_single_precision_example_points_along_x_gives_expected_points() {
        let transform = RigidTransform::from_translation(vector![1.0, 0.0, 0.0]);
        for strategy in STRATEGIES_F32 {
            assert_abs_diff_eq!(
                strategy(&example_points(), &transform),
                translated_example_points(),
                epsilon = 1e-5
            );
        }
    }

    #[test]
    fn rotating_point_about_z_by_quarter_turn_maps_x_to_y() {
        let transform = RigidTransform::from_rotation(UnitQuaternion::from_axis_angle(
            &Vector3::z_axis(),
            std::f64::consts::FRAC_PI_2,
        ));
        let points = PointBatch::from_points(&[point![2.0, 0.0, 0.0]]);
        for strategy in STRATEGIES_F64 {
            assert_abs_diff_eq!(
                strategy(&points, &transform).point(0),
                point![0.0, 2.0, 0.0],
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn transformation_applies_rotation_before_translation() {
        let transform = RigidTransform::from_parts(
            vector![0.0, 0.0, 5.0],
            UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI),
        );
        let points = PointBatch::from_points(&[point![0.0, 1.0, 1.0]]);
        for strategy in STRATEGIES_F64 {
            assert_abs_diff_eq!(
                strategy(&points, &transform).point(0),
                point![0.0, -1.0, 4.0],
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn transforming_empty_batch_gives_empty_batch() {
        let transform = RandomTransformGenerator::new(1).generate();
        for strategy in STRATEGIES_F64 {
            assert!(strategy(&PointBatch::zeros(0), &transform).is_empty());
        }
        let transform = RandomTransformGenerator::new(1).generate();
        for strategy in STRATEGIES_F32 {
            assert!(strategy(&PointBatch::zeros(0), &transform).is_empty());
        }
    }

    #[test]
    fn transforming_does_not_modify_input_batch() {
        let points = example_points::<f64>();
        let transform = RandomTransformGenerator::new(3).generate();
        for strategy in STRATEGIES_F64 {
            let _ = strategy(&points, &transform);
            assert_eq!(points, example_points());
        }
    }

    #[test]
    fn strategies_match_isometry_point_transformation() {
        let points = RandomPointGenerator::new(5).generate::<f64>(20);
        let transform = RandomTransformGenerator::new(5).generate();
        let expected: Vec<Point3<f64>> = points
            .points()
            .map(|point| transform.isometry().transform_point(&point))
            .collect();
        for strategy in STRATEGIES_F64 {
            let transformed = strategy(&points, &transform);
            for (point, expected_point) in transformed.points().zip(&expected) {
                assert_abs_diff_eq!(point, *expected_point, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn batches_with_different_lengths_do_not_agree() {
        let a = PointBatch::<f64>::zeros(3);
        let b = PointBatch::<f64>::zeros(4);
        assert!(!transformations_agree(&a, &b));
    }

    proptest! {
        #[test]
        fn batched_and_looped_transformations_agree_f64(
            points in point_batch_strategy(),
            transform in transform_strategy(),
        ) {
            let batched = transform_points_batched(&points, &transform);
            let looped = transform_points_looped(&points, &transform);
            prop_assert_eq!(batched.n_points(), points.n_points());
            prop_assert!(transformations_agree(&batched, &looped));
        }

        #[test]
        fn batched_and_looped_transformations_agree_f32(
            points in point_batch_strategy_f32(),
            transform in transform_strategy_f32(),
        ) {
            let batched = transform_points_batched(&points, &transform);
            let looped = transform_points_looped(&points, &transform);
            prop_assert_eq!(batched.n_points(), points.n_points());
            prop_assert!(transformations_agree(&batched, &looped));
        }

        #[test]
        fn identity_transformation_leaves_points_unchanged(points in point_batch_strategy()) {
            let transform = RigidTransform::identity();
            for strategy in STRATEGIES_F64 {
                prop_assert!(transformations_agree(&strategy(&points, &transform), &points));
            }
        }

        #[test]
        fn transforming_with_inverse_restores_points(
            points in point_batch_strategy(),
            transform in transform_strategy(),
        ) {
            let inverse = transform.inverse();
            for strategy in STRATEGIES_F64 {
                let restored = strategy(&strategy(&points, &transform), &inverse);
                prop_assert!(transformations_agree(&restored, &points));
            }
        }

        #[test]
        fn transforming_with_inverse_restores_points_f32(
            points in point_batch_strategy_f32(),
            transform in transform_strategy_f32(),
        ) {
            let inverse = transform.inverse();
            for strategy in STRATEGIES_F32 {
                let restored = strategy(&strategy(&points, &transform), &inverse);
                prop_assert!(relative_eq!(restored, points, epsilon = 1e-4, max_relative = 1e-4));
            }
        }

        #[test]
        fn transformation_preserves_distances(
            points in point_batch_strategy(),
            transform in transform_strategy(),
        ) {
            prop_assume!(points.n_points() >= 2);
            for strategy in STRATEGIES_F64 {
                let transformed = strategy(&points, &transform);
                let original_distance = (points.point(1) - points.point(0)).norm();
                let transformed_distance = (transformed.point(1) - transformed.point(0)).norm();
                prop_assert!(relative_eq!(original_distance, transformed_distance, epsilon = 1e-12));
            }
        }
    }
}
