use super::*;
use crate::error::GeomError;
use nalgebra::{point, vector};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn dot_and_length_basics() {
    assert_eq!(dot(vector![1.0, 2.0], vector![3.0, -4.0]), -5.0);
    assert_eq!(length(vector![3.0, 4.0]), 5.0);
    assert_eq!(length(vector![0.0, 0.0]), 0.0);
}

#[test]
fn angle_between_right_straight_and_zero() {
    let o = point![0.0, 0.0];
    let right = angle_between(point![1.0, 0.0], point![0.0, 2.0], o).unwrap();
    assert!((right - 90.0).abs() < 1e-12);
    let straight = angle_between(point![1.0, 0.0], point![-3.0, 0.0], o).unwrap();
    assert!((straight - 180.0).abs() < 1e-12);
    let same = angle_between(point![2.0, 2.0], point![1.0, 1.0], o).unwrap();
    assert!(same.abs() < 1e-5);
}

#[test]
fn angle_between_rejects_zero_arm() {
    let o = point![1.0, 1.0];
    let err = angle_between(o, point![2.0, 0.0], o).unwrap_err();
    assert!(matches!(err, GeomError::NumericDomain { .. }));
    let err = angle_between(point![2.0, 0.0], o, o).unwrap_err();
    assert!(matches!(err, GeomError::NumericDomain { .. }));
}

#[test]
fn angle_between_stays_in_range_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let a = point![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
        let b = point![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
        let o = point![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
        let ang = angle_between(a, b, o).unwrap();
        assert!((0.0..=180.0).contains(&ang));
        // Symmetric in its two arms.
        let rev = angle_between(b, a, o).unwrap();
        assert!((ang - rev).abs() < 1e-9);
    }
}

#[test]
fn orientation_signs() {
    let p = point![0.0, 0.0];
    let q = point![1.0, 0.0];
    assert_eq!(orientation(p, q, point![1.0, 1.0]), Orientation::CounterClockwise);
    assert_eq!(orientation(p, q, point![1.0, -1.0]), Orientation::Clockwise);
    assert_eq!(orientation(p, q, point![5.0, 0.0]), Orientation::Collinear);
    // Backtracking along the same line is still collinear.
    assert_eq!(orientation(p, q, point![-3.0, 0.0]), Orientation::Collinear);
}

#[test]
fn orientation_has_no_tolerance() {
    // 1e-300 off the x-axis is already a turn.
    let o = orientation(point![0.0, 0.0], point![1.0, 0.0], point![2.0, 1e-300]);
    assert_eq!(o, Orientation::CounterClockwise);
}

#[test]
fn segments_cross_in_the_middle() {
    assert!(segments_intersect(
        point![0.0, 0.0],
        point![1.0, 1.0],
        point![1.0, 0.0],
        point![0.0, 1.0],
    ));
    // Argument order of the second segment does not matter.
    assert!(segments_intersect(
        point![0.0, 0.0],
        point![1.0, 1.0],
        point![0.0, 1.0],
        point![1.0, 0.0],
    ));
}

#[test]
fn segments_that_miss() {
    // Lines cross at (2, 0), past the end of the first segment.
    assert!(!segments_intersect(
        point![0.0, 0.0],
        point![1.0, 0.0],
        point![2.0, 0.0],
        point![1.0, 1.0],
    ));
    assert!(!segments_intersect(
        point![0.0, 0.0],
        point![1.0, 0.0],
        point![0.0, 1.0],
        point![1.0, 2.0],
    ));
}

#[test]
fn segments_touching_at_endpoint_count() {
    // T-junction: closed parameter range includes the endpoint.
    assert!(segments_intersect(
        point![0.0, 0.0],
        point![2.0, 0.0],
        point![1.0, 0.0],
        point![1.0, 1.0],
    ));
}

#[test]
fn parallel_and_overlapping_segments_are_not_reported() {
    assert!(!segments_intersect(
        point![0.0, 0.0],
        point![1.0, 0.0],
        point![0.0, 1.0],
        point![1.0, 1.0],
    ));
    // Known limitation: collinear overlap goes undetected.
    assert!(!segments_intersect(
        point![0.0, 0.0],
        point![2.0, 0.0],
        point![1.0, 0.0],
        point![3.0, 0.0],
    ));
}

#[test]
fn slope_collinearity_with_vertical_edges() {
    assert!(collinear_by_slope(point![0.0, 0.0], point![1.0, 0.0], point![2.0, 0.0]));
    assert!(collinear_by_slope(point![0.0, 0.0], point![1.0, 1.0], point![3.0, 3.0]));
    assert!(collinear_by_slope(point![1.0, 0.0], point![1.0, 1.0], point![1.0, 5.0]));
    assert!(!collinear_by_slope(point![1.0, 0.0], point![1.0, 1.0], point![0.0, 1.0]));
    assert!(!collinear_by_slope(point![0.0, 0.0], point![1.0, 0.0], point![1.0, 1.0]));
}

#[test]
fn cfg_exact_zeroes_angle_slack() {
    let d = GeomCfg::default();
    assert!(d.eps_angle > 0.0);
    let e = GeomCfg::exact();
    assert_eq!(e.eps_angle, 0.0);
    assert_eq!(e.eps_boundary, 0.0);
    assert_eq!(e.eps_coincide, 0.0);
    let s = d.with_variant(Variant::Simple).with_method(Method::Parity);
    assert_eq!(s.variant, Variant::Simple);
    assert_eq!(s.method, Method::Parity);
}
