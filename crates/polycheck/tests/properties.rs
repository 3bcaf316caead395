//! Property tests over seeded random polygons.

use nalgebra::Point2;
use polycheck::prelude::*;
use polycheck::sample::{draw_convex, draw_star, vertex_centroid, RadialCfg, ReplayToken};
use polycheck::{classify::angle_sum, validate::validate};
use proptest::prelude::*;

fn convex(seed: u64, index: u64) -> Polygon {
    draw_convex(RadialCfg::default(), ReplayToken { seed, index }).expect("hull")
}

fn dist_to_segment(q: Point2<f64>, a: Point2<f64>, b: Point2<f64>) -> f64 {
    let ab = b - a;
    let t = ((q - a).dot(&ab) / ab.norm_squared()).clamp(0.0, 1.0);
    (q - (a + ab * t)).norm()
}

fn dist_to_boundary(poly: &Polygon, q: Point2<f64>) -> f64 {
    poly.edges()
        .map(|(a, b)| dist_to_segment(q, a, b))
        .fold(f64::INFINITY, f64::min)
}

proptest! {
    #[test]
    fn random_convex_polygons_are_valid(seed in any::<u64>(), index in 0u64..1000) {
        let p = convex(seed, index);
        prop_assert_eq!(validate(&p, &GeomCfg::default()), ValidationResult::Valid);
        prop_assert_eq!(validate(&p, &GeomCfg::simple()), ValidationResult::Valid);
    }

    #[test]
    fn repeated_vertex_is_always_a_duplicate(
        seed in any::<u64>(),
        pick in any::<prop::sample::Index>(),
        at in any::<prop::sample::Index>(),
    ) {
        let p = convex(seed, 0);
        let mut verts = p.vertices().to_vec();
        let v = verts[pick.index(verts.len())];
        let pos = at.index(verts.len() + 1);
        verts.insert(pos, v);
        let res = validate_polygon(&verts, &GeomCfg::default()).unwrap();
        prop_assert!(
            matches!(res, ValidationResult::DuplicateVertices { .. }),
            "got {:?}",
            res
        );
    }

    #[test]
    fn classification_is_idempotent_and_rotation_invariant(
        seed in any::<u64>(),
        shift in 0usize..32,
        qx in -2.0f64..2.0,
        qy in -2.0f64..2.0,
    ) {
        let p = convex(seed, 1);
        let q = Point2::new(qx, qy);
        // Keep the angle sum clear of rounding noise near 180° arms.
        prop_assume!(dist_to_boundary(&p, q) > 1e-6);
        for cfg in [GeomCfg::default(), GeomCfg::default().with_method(Method::Parity)] {
            let first = classify_point(p.vertices(), q, &cfg).unwrap();
            let again = classify_point(p.vertices(), q, &cfg).unwrap();
            prop_assert_eq!(first, again);
            let r = p.rotated(shift);
            prop_assert_eq!(classify_point(r.vertices(), q, &cfg).unwrap(), first);
        }
    }

    #[test]
    fn angle_sum_is_full_turn_inside_and_less_outside(seed in any::<u64>(), dir in 0.0f64..std::f64::consts::TAU) {
        let p = convex(seed, 2);
        let c = vertex_centroid(&p);
        let inside = angle_sum(&p, c).unwrap();
        prop_assert!((inside - 360.0).abs() < 1e-9, "inside sum {}", inside);
        prop_assert_eq!(classify_point(p.vertices(), c, &GeomCfg::default()).unwrap(), Classification::Inside);

        // Sampled radii stay below 2, so this is well outside.
        let far = Point2::new(c.x + 5.0 * dir.cos(), c.y + 5.0 * dir.sin());
        let outside = angle_sum(&p, far).unwrap();
        prop_assert!(outside < 360.0 - 1e-6, "outside sum {}", outside);
        prop_assert_eq!(classify_point(p.vertices(), far, &GeomCfg::default()).unwrap(), Classification::Outside);
    }

    #[test]
    fn strategies_agree_away_from_the_boundary(
        seed in any::<u64>(),
        qx in -2.0f64..2.0,
        qy in -2.0f64..2.0,
    ) {
        let p = convex(seed, 3);
        let q = Point2::new(qx, qy);
        prop_assume!(dist_to_boundary(&p, q) > 1e-6);
        let by_angle = classify_point(p.vertices(), q, &GeomCfg::default()).unwrap();
        let by_parity = classify_point(p.vertices(), q, &GeomCfg::default().with_method(Method::Parity)).unwrap();
        prop_assert_eq!(by_angle, by_parity);
    }

    #[test]
    fn star_polygons_are_simple_and_parity_finds_their_center(seed in any::<u64>()) {
        let cfg = RadialCfg { angle_jitter_frac: 0.2, ..RadialCfg::default() };
        let p = draw_star(cfg, ReplayToken { seed, index: 4 }).expect("star");
        let res = validate(&p, &GeomCfg::simple());
        prop_assert_eq!(res, ValidationResult::Valid);
        // Angular gaps stay below π, so the sampling center is interior.
        prop_assume!(dist_to_boundary(&p, Point2::origin()) > 1e-6);
        prop_assert_eq!(
            classify_point(p.vertices(), Point2::origin(), &GeomCfg::simple()).unwrap(),
            Classification::Inside
        );
    }
}

#[test]
fn bowtie_flat_and_unit_square() {
    let cfg = GeomCfg::default();
    let pts = |v: &[(f64, f64)]| v.iter().map(|&(x, y)| Point2::new(x, y)).collect::<Vec<_>>();

    let bowtie = pts(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
    assert!(matches!(
        validate_polygon(&bowtie, &cfg).unwrap(),
        ValidationResult::SelfIntersecting { .. }
    ));

    let flat = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (1.0, 1.0)]);
    assert!(matches!(
        validate_polygon(&flat, &cfg).unwrap(),
        ValidationResult::CollinearTriple { .. }
    ));

    let square = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    assert_eq!(validate_polygon(&square, &cfg).unwrap(), ValidationResult::Valid);
    assert_eq!(
        classify_point(&square, Point2::new(0.5, 0.5), &cfg).unwrap(),
        Classification::Inside
    );
    assert_eq!(
        classify_point(&square, Point2::new(0.0, 0.5), &cfg).unwrap(),
        Classification::OnBoundary
    );
    assert_eq!(
        classify_point(&square, Point2::new(2.0, 2.0), &cfg).unwrap(),
        Classification::Outside
    );
}
