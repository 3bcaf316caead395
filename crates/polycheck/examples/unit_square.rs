//! Validate the unit square and a few broken variants, then classify probes.
//!
//! Usage:
//!   cargo run -p polycheck --example unit_square

use polycheck::prelude::*;

fn main() {
    let cfg = GeomCfg::default();
    let shapes: [(&str, Vec<Point2<f64>>); 3] = [
        (
            "square",
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ],
        ),
        (
            "bowtie",
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(1.0, 0.0),
                Point2::new(0.0, 1.0),
            ],
        ),
        (
            "flat",
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(1.0, 1.0),
            ],
        ),
    ];
    for (name, verts) in &shapes {
        match validate_polygon(verts, &cfg) {
            Ok(v) => println!("{name}: {v}"),
            Err(e) => println!("{name}: error: {e}"),
        }
    }

    let square = &shapes[0].1;
    for q in [
        Point2::new(0.5, 0.5),
        Point2::new(0.0, 0.5),
        Point2::new(2.0, 2.0),
    ] {
        match classify_point(square, q, &cfg) {
            Ok(c) => println!("({}, {}): {c}", q.x, q.y),
            Err(e) => println!("({}, {}): error: {e}", q.x, q.y),
        }
    }
}
