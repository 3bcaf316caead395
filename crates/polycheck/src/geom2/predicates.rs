use super::types::{Orientation, Point};

/// Cross product `(q - p) × (r - q)`.
#[inline]
pub fn cross(p: Point, q: Point, r: Point) -> f64 {
    let pq = q - p;
    let qr = r - q;
    pq.x * qr.y - pq.y * qr.x
}

/// Turning direction of `p → q → r` from the sign of `(q - p) × (r - q)`.
///
/// Only an exact zero is `Collinear`. Points that are collinear on paper but
/// not in floating point are classified by the sign of the rounding residual.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let z = cross(p, q, r);
    if z > 0.0 {
        Orientation::CounterClockwise
    } else if z < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Parametric intersection test between segment `p1 → p2` and segment `p4 → p3`.
///
/// With `a = p2 - p1`, `b = p3 - p4`, `c = p1 - p3`, the crossing sits at
/// `alpha = num_a / den` along the first segment and `beta = num_b / den`
/// along the second. Both ratios must lie in `[0, 1]`; the comparison is done
/// on numerators against the signed denominator to avoid the division.
///
/// Parallel and collinear pairs (`den == 0`) report `false`, so overlapping
/// collinear segments are not detected.
pub fn segments_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let a = p2 - p1;
    let b = p3 - p4;
    let c = p1 - p3;

    let den = a.y * b.x - a.x * b.y;
    if den == 0.0 {
        return false;
    }
    let num_a = b.y * c.x - b.x * c.y;
    let num_b = a.x * c.y - a.y * c.x;

    within(num_a, den) && within(num_b, den)
}

/// `num / den ∈ [0, 1]` for a non-zero `den` of either sign.
#[inline]
fn within(num: f64, den: f64) -> bool {
    if den > 0.0 {
        (0.0..=den).contains(&num)
    } else {
        (den..=0.0).contains(&num)
    }
}

/// Slope of `a → b` equals slope of `a → c`.
///
/// Slopes are `Δy/Δx`; a zero `Δx` stands for an infinite (vertical) slope, so
/// two vertical directions compare equal and a vertical and a finite one do not.
pub fn collinear_by_slope(a: Point, b: Point, c: Point) -> bool {
    match (slope(a, b), slope(a, c)) {
        (None, None) => true,
        (Some(s1), Some(s2)) => s1 == s2,
        _ => false,
    }
}

/// `Δy/Δx`, or `None` for a vertical direction.
#[inline]
pub(crate) fn slope(from: Point, to: Point) -> Option<f64> {
    let dx = to.x - from.x;
    if dx == 0.0 {
        None
    } else {
        Some((to.y - from.y) / dx)
    }
}
