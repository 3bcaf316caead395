use nalgebra::Vector2;

use super::types::Point;
use crate::error::{GeomError, GeomResult};

/// `u.x*v.x + u.y*v.y`.
#[inline]
pub fn dot(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    u.dot(&v)
}

/// Euclidean length; 0 for the zero vector.
#[inline]
pub fn length(v: Vector2<f64>) -> f64 {
    v.norm()
}

/// Unsigned angle in degrees, in [0, 180], between `a - origin` and `b - origin`.
///
/// Pre: `origin` coincides with neither `a` nor `b`. A zero-length arm is
/// reported as `NumericDomain` instead of leaking NaN. The cosine is clamped
/// to [-1, 1] to absorb rounding overshoot before `acos`.
pub fn angle_between(a: Point, b: Point, origin: Point) -> GeomResult<f64> {
    let u = a - origin;
    let v = b - origin;
    let denom = length(u) * length(v);
    if denom == 0.0 {
        return Err(GeomError::NumericDomain {
            what: "angle with a zero-length vector",
        });
    }
    let cos = dot(u, v) / denom;
    if !cos.is_finite() {
        return Err(GeomError::NumericDomain {
            what: "angle cosine overflowed",
        });
    }
    Ok(cos.clamp(-1.0, 1.0).acos().to_degrees())
}
