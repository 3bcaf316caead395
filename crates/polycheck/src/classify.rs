//! Point classification against a validated polygon.
//!
//! Strategies
//! - Boundary test (`on_edge`) always runs first and short-circuits to
//!   `OnBoundary`.
//! - Angle-sum (`identify`): subtended edge angles at the query add up to 360°
//!   for interior points of a convex polygon and to strictly less outside.
//!   O(n) `acos` calls. Angles are unsigned, so on a concave polygon only points
//!   that see every edge with the same turning direction reach 360°.
//! - Parity (`in_polygon`): even-odd count of horizontal ray crossings. Only
//!   arithmetic, but undefined for points on the boundary.
//!
//! Numerics
//! - With `eps_boundary == 0` the line-equation test is exact: points that are
//!   on an edge on paper but miss by one rounding step are classified as
//!   interior or exterior.
//! - With `eps_angle == 0` the angle sum must hit 360 exactly, which
//!   accumulated rounding frequently prevents (false `Outside`). The default
//!   config therefore carries a small named slack.
//! - There is no "near the boundary" outcome; past the boundary test the
//!   verdict is binary.

use std::fmt;

use tracing::debug;

use crate::error::{GeomError, GeomResult};
use crate::geom2::{angle_between, approx_eq, slope, GeomCfg, Method, Point};
use crate::polygon::Polygon;

/// Where a query point lies relative to a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Inside,
    OnBoundary,
    Outside,
}

impl Classification {
    /// Short machine-friendly tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Classification::Inside => "inside",
            Classification::OnBoundary => "on_boundary",
            Classification::Outside => "outside",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Classification::Inside => "IN the polygon",
            Classification::OnBoundary => "ON the polygon",
            Classification::Outside => "OUT the polygon",
        };
        f.write_str(s)
    }
}

/// Boundary test: the query satisfies some edge's line equation within that
/// edge's bounding box.
///
/// Vertical edges use `x = x0` instead of a slope. Vertices match by exact
/// coordinate equality so the angle-sum never sees a zero-length arm.
pub fn on_edge(poly: &Polygon, q: Point, cfg: &GeomCfg) -> bool {
    let eps = cfg.eps_boundary;
    poly.edges().any(|(d1, d2)| {
        if q == d1 || q == d2 {
            return true;
        }
        if !in_box(q, d1, d2, eps) {
            return false;
        }
        match slope(d1, d2) {
            None => approx_eq(q.x, d1.x, eps),
            Some(s) => {
                let intercept = d1.y - s * d1.x;
                approx_eq(s * q.x + intercept, q.y, eps)
            }
        }
    })
}

#[inline]
fn in_box(q: Point, a: Point, b: Point, eps: f64) -> bool {
    q.x >= a.x.min(b.x) - eps
        && q.x <= a.x.max(b.x) + eps
        && q.y >= a.y.min(b.y) - eps
        && q.y <= a.y.max(b.y) + eps
}

/// Sum in degrees of the angles each edge subtends at `q`.
///
/// Errs with `NumericDomain` if `q` coincides with a vertex.
pub fn angle_sum(poly: &Polygon, q: Point) -> GeomResult<f64> {
    poly.edges()
        .try_fold(0.0, |acc, (d1, d2)| -> GeomResult<f64> {
            Ok(acc + angle_between(d1, d2, q)?)
        })
}

/// Angle-sum classification: `OnBoundary` from the boundary test, otherwise
/// `Inside` iff the angle sum is 360° within `cfg.eps_angle`.
pub fn identify(poly: &Polygon, q: Point, cfg: &GeomCfg) -> GeomResult<Classification> {
    if on_edge(poly, q, cfg) {
        return Ok(Classification::OnBoundary);
    }
    let sum = angle_sum(poly, q)?;
    debug!(sum, "angle sum");
    if approx_eq(sum, 360.0, cfg.eps_angle) {
        Ok(Classification::Inside)
    } else {
        Ok(Classification::Outside)
    }
}

/// Even-odd rule: count edges straddling `q.y` whose crossing lies left of `q.x`.
///
/// An edge straddles when one endpoint is strictly below `q.y` and the other is
/// at or above it, which also keeps the interpolation denominator non-zero.
/// The verdict for points exactly on an edge is unspecified; run `on_edge` first.
pub fn in_polygon(poly: &Polygon, q: Point) -> bool {
    let mut inside = false;
    for (d1, d2) in poly.edges() {
        let straddles = (d2.y < q.y && d1.y >= q.y) || (d1.y < q.y && d2.y >= q.y);
        if straddles {
            let x = d2.x + (q.y - d2.y) / (d1.y - d2.y) * (d1.x - d2.x);
            if x < q.x {
                inside = !inside;
            }
        }
    }
    inside
}

/// Boundary test, then the interior test selected by `cfg.method`.
pub fn classify(poly: &Polygon, q: Point, cfg: &GeomCfg) -> GeomResult<Classification> {
    if !(q.x.is_finite() && q.y.is_finite()) {
        return Err(GeomError::NonFiniteQuery);
    }
    let res = match cfg.method {
        Method::AngleSum => identify(poly, q, cfg)?,
        Method::Parity => {
            if on_edge(poly, q, cfg) {
                Classification::OnBoundary
            } else if in_polygon(poly, q) {
                Classification::Inside
            } else {
                Classification::Outside
            }
        }
    };
    debug!(x = q.x, y = q.y, method = ?cfg.method, result = res.kind(), "classified");
    Ok(res)
}
