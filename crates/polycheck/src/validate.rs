//! Polygon validator: duplicate, crossing, convexity and collinearity checks.
//!
//! Order
//! - duplicates → self-intersection → convexity (`Variant::Convex` only) →
//!   collinearity. The first failing check determines the reported reason; a
//!   polygon may well fail several.
//!
//! Numerics
//! - Duplicates compare coordinates exactly unless `GeomCfg::eps_coincide > 0`.
//! - Convexity is a single orientation-sign scan; exact-zero turns are skipped
//!   there and left to the collinearity check.
//! - Collinearity flags a triple when either the slope comparison or the cross
//!   product says it is straight. Rounding can make the two disagree, and a
//!   zero turn skipped by the convexity scan must not pass as valid.
//!
//! Code cross-refs: `geom2::{segments_intersect, orientation, collinear_by_slope}`

use std::fmt;

use tracing::debug;

use crate::geom2::{
    approx_eq, collinear_by_slope, orientation, segments_intersect, GeomCfg, Orientation, Variant,
};
use crate::polygon::Polygon;

/// Validation verdict. Failure variants carry the offending indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationResult {
    Valid,
    /// Vertices `first < second` coincide.
    DuplicateVertices { first: usize, second: usize },
    /// Non-adjacent edges `first < second` cross (edge `i` is `v[i] → v[i+1]`).
    SelfIntersecting { first: usize, second: usize },
    /// `v[vertex], v[vertex+1], v[vertex+2]` lie on one line.
    CollinearTriple { vertex: usize },
    /// The turning sign flips at the triple starting at `vertex`.
    NotConvex { vertex: usize },
}

impl ValidationResult {
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Short machine-friendly tag.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationResult::Valid => "valid",
            ValidationResult::DuplicateVertices { .. } => "duplicate_vertices",
            ValidationResult::SelfIntersecting { .. } => "self_intersecting",
            ValidationResult::CollinearTriple { .. } => "collinear_triple",
            ValidationResult::NotConvex { .. } => "not_convex",
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ValidationResult::Valid => write!(f, "valid polygon"),
            ValidationResult::DuplicateVertices { first, second } => {
                write!(f, "duplicate vertices {first} and {second}")
            }
            ValidationResult::SelfIntersecting { first, second } => {
                write!(f, "edges {first} and {second} intersect")
            }
            ValidationResult::CollinearTriple { vertex } => {
                write!(f, "three consecutive vertices from {vertex} are on the same line")
            }
            ValidationResult::NotConvex { vertex } => {
                write!(f, "polygon turns the other way at vertex {vertex}; only convex polygons are accepted")
            }
        }
    }
}

/// Run all checks for `cfg.variant`; first failure wins.
pub fn validate(poly: &Polygon, cfg: &GeomCfg) -> ValidationResult {
    let res = check_duplicates(poly, cfg.eps_coincide)
        .or_else(|| check_self_intersection(poly))
        .or_else(|| match cfg.variant {
            Variant::Convex => check_convexity(poly),
            Variant::Simple => None,
        })
        .or_else(|| check_collinearity(poly))
        .unwrap_or(ValidationResult::Valid);
    if !res.is_valid() {
        debug!(n = poly.len(), reason = res.kind(), %res, "polygon rejected");
    }
    res
}

/// O(n²) pairwise coordinate comparison.
pub fn check_duplicates(poly: &Polygon, eps: f64) -> Option<ValidationResult> {
    let v = poly.vertices();
    for i in 0..v.len() {
        for j in (i + 1)..v.len() {
            if approx_eq(v[i].x, v[j].x, eps) && approx_eq(v[i].y, v[j].y, eps) {
                return Some(ValidationResult::DuplicateVertices { first: i, second: j });
            }
        }
    }
    None
}

/// Every pair of edges that share no endpoint, tested with `segments_intersect`.
pub fn check_self_intersection(poly: &Polygon) -> Option<ValidationResult> {
    let n = poly.len();
    for i in 0..n {
        for j in (i + 2)..n {
            if poly.edges_adjacent(i, j) {
                continue;
            }
            let (p1, p2) = poly.edge(i);
            let (p3, p4) = poly.edge(j);
            if segments_intersect(p1, p2, p3, p4) {
                return Some(ValidationResult::SelfIntersecting { first: i, second: j });
            }
        }
    }
    None
}

/// Orientation-sign consistency around the cycle; collinear turns are skipped.
pub fn check_convexity(poly: &Polygon) -> Option<ValidationResult> {
    let mut seen: Option<Orientation> = None;
    for (i, a, b, c) in poly.triples() {
        let o = orientation(a, b, c);
        if o == Orientation::Collinear {
            continue;
        }
        match seen {
            None => seen = Some(o),
            Some(s) if s != o => return Some(ValidationResult::NotConvex { vertex: i }),
            Some(_) => {}
        }
    }
    None
}

/// Slope or zero-cross test on every consecutive triple.
pub fn check_collinearity(poly: &Polygon) -> Option<ValidationResult> {
    poly.triples()
        .find(|&(_, a, b, c)| {
            collinear_by_slope(a, b, c) || orientation(a, b, c) == Orientation::Collinear
        })
        .map(|(vertex, ..)| ValidationResult::CollinearTriple { vertex })
}
