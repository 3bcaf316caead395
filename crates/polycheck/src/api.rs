//! The two entry points called by the I/O layer.
//!
//! - `validate_polygon`: input-shape problems are `Err`, structural problems
//!   are an `Ok(ValidationResult)` that the caller acts on (e.g. re-prompt).
//! - `classify_point`: expects vertices that already passed validation; it does
//!   not re-run the checks.

pub use crate::classify::{angle_sum, classify, identify, in_polygon, on_edge, Classification};
pub use crate::error::{GeomError, GeomResult};
pub use crate::geom2::{GeomCfg, Method, Point, Variant};
pub use crate::polygon::Polygon;
pub use crate::validate::{validate, ValidationResult};

/// Validate an ordered vertex list (≥3 finite points).
pub fn validate_polygon(vertices: &[Point], cfg: &GeomCfg) -> GeomResult<ValidationResult> {
    let poly = Polygon::from_slice(vertices)?;
    Ok(validate(&poly, cfg))
}

/// Classify `query` against a polygon given by validated vertices.
pub fn classify_point(
    vertices: &[Point],
    query: Point,
    cfg: &GeomCfg,
) -> GeomResult<Classification> {
    let poly = Polygon::from_slice(vertices)?;
    classify(&poly, query, cfg)
}
