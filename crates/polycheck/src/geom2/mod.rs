//! 2D primitives shared by the validator and the classifier.
//!
//! Purpose
//! - One place for vector arithmetic, the orientation predicate, the
//!   parametric segment-intersection test and the slope collinearity test, so
//!   that validation and classification cannot drift apart.
//!
//! Numerics
//! - Predicates use exact floating-point comparisons. Near-degenerate inputs
//!   are decided by the sign of a tiny residual, not by a tolerance. Callers
//!   that want slack go through the named epsilons in `GeomCfg`.
//!
//! Code cross-refs: `validate::validate`, `classify::classify`

mod predicates;
mod types;
mod vector;

pub use predicates::{collinear_by_slope, cross, orientation, segments_intersect};
pub(crate) use predicates::slope;
pub(crate) use types::approx_eq;
pub use types::{GeomCfg, Method, Orientation, Point, Variant};
pub use vector::{angle_between, dot, length};

#[cfg(test)]
mod tests;
