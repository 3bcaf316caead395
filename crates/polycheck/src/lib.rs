//! Planar polygon validation and point classification.
//!
//! A caller hands over an ordered vertex list; the validator decides whether
//! it describes an admissible simple polygon, and the classifier reports where
//! a query point sits relative to it (inside, on the boundary, outside).
//!
//! API Policy
//! - The two entry points live in [`api`]: `validate_polygon` and
//!   `classify_point`. Everything else is exposed for tests, benches and the CLI.
//! - Interactive input, retries and console output are the caller's business.

pub mod api;
pub mod classify;
pub mod error;
pub mod geom2;
pub mod polygon;
pub mod sample;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::{Point2, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{classify_point, validate_polygon};
    pub use crate::classify::Classification;
    pub use crate::error::GeomError;
    pub use crate::geom2::{GeomCfg, Method, Orientation, Point, Variant};
    pub use crate::polygon::Polygon;
    pub use crate::validate::ValidationResult;
    pub use nalgebra::{Point2, Vector2 as Vec2};
}
