use thiserror::Error;

/// Errors raised before or outside the geometric checks.
///
/// Structural problems with a polygon (duplicates, crossings, ...) are not
/// errors; they are reported as [`crate::validate::ValidationResult`] values.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeomError {
    #[error("a polygon needs at least 3 vertices, got {found}")]
    TooFewVertices { found: usize },

    #[error("vertex {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("query point has a non-finite coordinate")]
    NonFiniteQuery,

    #[error("numeric domain violation: {what}")]
    NumericDomain { what: &'static str },
}

pub type GeomResult<T> = Result<T, GeomError>;
