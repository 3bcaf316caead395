//! Basic 2D types and tolerances.
//!
//! - `Point`: vertex / query position (`nalgebra::Point2<f64>`).
//! - `Orientation`: turning direction of an ordered point triple.
//! - `GeomCfg`: centralizes epsilons and the validation/classification strategy.

use nalgebra::Point2;

/// Vertex or query position in the plane.
pub type Point = Point2<f64>;

/// Turning direction of `p → q → r`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Which polygons the validator accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Convex polygons only (duplicates, crossings, convexity, collinearity).
    #[default]
    Convex,
    /// Any simple polygon, concave included (convexity is skipped).
    Simple,
}

/// Interior test used once the boundary test has ruled out `OnBoundary`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// Sum of subtended edge angles equals 360°.
    #[default]
    AngleSum,
    /// Even-odd count of horizontal ray crossings.
    Parity,
}

/// Geometry configuration (tolerances and strategy).
///
/// Zero epsilons mean exact `==` comparisons. Exact comparisons are a known
/// source of false negatives (a point mathematically on an edge, or a sum
/// mathematically equal to 360°, can miss by one rounding step).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Per-axis slack when comparing two vertices for the duplicate check.
    pub eps_coincide: f64,
    /// Slack on the line equation `y = slope·x + intercept` in the boundary test.
    pub eps_boundary: f64,
    /// Slack (degrees) on `angle_sum == 360` in the angle-sum interior test.
    pub eps_angle: f64,
    pub variant: Variant,
    pub method: Method,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_coincide: 0.0,
            eps_boundary: 0.0,
            eps_angle: 1e-9,
            variant: Variant::Convex,
            method: Method::AngleSum,
        }
    }
}

impl GeomCfg {
    /// All comparisons exact, including `angle_sum == 360`.
    pub fn exact() -> Self {
        Self {
            eps_angle: 0.0,
            ..Self::default()
        }
    }

    /// Concave polygons allowed; classified with the parity rule, since the
    /// unsigned angle sum only reaches 360° from points that see every edge
    /// with the same turning direction.
    pub fn simple() -> Self {
        Self {
            variant: Variant::Simple,
            method: Method::Parity,
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_variant(self, variant: Variant) -> Self {
        Self { variant, ..self }
    }

    #[inline]
    pub fn with_method(self, method: Method) -> Self {
        Self { method, ..self }
    }
}

/// `|a - b| <= eps`, degenerating to `a == b` when `eps == 0`.
#[inline]
pub(crate) fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if eps == 0.0 {
        a == b
    } else {
        (a - b).abs() <= eps
    }
}
