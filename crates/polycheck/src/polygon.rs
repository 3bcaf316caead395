//! Cyclic vertex sequence with on-demand edges.
//!
//! A `Polygon` only guarantees input shape (≥3 vertices, finite coordinates).
//! Structural validity is decided by [`crate::validate::validate`].

use crate::error::{GeomError, GeomResult};
use crate::geom2::Point;

/// Ordered vertices; vertex `i` connects to vertex `(i + 1) % n`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    verts: Vec<Point>,
}

impl Polygon {
    /// Check input shape and take ownership of the vertex list.
    pub fn new(verts: Vec<Point>) -> GeomResult<Self> {
        if verts.len() < 3 {
            return Err(GeomError::TooFewVertices { found: verts.len() });
        }
        if let Some(index) = verts
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(GeomError::NonFinite { index });
        }
        Ok(Self { verts })
    }

    /// Same as [`Polygon::new`] from a borrowed slice.
    pub fn from_slice(verts: &[Point]) -> GeomResult<Self> {
        Self::new(verts.to_vec())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.verts
    }

    /// Vertex at a cyclic index.
    #[inline]
    pub fn vertex(&self, i: usize) -> Point {
        self.verts[i % self.verts.len()]
    }

    /// Edge `i`: `(v[i], v[i + 1 mod n])`.
    #[inline]
    pub fn edge(&self, i: usize) -> (Point, Point) {
        (self.vertex(i), self.vertex(i + 1))
    }

    /// All edges in boundary order.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        (0..self.len()).map(move |i| self.edge(i))
    }

    /// Consecutive triples `(v[i], v[i+1], v[i+2])` walking the whole cycle.
    pub fn triples(&self) -> impl Iterator<Item = (usize, Point, Point, Point)> + '_ {
        (0..self.len()).map(move |i| (i, self.vertex(i), self.vertex(i + 1), self.vertex(i + 2)))
    }

    /// Same polygon with the start index shifted by `k`.
    pub fn rotated(&self, k: usize) -> Self {
        let n = self.verts.len();
        let mut verts = self.verts.clone();
        verts.rotate_left(k % n);
        Self { verts }
    }

    /// Edges `i` and `j` share an endpoint (including the wrap-around pair).
    #[inline]
    pub(crate) fn edges_adjacent(&self, i: usize, j: usize) -> bool {
        let n = self.len();
        let (i, j) = (i % n, j % n);
        i == j || (i + 1) % n == j || (j + 1) % n == i
    }
}
