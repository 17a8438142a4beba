//! Core polygon type with cyclic addressing.

use crate::predicates::{is_left, is_right};
use crate::primitives::Point2;
use num_traits::Float;

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the
/// first). Vertex indexing is cyclic: negative and out-of-range indices
/// wrap, so `at(-1)` is the last vertex and `at(len)` is the first.
///
/// All decomposition algorithms in this crate assume counter-clockwise
/// winding; call [`Polygon::make_ccw`] on untrusted input first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon in CCW order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the vertex at cyclic position `i`.
    ///
    /// Out-of-range indices wrap in both directions, so `at(-1)` is the
    /// last vertex and `at(len as isize)` is the first.
    #[inline]
    pub fn at(&self, i: isize) -> Point2<F> {
        let n = self.vertices.len() as isize;
        debug_assert!(n > 0, "cyclic access on an empty polygon");
        self.vertices[(((i % n) + n) % n) as usize]
    }

    /// Returns a new polygon holding the vertices from `i` to `j`
    /// inclusive, walking forward cyclically (wrapping past the end when
    /// `i > j`).
    pub fn copy_range(&self, i: usize, j: usize) -> Self {
        let n = self.vertices.len();
        let mut out = Vec::new();

        if i <= j {
            out.extend_from_slice(&self.vertices[i..=j]);
        } else {
            out.extend_from_slice(&self.vertices[i..n]);
            out.extend_from_slice(&self.vertices[..=j]);
        }

        Self::new(out)
    }

    /// Appends vertices `src[from..to)` onto this polygon.
    ///
    /// Linear and non-wrapping; `to` is exclusive.
    pub fn append_range(&mut self, src: &Self, from: usize, to: usize) {
        self.vertices.extend_from_slice(&src.vertices[from..to]);
    }

    /// Reverses the vertex order in place, flipping the winding.
    #[inline]
    pub fn reverse(&mut self) {
        self.vertices.reverse();
    }

    /// Checks if the vertex at cyclic position `i` is reflex, i.e. its
    /// interior angle exceeds 180 degrees under CCW winding.
    #[inline]
    pub fn is_reflex(&self, i: isize) -> bool {
        is_right(self.at(i - 1), self.at(i), self.at(i + 1))
    }

    /// Ensures counter-clockwise winding, reversing the polygon if needed.
    ///
    /// Returns true if the polygon was reversed. The orientation test is
    /// anchored at the vertex with minimum y (ties broken by maximum x),
    /// which is always on the convex hull, so the test is reliable no
    /// matter how reflex the rest of the polygon is.
    pub fn make_ccw(&mut self) -> bool {
        let v = &self.vertices;
        if v.len() < 3 {
            return false;
        }

        let mut br = 0;
        for i in 1..v.len() {
            if v[i].y < v[br].y || (v[i].y == v[br].y && v[i].x > v[br].x) {
                br = i;
            }
        }

        let br = br as isize;
        if !is_left(self.at(br - 1), self.at(br), self.at(br + 1)) {
            self.reverse();
            true
        } else {
            false
        }
    }

    /// Returns the signed area via the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        let v = &self.vertices;
        if v.len() < 3 {
            return F::zero();
        }

        let mut area = F::zero();
        let n = v.len();
        for i in 0..n {
            let j = (i + 1) % n;
            area = area + v[i].x * v[j].y - v[j].x * v[i].y;
        }

        area / F::from(2.0).unwrap()
    }

    /// Returns the absolute area.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Checks that no vertex is reflex.
    ///
    /// Assumes CCW winding; degenerate polygons (fewer than 3 vertices)
    /// count as convex.
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return true;
        }
        (0..n as isize).all(|i| !self.is_reflex(i))
    }
}
