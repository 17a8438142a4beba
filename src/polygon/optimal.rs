//! Optimal (exact) convex decomposition.
//!
//! Exhaustively searches every (reflex vertex, visible vertex) pair and
//! keeps whichever split leads to the globally minimal number of cut
//! diagonals. Cost grows combinatorially with vertex count; intended for
//! small polygons where minimal piece count outweighs runtime.
//!
//! # Example
//!
//! ```
//! use decomp2d::{Point2, Polygon, optimal_decompose};
//!
//! let l_shape = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 1.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(1.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! // One diagonal suffices for an L; two convex pieces result.
//! let pieces = optimal_decompose(&l_shape).unwrap();
//! assert_eq!(pieces.len(), 2);
//! ```

use super::core::Polygon;
use super::visibility::can_see_fast;
use crate::error::DecompError;
use crate::primitives::Point2;
use num_traits::Float;

/// A diagonal of the minimal decomposition, as a pair of vertices.
pub type CutEdge<F> = (Point2<F>, Point2<F>);

/// Finds a minimal set of diagonals whose cuts make every piece convex.
///
/// Returns an empty list when the polygon is already convex. The search
/// recurses over all reflex/visible vertex pairs, so runtime grows
/// combinatorially with vertex count.
pub fn cut_edges<F: Float>(polygon: &Polygon<F>) -> Vec<CutEdge<F>> {
    let n = polygon.len();
    let mut min: Vec<CutEdge<F>> = Vec::new();
    let mut n_diags = usize::MAX;

    for i in 0..n {
        if !polygon.is_reflex(i as isize) {
            continue;
        }
        for j in 0..n {
            if !can_see_fast(polygon, i, j) {
                continue;
            }

            // Splitting at (i, j) strictly shrinks both halves, so the
            // recursion terminates.
            let mut candidate = cut_edges(&polygon.copy_range(i, j));
            candidate.extend(cut_edges(&polygon.copy_range(j, i)));

            if candidate.len() < n_diags {
                n_diags = candidate.len();
                candidate.push((polygon.at(i as isize), polygon.at(j as isize)));
                min = candidate;
            }
        }
    }

    min
}

/// Partitions a polygon along the given cut edges.
///
/// For each edge, the fragment containing both endpoints is located and
/// split in two; the loop continues until every edge is consumed. Cut
/// edges are matched against fragment vertices by exact value, which holds
/// because fragments copy vertices verbatim from the input polygon.
pub fn slice<F: Float>(
    polygon: &Polygon<F>,
    cut_edges: &[CutEdge<F>],
) -> Result<Vec<Polygon<F>>, DecompError> {
    let mut fragments = vec![polygon.clone()];

    for &(a, b) in cut_edges {
        let mut found = None;
        for (idx, fragment) in fragments.iter().enumerate() {
            let i = fragment.vertices.iter().position(|&v| v == a);
            let j = fragment.vertices.iter().position(|&v| v == b);
            if let (Some(i), Some(j)) = (i, j) {
                found = Some((idx, fragment.copy_range(i, j), fragment.copy_range(j, i)));
                break;
            }
        }

        match found {
            Some((idx, first, second)) => {
                fragments.swap_remove(idx);
                fragments.push(first);
                fragments.push(second);
            }
            None => return Err(DecompError::CutEdgeNotFound),
        }
    }

    Ok(fragments)
}

/// Decomposes a simple CCW polygon into the minimal number of convex
/// pieces reachable with vertex-to-vertex diagonals.
///
/// An already-convex polygon comes back unchanged as a single-element
/// list.
pub fn optimal_decompose<F: Float>(polygon: &Polygon<F>) -> Result<Vec<Polygon<F>>, DecompError> {
    let edges = cut_edges(polygon);
    if edges.is_empty() {
        return Ok(vec![polygon.clone()]);
    }
    slice(polygon, &edges)
}
