//! Polygon cleanup and validity checks.
//!
//! Input traced from gestures or sampled curves tends to carry duplicate
//! and nearly-collinear points that destabilize decomposition. These
//! functions normalize a polygon in place before it is decomposed.

use super::core::Polygon;
use crate::predicates::{collinear, points_eq, segments_intersect};
use num_traits::Float;

/// Removes collinear points from the polygon in place.
///
/// Walks backward from the last vertex, removing vertex `i` whenever the
/// corner `(i-1, i, i+1)` is collinear under `precision` (interpreted as a
/// threshold turn angle in radians; zero means exact). Never shrinks the
/// polygon below 3 vertices. Returns the number of points removed.
pub fn remove_collinear_points<F: Float>(polygon: &mut Polygon<F>, precision: F) -> usize {
    let mut num = 0;
    let mut i = polygon.len() as isize - 1;

    while polygon.len() > 3 && i >= 0 {
        if collinear(
            polygon.at(i - 1),
            polygon.at(i),
            polygon.at(i + 1),
            precision,
        ) {
            let n = polygon.len() as isize;
            polygon.vertices.remove((i % n) as usize);
            num += 1;
        }
        i -= 1;
    }

    num
}

/// Removes duplicate points from the polygon in place.
///
/// O(n²) backward scan: a vertex is dropped when it equals any earlier
/// vertex within `precision`. Returns the number of points removed.
pub fn remove_duplicate_points<F: Float>(polygon: &mut Polygon<F>, precision: F) -> usize {
    let mut num = 0;
    let mut i = polygon.len();

    while i > 1 {
        i -= 1;
        let pi = polygon.vertices[i];
        for j in (0..i).rev() {
            if points_eq(pi, polygon.vertices[j], precision) {
                polygon.vertices.remove(i);
                num += 1;
                break;
            }
        }
    }

    num
}

/// Checks that no two non-adjacent edges of the polygon cross.
///
/// The wrap-around edge (last vertex back to the first) is checked in a
/// separate pass rather than uniformly with all pairs, so the test is not
/// exhaustive for every exotic self-touching configuration. It matches
/// the behavior downstream consumers already rely on.
pub fn is_simple<F: Float>(polygon: &Polygon<F>) -> bool {
    let path = &polygon.vertices;
    let n = path.len();
    if n < 3 {
        return true;
    }

    for i in 0..n - 1 {
        for j in 0..i.saturating_sub(1) {
            if segments_intersect(path[i], path[i + 1], path[j], path[j + 1]) {
                return false;
            }
        }
    }

    // Wrap edge against all edges not incident to it
    for i in 1..n.saturating_sub(2) {
        if segments_intersect(path[0], path[n - 1], path[i], path[i + 1]) {
            return false;
        }
    }

    true
}
