//! Vertex-to-vertex visibility tests.
//!
//! Both functions answer the same question: can vertex `a` see vertex `b`,
//! i.e. does the diagonal between them stay inside the polygon without
//! crossing any edge? They trade differently:
//!
//! - [`can_see_fast`] rejects early with a cone test and uses infinite-line
//!   intersections, so it is cheap but less trustworthy near parallel or
//!   otherwise degenerate configurations.
//! - [`can_see_robust`] tests every non-incident edge for a proper
//!   finite-segment crossing, which is the safer answer when one is picking
//!   a candidate among many.
//!
//! The two agree on well-formed convex or near-convex regions; divergence
//! on degenerate input is expected and tolerated.

use super::core::Polygon;
use crate::predicates::{is_left_on, is_right_on, line_intersection, segments_intersect};
use num_traits::Float;

/// Checks visibility between vertices `a` and `b` via cone rejection and
/// ray casting. O(n).
pub fn can_see_fast<F: Float>(polygon: &Polygon<F>, a: usize, b: usize) -> bool {
    let n = polygon.len();
    let ai = a as isize;
    let bi = b as isize;

    // b in the excluded half-plane region between a's incident edges
    if is_left_on(polygon.at(ai + 1), polygon.at(ai), polygon.at(bi))
        && is_right_on(polygon.at(ai - 1), polygon.at(ai), polygon.at(bi))
    {
        return false;
    }

    let dist = polygon.at(ai).distance_squared(polygon.at(bi));
    for i in 0..n {
        if (i + 1) % n == a || i == a {
            continue; // ignore incident edges
        }

        let ii = i as isize;
        let crosses = is_left_on(polygon.at(ai), polygon.at(bi), polygon.at(ii + 1))
            && is_right_on(polygon.at(ai), polygon.at(bi), polygon.at(ii));
        if crosses {
            let p = line_intersection(
                (polygon.at(ai), polygon.at(bi)),
                (polygon.at(ii), polygon.at(ii + 1)),
                F::zero(),
            );
            if polygon.at(ai).distance_squared(p) < dist {
                return false; // edge blocks the sightline before b
            }
        }
    }

    true
}

/// Checks visibility between vertices `a` and `b` by testing every
/// non-incident edge for a proper segment crossing. O(n).
pub fn can_see_robust<F: Float>(polygon: &Polygon<F>, a: usize, b: usize) -> bool {
    let n = polygon.len();

    for i in 0..n {
        if i == a || i == b || (i + 1) % n == a || (i + 1) % n == b {
            continue; // ignore incident edges
        }

        let ii = i as isize;
        if segments_intersect(
            polygon.at(a as isize),
            polygon.at(b as isize),
            polygon.at(ii),
            polygon.at(ii + 1),
        ) {
            return false;
        }
    }

    true
}
