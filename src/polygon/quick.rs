//! Quick (approximate) convex decomposition.
//!
//! Recursive divide-and-conquer: find the first reflex vertex, cast rays
//! along its two incident edges to find where they exit the polygon, split
//! along the best diagonal in that window (or at a synthesized Steiner
//! point when no vertex lies in it), then recurse into both halves. The
//! recursion terminates when a piece has no reflex vertex left.
//!
//! The result may use more pieces than the minimum; see
//! [`optimal_decompose`](super::optimal_decompose) when piece count
//! matters more than runtime.
//!
//! # Example
//!
//! ```
//! use decomp2d::{Point2, Polygon, quick_decompose, QuickDecompOptions};
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
//! let outcome = quick_decompose(&l_shape, &QuickDecompOptions::default());
//! assert!(outcome.status.is_complete());
//! assert_eq!(outcome.polygons.len(), 2);
//! ```

use super::core::Polygon;
use super::visibility::can_see_robust;
use crate::predicates::{is_left, is_left_on, is_right, is_right_on, line_intersection};
use crate::primitives::Point2;
use num_traits::Float;

/// Configuration for [`quick_decompose`].
#[derive(Debug, Clone, Copy)]
pub struct QuickDecompOptions<F> {
    /// Tolerance for the near-parallel determinant test when intersecting
    /// the split rays with polygon edges. Zero means exact.
    pub precision: F,
    /// Maximum recursion depth. A branch that reaches the ceiling stops
    /// and marks the outcome [`DecompStatus::DepthExceeded`].
    pub max_depth: usize,
}

impl<F: Float> Default for QuickDecompOptions<F> {
    fn default() -> Self {
        Self {
            precision: F::zero(),
            max_depth: 100,
        }
    }
}

/// How a quick decomposition terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompStatus {
    /// Every branch ran to completion; the pieces cover the input.
    Complete,
    /// A branch hit the recursion depth ceiling and returned early. The
    /// pieces gathered so far are valid but may not cover the input.
    DepthExceeded,
    /// A branch found no valid vertex to split at (numerically degenerate
    /// input) and returned early with a partial cover.
    Degenerate,
}

impl DecompStatus {
    /// True if the decomposition covered the whole input.
    #[inline]
    pub fn is_complete(self) -> bool {
        self == DecompStatus::Complete
    }
}

/// Outcome of [`quick_decompose`]: the convex pieces plus diagnostics.
#[derive(Debug, Clone)]
pub struct QuickDecomposition<F> {
    /// The convex pieces, in the order the recursion emitted them.
    pub polygons: Vec<Polygon<F>>,
    /// Every reflex vertex encountered, across all recursion branches.
    pub reflex_vertices: Vec<Point2<F>>,
    /// Steiner points synthesized where a split found no connecting vertex.
    pub steiner_points: Vec<Point2<F>>,
    /// Whether the decomposition is complete or a partial result.
    pub status: DecompStatus,
}

/// Per-call state threaded through the recursion.
///
/// Owning the accumulators here keeps concurrent top-level calls
/// independent; nothing is shared across calls.
struct DecompContext<F> {
    precision: F,
    max_depth: usize,
    polygons: Vec<Polygon<F>>,
    reflex_vertices: Vec<Point2<F>>,
    steiner_points: Vec<Point2<F>>,
    status: DecompStatus,
}

impl<F: Float> DecompContext<F> {
    /// Records an anomaly. The first one wins; a later branch cannot
    /// upgrade the outcome back to complete.
    fn flag(&mut self, status: DecompStatus) {
        if self.status == DecompStatus::Complete {
            self.status = status;
        }
    }
}

/// Decomposes a simple CCW polygon into convex pieces.
///
/// Returns the pieces together with the reflex vertices and Steiner points
/// encountered, and a [`DecompStatus`] telling whether the result is a
/// complete cover of the input. Callers decide whether a partial status is
/// an error, a warning, or an acceptable approximation.
///
/// Inputs with fewer than 3 vertices yield an empty, complete result.
pub fn quick_decompose<F: Float>(
    polygon: &Polygon<F>,
    options: &QuickDecompOptions<F>,
) -> QuickDecomposition<F> {
    let mut ctx = DecompContext {
        precision: options.precision,
        max_depth: options.max_depth,
        polygons: Vec::new(),
        reflex_vertices: Vec::new(),
        steiner_points: Vec::new(),
        status: DecompStatus::Complete,
    };

    decompose_recursive(polygon, &mut ctx, 0);

    QuickDecomposition {
        polygons: ctx.polygons,
        reflex_vertices: ctx.reflex_vertices,
        steiner_points: ctx.steiner_points,
        status: ctx.status,
    }
}

fn decompose_recursive<F: Float>(poly: &Polygon<F>, ctx: &mut DecompContext<F>, depth: usize) {
    let n = poly.len();
    if n < 3 {
        return;
    }

    if depth >= ctx.max_depth {
        ctx.flag(DecompStatus::DepthExceeded);
        return;
    }

    for i in 0..n {
        let ii = i as isize;
        if !poly.is_reflex(ii) {
            continue;
        }
        ctx.reflex_vertices.push(poly.vertices[i]);

        // Cast rays through i along both incident edges and keep the
        // nearest interior crossing on each side.
        let mut lower_dist = F::infinity();
        let mut upper_dist = F::infinity();
        let mut lower_int = Point2::origin();
        let mut upper_int = Point2::origin();
        let mut lower_index = 0;
        let mut upper_index = 0;

        for j in 0..n {
            let jj = j as isize;

            // ray along (i-1) -> i against edge (j-1, j)
            if is_left(poly.at(ii - 1), poly.at(ii), poly.at(jj))
                && is_right_on(poly.at(ii - 1), poly.at(ii), poly.at(jj - 1))
            {
                let p = line_intersection(
                    (poly.at(ii - 1), poly.at(ii)),
                    (poly.at(jj), poly.at(jj - 1)),
                    ctx.precision,
                );
                if is_right(poly.at(ii + 1), poly.at(ii), p) {
                    // crossing is inside the polygon
                    let d = poly.vertices[i].distance_squared(p);
                    if d < lower_dist {
                        lower_dist = d;
                        lower_int = p;
                        lower_index = j;
                    }
                }
            }

            // ray along (i+1) -> i against edge (j, j+1)
            if is_left(poly.at(ii + 1), poly.at(ii), poly.at(jj + 1))
                && is_right_on(poly.at(ii + 1), poly.at(ii), poly.at(jj))
            {
                let p = line_intersection(
                    (poly.at(ii + 1), poly.at(ii)),
                    (poly.at(jj), poly.at(jj + 1)),
                    ctx.precision,
                );
                if is_left(poly.at(ii - 1), poly.at(ii), p) {
                    let d = poly.vertices[i].distance_squared(p);
                    if d < upper_dist {
                        upper_dist = d;
                        upper_int = p;
                        upper_index = j;
                    }
                }
            }
        }

        let mut lower_poly = Polygon::empty();
        let mut upper_poly = Polygon::empty();

        if lower_index == (upper_index + 1) % n {
            // Both rays exit through the same edge: no existing vertex can
            // close the cut, so synthesize a Steiner point between the two
            // crossings and split there.
            let p = lower_int.midpoint(upper_int);
            ctx.steiner_points.push(p);

            if i < upper_index {
                lower_poly.append_range(poly, i, upper_index + 1);
                lower_poly.vertices.push(p);
                upper_poly.vertices.push(p);
                if lower_index != 0 {
                    upper_poly.append_range(poly, lower_index, n);
                }
                upper_poly.append_range(poly, 0, i + 1);
            } else {
                if i != 0 {
                    lower_poly.append_range(poly, i, n);
                }
                lower_poly.append_range(poly, 0, upper_index + 1);
                lower_poly.vertices.push(p);
                upper_poly.vertices.push(p);
                upper_poly.append_range(poly, lower_index, i + 1);
            }
        } else {
            // Connect i to the nearest robustly-visible vertex inside the
            // window [lower_index, upper_index].
            let mut upper_index = upper_index;
            if lower_index > upper_index {
                upper_index += n;
            }

            let mut closest_dist = F::infinity();
            let mut closest_index = None;
            for j in lower_index..=upper_index {
                let jj = j as isize;
                let in_cone = is_left_on(poly.at(ii - 1), poly.at(ii), poly.at(jj))
                    && is_right_on(poly.at(ii + 1), poly.at(ii), poly.at(jj));
                if in_cone {
                    let d = poly.at(ii).distance_squared(poly.at(jj));
                    if d < closest_dist && can_see_robust(poly, i, j % n) {
                        closest_dist = d;
                        closest_index = Some(j % n);
                    }
                }
            }

            let closest_index = match closest_index {
                Some(j) => j,
                None => {
                    // Numerically degenerate: no candidate in the window.
                    ctx.flag(DecompStatus::Degenerate);
                    return;
                }
            };

            if i < closest_index {
                lower_poly.append_range(poly, i, closest_index + 1);
                if closest_index != 0 {
                    upper_poly.append_range(poly, closest_index, n);
                }
                upper_poly.append_range(poly, 0, i + 1);
            } else {
                if i != 0 {
                    lower_poly.append_range(poly, i, n);
                }
                lower_poly.append_range(poly, 0, closest_index + 1);
                upper_poly.append_range(poly, closest_index, i + 1);
            }
        }

        // Recurse into the smaller half first to keep the tree balanced.
        if lower_poly.len() < upper_poly.len() {
            decompose_recursive(&lower_poly, ctx, depth + 1);
            decompose_recursive(&upper_poly, ctx, depth + 1);
        } else {
            decompose_recursive(&upper_poly, ctx, depth + 1);
            decompose_recursive(&lower_poly, ctx, depth + 1);
        }
        return;
    }

    // No reflex vertex: the polygon is convex, emit it whole.
    ctx.polygons.push(poly.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn total_area(polygons: &[Polygon<f64>]) -> f64 {
        polygons.iter().map(|p| p.area()).sum()
    }

    fn assert_all_convex_ccw(polygons: &[Polygon<f64>]) {
        for poly in polygons {
            assert!(poly.signed_area() > 0.0, "piece is not CCW: {:?}", poly);
            assert!(poly.is_convex(), "piece is not convex: {:?}", poly);
        }
    }

    fn notched_square() -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 4.0),
        ])
    }

    fn l_shape() -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ])
    }

    #[test]
    fn test_convex_input_is_returned_whole() {
        let square = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]);

        let out = quick_decompose(&square, &QuickDecompOptions::default());
        assert!(out.status.is_complete());
        assert_eq!(out.polygons.len(), 1);
        assert_eq!(out.polygons[0].vertices, square.vertices);
        assert!(out.reflex_vertices.is_empty());
        assert!(out.steiner_points.is_empty());
    }

    #[test]
    fn test_degenerate_input_yields_nothing() {
        let line: Polygon<f64> =
            Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        let out = quick_decompose(&line, &QuickDecompOptions::default());
        assert!(out.status.is_complete());
        assert!(out.polygons.is_empty());
    }

    #[test]
    fn test_notched_square() {
        let notched = notched_square();
        let out = quick_decompose(&notched, &QuickDecompOptions::default());

        assert!(out.status.is_complete());
        assert_eq!(out.polygons.len(), 2);
        assert_all_convex_ccw(&out.polygons);
        assert_relative_eq!(total_area(&out.polygons), notched.area(), epsilon = 1e-9);

        // The one reflex vertex is the notch tip
        assert_eq!(out.reflex_vertices, vec![Point2::new(2.0, 2.0)]);
    }

    #[test]
    fn test_l_shape() {
        let l = l_shape();
        let out = quick_decompose(&l, &QuickDecompOptions::default());

        assert!(out.status.is_complete());
        assert_all_convex_ccw(&out.polygons);
        assert_relative_eq!(total_area(&out.polygons), l.area(), epsilon = 1e-9);
    }

    #[test]
    fn test_star_shape() {
        let star = Polygon::new(vec![
            Point2::new(0.5_f64, 1.0),
            Point2::new(0.4, 0.6),
            Point2::new(0.0, 0.5),
            Point2::new(0.3, 0.3),
            Point2::new(0.2, 0.0),
            Point2::new(0.5, 0.2),
            Point2::new(0.8, 0.0),
            Point2::new(0.7, 0.3),
            Point2::new(1.0, 0.5),
            Point2::new(0.6, 0.6),
        ]);

        let out = quick_decompose(&star, &QuickDecompOptions::default());
        assert!(out.status.is_complete());
        assert!(out.polygons.len() > 1);
        assert_all_convex_ccw(&out.polygons);
        assert_relative_eq!(total_area(&out.polygons), star.area(), epsilon = 1e-9);
    }

    #[test]
    fn test_steiner_point_split() {
        // An inward spike whose split rays both exit through the bottom
        // edge, forcing a Steiner point at (5, 0).
        let spiked = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(5.0, 4.0),
            Point2::new(0.0, 10.0),
        ]);

        let out = quick_decompose(&spiked, &QuickDecompOptions::default());
        assert!(out.status.is_complete());
        assert_eq!(out.polygons.len(), 2);
        assert_all_convex_ccw(&out.polygons);
        assert_relative_eq!(total_area(&out.polygons), spiked.area(), epsilon = 1e-9);

        assert_eq!(out.steiner_points.len(), 1);
        assert_relative_eq!(out.steiner_points[0].x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(out.steiner_points[0].y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_depth_ceiling_is_reported() {
        let notched = notched_square();
        let opts = QuickDecompOptions {
            precision: 0.0,
            max_depth: 1,
        };

        let out = quick_decompose(&notched, &opts);
        assert_eq!(out.status, DecompStatus::DepthExceeded);
        // Both halves were cut off before emitting anything
        assert!(out.polygons.is_empty());
    }

    #[test]
    fn test_zero_depth_ceiling() {
        let notched = notched_square();
        let opts = QuickDecompOptions {
            precision: 0.0,
            max_depth: 0,
        };

        let out = quick_decompose(&notched, &opts);
        assert_eq!(out.status, DecompStatus::DepthExceeded);
        assert!(out.polygons.is_empty());
        assert!(out.reflex_vertices.is_empty());
    }

    #[test]
    fn test_comb_polygon() {
        // A comb with three teeth: several reflex vertices, deeper recursion
        let comb = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(12.0, 0.0),
            Point2::new(12.0, 4.0),
            Point2::new(10.0, 4.0),
            Point2::new(10.0, 1.0),
            Point2::new(8.0, 1.0),
            Point2::new(8.0, 4.0),
            Point2::new(6.0, 4.0),
            Point2::new(6.0, 1.0),
            Point2::new(4.0, 1.0),
            Point2::new(4.0, 4.0),
            Point2::new(2.0, 4.0),
            Point2::new(2.0, 1.0),
            Point2::new(0.0, 1.0),
        ]);

        let out = quick_decompose(&comb, &QuickDecompOptions::default());
        assert!(out.status.is_complete());
        assert_all_convex_ccw(&out.polygons);
        assert_relative_eq!(total_area(&out.polygons), comb.area(), epsilon = 1e-9);
        assert!(out.reflex_vertices.len() >= 4);
    }

    fn many_tooth_comb(teeth: usize) -> Polygon<f64> {
        let width = (teeth * 4) as f64;
        let mut vertices = vec![
            Point2::new(0.0, 0.0),
            Point2::new(width, 0.0),
            Point2::new(width, 4.0),
        ];
        for t in (0..teeth).rev() {
            let x = (t * 4) as f64;
            vertices.push(Point2::new(x + 2.0, 4.0));
            vertices.push(Point2::new(x + 2.0, 1.0));
            vertices.push(Point2::new(x, 1.0));
            if t > 0 {
                vertices.push(Point2::new(x, 4.0));
            }
        }
        Polygon::new(vertices)
    }

    #[test]
    fn test_deep_comb_truncates_at_default_ceiling() {
        // 64 teeth mean well over 100 splits; the default ceiling cuts the
        // run short and the partial cover falls visibly short on area.
        let comb = many_tooth_comb(64);
        let out = quick_decompose(&comb, &QuickDecompOptions::default());
        assert_eq!(out.status, DecompStatus::DepthExceeded);
        assert!(total_area(&out.polygons) < comb.area());
    }

    #[test]
    fn test_deep_comb_completes_with_raised_ceiling() {
        // Every split sheds at least one vertex, so the vertex count is
        // always a sufficient ceiling.
        let comb = many_tooth_comb(64);
        let opts = QuickDecompOptions {
            precision: 0.0,
            max_depth: comb.len(),
        };

        let out = quick_decompose(&comb, &opts);
        assert!(out.status.is_complete());
        assert_all_convex_ccw(&out.polygons);
        assert_relative_eq!(total_area(&out.polygons), comb.area(), epsilon = 1e-9);
    }

    #[test]
    fn test_pieces_own_their_storage() {
        let l = l_shape();
        let out = quick_decompose(&l, &QuickDecompOptions::default());
        drop(l);
        // Pieces remain usable after the input is gone
        assert!(total_area(&out.polygons) > 0.0);
    }

    #[test]
    fn test_f32_support() {
        let l: Polygon<f32> = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ]);

        let out = quick_decompose(&l, &QuickDecompOptions::default());
        assert!(out.status.is_complete());
        for poly in &out.polygons {
            assert!(poly.is_convex());
        }
    }
}
