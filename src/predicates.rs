//! Orientation and intersection predicates with explicit tolerance.
//!
//! All comparisons here are tolerance-aware rather than exact, because the
//! point sequences fed into decomposition often derive from noisy sampled
//! input. A tolerance of zero recovers the exact tests.

use crate::primitives::Point2;
use num_traits::Float;

/// Twice the signed area of the triangle spanned by `a`, `b`, `c`.
///
/// Positive when the points make a counter-clockwise turn, negative when
/// clockwise, zero when collinear.
#[inline]
pub fn triangle_area<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b - a).cross(c - a)
}

/// True if `c` is strictly to the left of the directed line `a` -> `b`.
#[inline]
pub fn is_left<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    triangle_area(a, b, c) > F::zero()
}

/// True if `c` is to the left of, or on, the directed line `a` -> `b`.
#[inline]
pub fn is_left_on<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    triangle_area(a, b, c) >= F::zero()
}

/// True if `c` is strictly to the right of the directed line `a` -> `b`.
#[inline]
pub fn is_right<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    triangle_area(a, b, c) < F::zero()
}

/// True if `c` is to the right of, or on, the directed line `a` -> `b`.
#[inline]
pub fn is_right_on<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    triangle_area(a, b, c) <= F::zero()
}

/// Checks if two scalars are equal within `precision`.
#[inline]
pub(crate) fn scalar_eq<F: Float>(a: F, b: F, precision: F) -> bool {
    (a - b).abs() <= precision
}

/// Checks if two points are equal within `precision`, per coordinate.
#[inline]
pub fn points_eq<F: Float>(a: Point2<F>, b: Point2<F>, precision: F) -> bool {
    scalar_eq(a.x, b.x, precision) && scalar_eq(a.y, b.y, precision)
}

/// Intersection of the two *infinite* lines through `l1` and `l2`.
///
/// Each line is given by two points on it. When the determinant of the
/// 2x2 system is within `precision` of zero the lines are treated as
/// parallel and the origin is returned as a sentinel; callers that need a
/// meaningful point must avoid near-parallel inputs.
pub fn line_intersection<F: Float>(
    l1: (Point2<F>, Point2<F>),
    l2: (Point2<F>, Point2<F>),
    precision: F,
) -> Point2<F> {
    let a1 = l1.1.y - l1.0.y;
    let b1 = l1.0.x - l1.1.x;
    let c1 = a1 * l1.0.x + b1 * l1.0.y;
    let a2 = l2.1.y - l2.0.y;
    let b2 = l2.0.x - l2.1.x;
    let c2 = a2 * l2.0.x + b2 * l2.0.y;
    let det = a1 * b2 - a2 * b1;

    if scalar_eq(det, F::zero(), precision) {
        return Point2::origin();
    }

    Point2::new((b2 * c1 - b1 * c2) / det, (a1 * c2 - a2 * c1) / det)
}

/// Checks if the two *finite* segments `p1`-`p2` and `q1`-`q2` intersect.
///
/// Uses the parametric form; both parameters must land in [0, 1]. Parallel
/// segments (zero denominator) are reported as non-intersecting, even when
/// collinear and overlapping.
pub fn segments_intersect<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    q1: Point2<F>,
    q2: Point2<F>,
) -> bool {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let da = q2.x - q1.x;
    let db = q2.y - q1.y;

    let denom = da * dy - db * dx;
    if denom == F::zero() {
        return false;
    }

    let s = (dx * (q1.y - p1.y) + dy * (p1.x - q1.x)) / denom;
    let t = (da * (p1.y - q1.y) + db * (q1.x - p1.x)) / -denom;

    s >= F::zero() && s <= F::one() && t >= F::zero() && t <= F::one()
}

/// Checks if three points are collinear.
///
/// With `threshold_angle` zero this is the exact zero-area test. With a
/// positive threshold the turn angle between `a` -> `b` and `b` -> `c` is
/// computed and compared against it, so "nearly straight" corners qualify
/// as well. The angle is in radians.
pub fn collinear<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    threshold_angle: F,
) -> bool {
    if threshold_angle == F::zero() {
        return triangle_area(a, b, c) == F::zero();
    }

    let ab = b - a;
    let bc = c - b;
    let angle = (ab.dot(bc) / (ab.magnitude() * bc.magnitude())).acos();
    angle < threshold_angle
}
