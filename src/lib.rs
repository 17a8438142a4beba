//! decomp2d - Convex decomposition of simple 2D polygons
//!
//! Splits an arbitrary simple polygon into convex sub-polygons whose union
//! reconstructs the input region. Physics engines, navigation-mesh builders
//! and collision pipelines all want convex pieces; this crate produces them.
//!
//! Two algorithms are provided:
//!
//! - [`quick_decompose`]: fast recursive splitting at reflex vertices.
//!   Approximate (may use more pieces than necessary), handles large inputs.
//! - [`optimal_decompose`]: exhaustive minimal-cut search. Guarantees the
//!   fewest diagonals but cost grows combinatorially; use on small polygons.
//!
//! Input polygons must be simple (non-self-intersecting) and wound
//! counter-clockwise. Use [`Polygon::make_ccw`] and the cleanup functions
//! ([`remove_duplicate_points`], [`remove_collinear_points`]) to normalize
//! noisy input first.
//!
//! # Example
//!
//! ```
//! use decomp2d::{Point2, Polygon, quick_decompose, QuickDecompOptions};
//!
//! // A square with a notch cut into the top edge (reflex at (2,2))
//! let notched = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//!
//! let outcome = quick_decompose(&notched, &QuickDecompOptions::default());
//! assert!(outcome.status.is_complete());
//! for part in &outcome.polygons {
//!     assert!(part.is_convex());
//! }
//! ```

pub mod error;
pub mod polygon;
pub mod predicates;
pub mod primitives;

pub use error::DecompError;
pub use polygon::{
    can_see_fast, can_see_robust, cut_edges, is_simple, optimal_decompose, quick_decompose,
    remove_collinear_points, remove_duplicate_points, slice, CutEdge, DecompStatus, Polygon,
    QuickDecompOptions, QuickDecomposition,
};
pub use predicates::{
    collinear, is_left, is_left_on, is_right, is_right_on, line_intersection, points_eq,
    segments_intersect, triangle_area,
};
pub use primitives::{Point2, Vec2};
