//! Polygon container and convex decomposition algorithms.
//!
//! The [`Polygon`] type stores vertices with cyclic addressing. On top of
//! it sit two decomposition strategies plus the cleanup passes that make
//! noisy input safe to decompose:
//!
//! - [`quick_decompose`]: recursive splitting at reflex vertices, fast and
//!   approximate.
//! - [`optimal_decompose`]: exhaustive minimal-cut search, exact and
//!   exponential.
//! - [`remove_duplicate_points`], [`remove_collinear_points`],
//!   [`is_simple`]: input normalization and validity.

mod cleanup;
mod core;
mod optimal;
mod quick;
mod visibility;

pub use cleanup::{is_simple, remove_collinear_points, remove_duplicate_points};
pub use core::Polygon;
pub use optimal::{cut_edges, optimal_decompose, slice, CutEdge};
pub use quick::{quick_decompose, DecompStatus, QuickDecompOptions, QuickDecomposition};
pub use visibility::{can_see_fast, can_see_robust};
