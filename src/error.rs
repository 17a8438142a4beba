//! Error types for decomposition operations.

use thiserror::Error;

/// Errors that can occur during polygon decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecompError {
    /// A cut edge returned by the minimal-cut search could not be located
    /// in any fragment while slicing. Indicates the cut-edge list does not
    /// belong to the polygon being sliced.
    #[error("cut edge not found in any polygon fragment")]
    CutEdgeNotFound,
}
