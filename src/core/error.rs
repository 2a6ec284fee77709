//! Error types raised by [`Map2D`](crate::core::map2d::Map2D).
//!
//! Lookups never fail: a missing row, column or cell is reported as `None` or
//! an empty view. The only conditions are a missing key handed to
//! [`Map2D::try_put`](crate::core::map2d::Map2D::try_put) and an invariant
//! violation found by [`Map2D::is_valid`](crate::core::map2d::Map2D::is_valid).

use thiserror::Error;

/// Errors that can occur when inserting into or validating a `Map2D`.
///
/// # Examples
///
/// ```rust
/// use map2d::core::error::Map2DError;
///
/// let err = Map2DError::MissingRowKey;
/// assert_eq!(err.to_string(), "Row key must be present to identify a cell");
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Map2DError {
    /// No row key was supplied for an insertion.
    #[error("Row key must be present to identify a cell")]
    MissingRowKey,
    /// No column key was supplied for an insertion.
    #[error("Column key must be present to identify a cell")]
    MissingColumnKey,
    /// Rows without any column were found in the container.
    #[error("Found {count} row(s) without columns; empty rows must be pruned")]
    EmptyRow {
        /// Number of empty rows found.
        count: usize,
    },
}
