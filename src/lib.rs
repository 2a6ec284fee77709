//! # map2d
//!
//! A generic two-dimensional associative container: [`Map2D`](core::map2d::Map2D)
//! maps an ordered `(row, column)` pair to a value, like a sparse matrix over
//! arbitrary key and value types, with lookups along either axis.
//!
//! # Features
//!
//! - Independent generic row key, column key and value types
//! - Row and column views, full row-major and column-major extraction
//! - Bulk merges from other maps, rows and columns
//! - Type-converting copies
//! - Pluggable hashing (fast `FxHash` by default)
//!
//! # Basic Usage
//!
//! ```rust
//! use map2d::prelude::*;
//!
//! let mut map: Map2D<&str, &str, i32> = Map2D::new();
//! map.put("A", "x", 1);
//! map.put("A", "y", 2);
//! map.put("B", "x", 3);
//!
//! assert_eq!(map.len(), 3);
//! assert_eq!(map.row_view(&"A").len(), 2);
//! assert_eq!(map.column_view(&"x").len(), 2);
//!
//! // Removing the last column of a row removes the row
//! map.remove(&"A", &"y");
//! map.remove(&"A", &"x");
//! assert!(!map.contains_row(&"A"));
//! ```
//!
//! # Container Invariants
//!
//! - **No empty rows** – a row key is present only while it holds at least one
//!   column; removals prune emptied rows and bulk insertions of empty sources
//!   create nothing. Checked by [`Map2D::is_valid`](core::map2d::Map2D::is_valid).
//! - **Owned views** – [`row_view`](core::map2d::Map2D::row_view),
//!   [`column_view`](core::map2d::Map2D::column_view),
//!   [`row_map_view`](core::map2d::Map2D::row_map_view) and
//!   [`column_map_view`](core::map2d::Map2D::column_map_view) return fresh
//!   copies. Mutating a view never changes the map.
//! - **Recomputed size** – [`len`](core::map2d::Map2D::len) sums the rows on
//!   every call; it is O(rows), not cached.
//!
//! ## Cost model
//!
//! | Operation | Cost |
//! |---|---|
//! | `put`, `get`, `remove`, `contains_key`, `contains_row` | O(1) average |
//! | `row_view` | O(columns in row) |
//! | `contains_column`, `column_view`, `len` | O(rows) |
//! | `contains_value`, `column_map_view`, `copy_with_conversion` | O(cells) |
//!
//! ## Error handling
//!
//! Absent rows, columns and cells are not errors; they come back as `None` or
//! an empty view. [`Map2DError`](core::error::Map2DError) covers the two
//! conditions that are: a missing key passed to
//! [`try_put`](core::map2d::Map2D::try_put), and a broken invariant found by
//! `is_valid`.
//!
//! ```rust
//! use map2d::prelude::*;
//!
//! let mut map: Map2D<String, String, u8> = Map2D::new();
//! let row_from_input: Option<String> = None;
//!
//! let result = map.try_put(row_from_input, Some("col".to_string()), 1);
//! assert!(matches!(result, Err(Map2DError::MissingRowKey)));
//! assert!(map.is_empty());
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events (row creation
//! and pruning at `trace`, bulk merge summaries and conversion collisions at
//! `debug`, invariant violations at `warn`) and never installs a subscriber.
//!
//! ## Thread safety
//!
//! `Map2D` carries no locks. It is `Send + Sync` when its type parameters are;
//! shared mutation needs an external lock.

// Forbid unsafe code throughout the entire crate
#![forbid(unsafe_code)]

/// The `core` module contains the [`Map2D`](core::map2d::Map2D) container, its
/// collection types and its error type.
pub mod core {
    /// Hash map and set aliases plus the owned view types
    pub mod collections;
    pub mod error;
    pub mod map2d;

    // Re-export the `core` modules.
    pub use error::*;
    pub use map2d::*;
    // Note: collections module not re-exported here to avoid namespace pollution
}

/// A prelude module that re-exports commonly used types.
pub mod prelude {
    pub use crate::core::{error::Map2DError, map2d::Map2D};

    pub use crate::core::collections::{ColumnMapView, ColumnView, FastHashMap, RowMapView, RowView};
}

/// The function `is_normal` checks that structs implement `auto` traits.
/// Traits are checked at compile time, so this function is only used for
/// testing.
#[must_use]
pub const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
    true
}

// =============================================================================
// TESTS
// =============================================================================
