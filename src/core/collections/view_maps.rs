use super::FastBuildHasher;
use std::collections::HashMap;

// =============================================================================
// AXIS VIEW TYPES
// =============================================================================

/// Owned snapshot of one row: column key → value.
///
/// Returned by [`Map2D::row_view`](crate::core::map2d::Map2D::row_view) and
/// [`Map2D::remove_row`](crate::core::map2d::Map2D::remove_row). The map is a
/// fresh copy; mutating it never touches the container it came from.
///
/// The hasher parameter follows the container, so the default is
/// [`FastBuildHasher`].
///
/// # Examples
///
/// ```rust
/// use map2d::core::collections::RowView;
///
/// let row: RowView<&str, i32> = RowView::default();
/// assert!(row.is_empty());
/// ```
pub type RowView<C, V, S = FastBuildHasher> = HashMap<C, V, S>;

/// Owned snapshot of one column: row key → value.
///
/// Built by scanning every row, so producing it is O(rows).
///
/// # Examples
///
/// ```rust
/// use map2d::core::collections::ColumnView;
///
/// let column: ColumnView<&str, i32> = ColumnView::default();
/// assert!(column.is_empty());
/// ```
pub type ColumnView<R, V, S = FastBuildHasher> = HashMap<R, V, S>;

/// Deep copy of the whole row-major structure: row → (column → value).
///
/// # Examples
///
/// ```rust
/// use map2d::core::collections::RowMapView;
///
/// let rows: RowMapView<u8, u8, bool> = RowMapView::default();
/// assert!(rows.is_empty());
/// ```
pub type RowMapView<R, C, V, S = FastBuildHasher> = HashMap<R, HashMap<C, V, S>, S>;

/// Transposed deep copy: column → (row → value).
///
/// Built by visiting every cell, so producing it is O(cells).
///
/// # Examples
///
/// ```rust
/// use map2d::core::collections::ColumnMapView;
///
/// let columns: ColumnMapView<u8, u8, bool> = ColumnMapView::default();
/// assert!(columns.is_empty());
/// ```
pub type ColumnMapView<R, C, V, S = FastBuildHasher> = HashMap<C, HashMap<R, V, S>, S>;
