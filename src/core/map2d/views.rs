//! Axis views and map extraction.
//!
//! Every method here copies keys and values out of the container; nothing
//! returned aliases the container's storage.

use super::Map2D;
use crate::core::collections::{ColumnMapView, ColumnView, RowMapView, RowView};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

impl<R, C, V, S> Map2D<R, C, V, S>
where
    R: Eq + Hash + Clone,
    C: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    /// Returns a copy of one row as column → value.
    ///
    /// An absent row yields an empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map2d::core::map2d::Map2D;
    ///
    /// let mut map = Map2D::new();
    /// map.put("A", "x", 1);
    /// map.put("A", "y", 2);
    ///
    /// let mut row = map.row_view(&"A");
    /// row.insert("z", 3);
    ///
    /// assert_eq!(row.len(), 3);
    /// assert!(!map.contains_key(&"A", &"z"));
    /// assert!(map.row_view(&"missing").is_empty());
    /// ```
    #[must_use]
    pub fn row_view<QR>(&self, row: &QR) -> RowView<C, V, S>
    where
        R: Borrow<QR>,
        QR: Hash + Eq + ?Sized,
    {
        self.rows
            .get(row)
            .cloned()
            .unwrap_or_else(|| HashMap::with_hasher(self.rows.hasher().clone()))
    }

    /// Returns a copy of one column as row → value, scanning every row.
    ///
    /// Every row holding the column is included, even when its stored value
    /// is a `None`-like value; only rows without the column are left out.
    #[must_use]
    pub fn column_view<QC>(&self, column: &QC) -> ColumnView<R, V, S>
    where
        C: Borrow<QC>,
        QC: Hash + Eq + ?Sized,
    {
        let mut view = HashMap::with_hasher(self.rows.hasher().clone());
        self.fill_map_from_column(&mut view, column);
        view
    }

    /// Returns a deep copy of the row-major storage: row → (column → value).
    #[must_use]
    pub fn row_map_view(&self) -> RowMapView<R, C, V, S> {
        self.rows.clone()
    }

    /// Returns the transposed deep copy: column → (row → value).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map2d::core::map2d::Map2D;
    ///
    /// let mut map = Map2D::new();
    /// map.put("A", "x", 1);
    /// map.put("B", "x", 3);
    /// map.put("B", "y", 4);
    ///
    /// let columns = map.column_map_view();
    /// assert_eq!(columns.len(), 2);
    /// assert_eq!(columns[&"x"].len(), 2);
    /// assert_eq!(columns[&"y"][&"B"], 4);
    /// ```
    #[must_use]
    pub fn column_map_view(&self) -> ColumnMapView<R, C, V, S> {
        let hasher = self.rows.hasher().clone();
        let mut view: ColumnMapView<R, C, V, S> = HashMap::with_hasher(hasher.clone());
        for (row, column, value) in self {
            view.entry(column.clone())
                .or_insert_with(|| HashMap::with_hasher(hasher.clone()))
                .insert(row.clone(), value.clone());
        }
        view
    }

    /// Copies every `(column, value)` of `row` into `target`.
    ///
    /// Entries already in `target` are kept unless a key collides, in which
    /// case map targets take the row's value. Nothing happens if the row is
    /// absent. Returns `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map2d::core::map2d::Map2D;
    /// use std::collections::BTreeMap;
    ///
    /// let mut map = Map2D::new();
    /// map.put("A", "x", 1);
    /// map.put("B", "y", 2);
    ///
    /// let mut target = BTreeMap::from([("x", 0), ("w", 9)]);
    /// map.fill_map_from_row(&mut target, &"A")
    ///     .fill_map_from_row(&mut target, &"B");
    ///
    /// assert_eq!(target, BTreeMap::from([("w", 9), ("x", 1), ("y", 2)]));
    /// ```
    pub fn fill_map_from_row<M, QR>(&self, target: &mut M, row: &QR) -> &Self
    where
        M: Extend<(C, V)>,
        R: Borrow<QR>,
        QR: Hash + Eq + ?Sized,
    {
        if let Some(cells) = self.rows.get(row) {
            target.extend(
                cells
                    .iter()
                    .map(|(column, value)| (column.clone(), value.clone())),
            );
        }
        self
    }

    /// Copies every `(row, value)` holding `column` into `target`.
    ///
    /// Same merge rules as [`Map2D::fill_map_from_row`]. Returns `self` for
    /// chaining.
    pub fn fill_map_from_column<M, QC>(&self, target: &mut M, column: &QC) -> &Self
    where
        M: Extend<(R, V)>,
        C: Borrow<QC>,
        QC: Hash + Eq + ?Sized,
    {
        target.extend(self.rows.iter().filter_map(|(row, cells)| {
            cells
                .get(column)
                .map(|value| (row.clone(), value.clone()))
        }));
        self
    }
}
