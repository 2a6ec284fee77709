//! Bulk merge operations.
//!
//! All merges overwrite on key collision, exactly as repeated
//! [`Map2D::put`] calls would, and never leave an empty row behind.

use super::Map2D;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

impl<R, C, V, S> Map2D<R, C, V, S>
where
    R: Eq + Hash,
    C: Eq + Hash,
    S: BuildHasher + Clone,
{
    /// Merges every cell of `other` into this map.
    ///
    /// Keys and values are cloned out of `other` and converted with [`Into`],
    /// so a map with narrower key or value types can be merged into a wider
    /// one. The two maps share no storage afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map2d::core::map2d::Map2D;
    ///
    /// let mut narrow: Map2D<u8, u8, i32> = Map2D::new();
    /// narrow.put(1, 1, 10);
    /// narrow.put(1, 2, 20);
    ///
    /// let mut wide: Map2D<u32, u64, i64> = Map2D::new();
    /// wide.put(1, 1, -1);
    /// wide.put(7, 7, 70);
    ///
    /// wide.put_all(&narrow);
    /// assert_eq!(wide.len(), 3);
    /// assert_eq!(wide.get(&1, &1), Some(&10));
    /// assert_eq!(wide.get(&7, &7), Some(&70));
    /// ```
    pub fn put_all<R2, C2, V2, S2>(&mut self, other: &Map2D<R2, C2, V2, S2>) -> &mut Self
    where
        R2: Clone + Into<R>,
        C2: Clone + Into<C>,
        V2: Clone + Into<V>,
    {
        for (row, cells) in &other.rows {
            self.put_all_to_row(
                cells
                    .iter()
                    .map(|(column, value)| (column.clone().into(), value.clone().into())),
                row.clone().into(),
            );
        }
        tracing::debug!(
            source_rows = other.rows.len(),
            rows = self.rows.len(),
            "map2d: merged map"
        );
        self
    }

    /// Puts every `(column, value)` pair of `source` into `row`.
    ///
    /// `source` can be any iterator of pairs: a map, a vector, or an
    /// `Option` standing for a source that may be absent. An empty or absent
    /// source leaves the map untouched and does not create the row.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map2d::core::map2d::Map2D;
    /// use std::collections::HashMap;
    ///
    /// let mut map: Map2D<&str, &str, i32> = Map2D::new();
    /// map.put_all_to_row(HashMap::from([("p", 10), ("q", 20)]), "Z");
    /// assert_eq!(map.row_view(&"Z").len(), 2);
    ///
    /// let absent: Option<HashMap<&str, i32>> = None;
    /// map.put_all_to_row(absent.into_iter().flatten(), "Y")
    ///     .put_all_to_row(None, "X");
    /// assert!(!map.contains_row(&"Y"));
    /// assert!(!map.contains_row(&"X"));
    /// ```
    pub fn put_all_to_row<I>(&mut self, source: I, row: R) -> &mut Self
    where
        I: IntoIterator<Item = (C, V)>,
    {
        let mut source = source.into_iter().peekable();
        if source.peek().is_none() {
            return self;
        }

        let hasher = self.rows.hasher().clone();
        let cells = self.rows.entry(row).or_insert_with(|| {
            tracing::trace!("map2d: creating row");
            HashMap::with_hasher(hasher)
        });
        let mut merged = 0_usize;
        for (column, value) in source {
            cells.insert(column, value);
            merged += 1;
        }
        tracing::debug!(merged, "map2d: merged cells into row");
        self
    }

    /// Puts every `(row, value)` pair of `source` into `column`.
    ///
    /// The column counterpart of [`Map2D::put_all_to_row`]; an absent source
    /// is a no-op.
    pub fn put_all_to_column<I>(&mut self, source: I, column: C) -> &mut Self
    where
        I: IntoIterator<Item = (R, V)>,
        C: Clone,
    {
        let mut merged = 0_usize;
        for (row, value) in source {
            self.put(row, column.clone(), value);
            merged += 1;
        }
        tracing::debug!(merged, "map2d: merged cells into column");
        self
    }
}
