//! Type-converting copies.

use super::Map2D;
use std::hash::{BuildHasher, Hash};

impl<R, C, V, S> Map2D<R, C, V, S>
where
    S: BuildHasher + Clone,
{
    /// Builds a new map by converting every cell's row, column and value.
    ///
    /// Each converter runs exactly once per cell, in unspecified order. The
    /// result uses a clone of this map's hasher.
    ///
    /// When the converters send several cells to the same `(row, column)`
    /// pair, the last one visited wins. Visiting order is unspecified, so
    /// which value survives is unspecified too; the number of overwritten
    /// cells is logged at `debug` level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map2d::core::map2d::Map2D;
    ///
    /// let mut map = Map2D::new();
    /// map.put(1_u32, 'a', 1.5_f64);
    /// map.put(2_u32, 'b', 2.5_f64);
    ///
    /// let converted: Map2D<String, u32, i64> = map.copy_with_conversion(
    ///     |row| format!("r{row}"),
    ///     |column| u32::from(*column),
    ///     |value| value.round() as i64,
    /// );
    ///
    /// assert_eq!(converted.len(), 2);
    /// assert_eq!(converted.get("r1", &97), Some(&2));
    /// assert_eq!(converted.get("r2", &98), Some(&3));
    /// ```
    pub fn copy_with_conversion<R2, C2, V2, FR, FC, FV>(
        &self,
        mut row_fn: FR,
        mut column_fn: FC,
        mut value_fn: FV,
    ) -> Map2D<R2, C2, V2, S>
    where
        R2: Eq + Hash,
        C2: Eq + Hash,
        FR: FnMut(&R) -> R2,
        FC: FnMut(&C) -> C2,
        FV: FnMut(&V) -> V2,
    {
        let mut converted =
            Map2D::with_capacity_and_hasher(self.rows.len(), self.rows.hasher().clone());
        let mut overwritten = 0_usize;
        for (row, column, value) in self {
            if converted
                .put(row_fn(row), column_fn(column), value_fn(value))
                .is_some()
            {
                overwritten += 1;
            }
        }
        if overwritten > 0 {
            tracing::debug!(
                overwritten,
                cells = converted.len(),
                "map2d: conversion mapped several cells to the same key pair"
            );
        }
        converted
    }
}
