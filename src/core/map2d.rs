//! The two-dimensional associative container.
//!
//! [`Map2D`] maps an ordered `(row, column)` pair to a value. Storage is
//! row-major: an outer map from row key to an inner map from column key to
//! value. Row-oriented operations are direct hash lookups; column-oriented
//! operations ([`Map2D::contains_column`], [`Map2D::column_view`], ...) scan
//! every row.
//!
//! # Invariants
//!
//! - **No empty rows** – a row key is present only while it holds at least one
//!   column. [`Map2D::remove`] and [`Map2D::remove_column`] prune rows they
//!   empty, and bulk insertions never create a row for an empty source.
//!   [`Map2D::is_valid`] re-checks this.
//! - **Owned views** – every operation returning a map returns a fresh copy;
//!   the container never hands out its inner maps.
//!
//! # Missing values
//!
//! Keys cannot be null in Rust, so a "no value" cell is modelled with
//! `V = Option<T>`. For such maps the plain lookup [`Map2D::get_value`]
//! answers `None` both for a stored `None` and for an absent cell;
//! [`Map2D::contains_key`] and [`Map2D::get_or_default`] tell the two apart.
//!
//! # Thread safety
//!
//! There is no internal synchronization. Mutation takes `&mut self`, so
//! sharing a map between threads requires an external lock such as
//! `std::sync::RwLock`.
//!
//! # Examples
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
//! assert_eq!(map.get(&"A", &"y"), Some(&2));
//! assert_eq!(map.column_view(&"x").len(), 2);
//!
//! assert_eq!(map.remove(&"A", &"y"), Some(2));
//! assert_eq!(map.remove(&"A", &"x"), Some(1));
//! assert!(!map.contains_row(&"A"));
//! ```

mod bulk;
mod conversion;
mod views;

use crate::core::collections::{ColumnView, FastBuildHasher, RowView};
use crate::core::error::Map2DError;
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet, hash_map};
use std::fmt;
use std::hash::{BuildHasher, Hash};

// =============================================================================
// MAP2D STRUCT
// =============================================================================

/// A mapping from `(row, column)` key pairs to values.
///
/// # Type Parameters
///
/// - `R`: row key type
/// - `C`: column key type
/// - `V`: value type; use `Option<T>` for cells that may hold "no value"
/// - `S`: build hasher shared by the row map, every inner column map and every
///   view (defaults to [`FastBuildHasher`])
#[derive(Clone)]
pub struct Map2D<R, C, V, S = FastBuildHasher> {
    /// Row key → (column key → value). No inner map is ever empty.
    rows: HashMap<R, HashMap<C, V, S>, S>,
}

// =============================================================================
// CONSTRUCTION AND SIZE
// =============================================================================

impl<R, C, V> Map2D<R, C, V, FastBuildHasher> {
    /// Creates an empty map using the fast hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map2d::core::map2d::Map2D;
    ///
    /// let map: Map2D<u32, u32, String> = Map2D::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: HashMap::default(),
        }
    }

    /// Creates an empty map with room for at least `rows` row keys.
    ///
    /// Only the outer row map is pre-allocated; inner column maps grow on demand.
    #[must_use]
    pub fn with_capacity(rows: usize) -> Self {
        Self::with_capacity_and_hasher(rows, FastBuildHasher::default())
    }
}

impl<R, C, V, S> Map2D<R, C, V, S> {
    /// Creates an empty map that hashes keys with `hasher`.
    ///
    /// The same hasher is cloned into every row created later and into every
    /// view returned by the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map2d::core::map2d::Map2D;
    /// use std::collections::hash_map::RandomState;
    ///
    /// // DoS-resistant hashing for untrusted keys
    /// let mut map: Map2D<String, String, u8, RandomState> =
    ///     Map2D::with_hasher(RandomState::new());
    /// map.put("row".to_string(), "col".to_string(), 1);
    /// assert_eq!(map.get("row", "col"), Some(&1));
    /// ```
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            rows: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty map with room for `rows` row keys, hashing with `hasher`.
    #[must_use]
    pub fn with_capacity_and_hasher(rows: usize, hasher: S) -> Self {
        Self {
            rows: HashMap::with_capacity_and_hasher(rows, hasher),
        }
    }

    /// Returns a reference to the map's build hasher.
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.rows.hasher()
    }

    /// Returns `true` if the map holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `true` if the map holds at least one cell.
    #[must_use]
    pub fn non_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the number of cells.
    ///
    /// This sums the sizes of all rows on every call, so it is O(rows).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map2d::core::map2d::Map2D;
    ///
    /// let mut map = Map2D::new();
    /// map.put(0, 0, 'a');
    /// map.put(0, 1, 'b');
    /// map.put(1, 0, 'c');
    /// assert_eq!(map.len(), 3);
    /// assert_eq!(map.row_count(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    /// Returns the number of distinct row keys.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Removes every cell.
    pub fn clear(&mut self) {
        tracing::trace!(rows = self.rows.len(), "map2d: clearing all rows");
        self.rows.clear();
    }

    /// Iterates over all cells as `(row, column, value)` in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map2d::core::map2d::Map2D;
    ///
    /// let mut map = Map2D::new();
    /// map.put("A", "x", 1);
    /// map.put("B", "y", 2);
    ///
    /// let total: i32 = map.iter().map(|(_, _, value)| value).sum();
    /// assert_eq!(total, 3);
    /// ```
    pub fn iter(&self) -> Iter<'_, R, C, V, S> {
        Iter {
            rows: self.rows.iter(),
            cells: None,
        }
    }

    /// Iterates over the row keys currently present.
    pub fn rows(&self) -> impl Iterator<Item = &R> + '_ {
        self.rows.keys()
    }
}

// =============================================================================
// CELL OPERATIONS
// =============================================================================

impl<R, C, V, S> Map2D<R, C, V, S>
where
    R: Eq + Hash,
    C: Eq + Hash,
    S: BuildHasher,
{
    /// Stores `value` at `(row, column)`, returning the value it replaced.
    ///
    /// The row's column map is created on first use.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map2d::core::map2d::Map2D;
    ///
    /// let mut map = Map2D::new();
    /// assert_eq!(map.put("A", "x", 1), None);
    /// assert_eq!(map.put("A", "x", 5), Some(1));
    /// assert_eq!(map.get(&"A", &"x"), Some(&5));
    /// ```
    pub fn put(&mut self, row: R, column: C, value: V) -> Option<V>
    where
        S: Clone,
    {
        let hasher = self.rows.hasher().clone();
        let cells = self.rows.entry(row).or_insert_with(|| {
            tracing::trace!("map2d: creating row");
            HashMap::with_hasher(hasher)
        });
        cells.insert(column, value)
    }

    /// Stores `value` at `(row, column)` when both keys are present.
    ///
    /// Intended for callers whose keys come from optional sources. The map is
    /// left untouched when a key is missing.
    ///
    /// # Errors
    ///
    /// Returns [`Map2DError::MissingRowKey`] if `row` is `None`, otherwise
    /// [`Map2DError::MissingColumnKey`] if `column` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map2d::core::error::Map2DError;
    /// use map2d::core::map2d::Map2D;
    ///
    /// let mut map: Map2D<&str, &str, i32> = Map2D::new();
    /// assert_eq!(map.try_put(Some("A"), Some("x"), 1), Ok(None));
    /// assert_eq!(map.try_put(None, Some("x"), 2), Err(Map2DError::MissingRowKey));
    /// assert_eq!(map.try_put(Some("A"), None, 3), Err(Map2DError::MissingColumnKey));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn try_put(
        &mut self,
        row: Option<R>,
        column: Option<C>,
        value: V,
    ) -> Result<Option<V>, Map2DError>
    where
        S: Clone,
    {
        let row = row.ok_or(Map2DError::MissingRowKey)?;
        let column = column.ok_or(Map2DError::MissingColumnKey)?;
        Ok(self.put(row, column, value))
    }

    /// Returns the value at `(row, column)`, or `None` if the cell is absent.
    pub fn get<QR, QC>(&self, row: &QR, column: &QC) -> Option<&V>
    where
        R: Borrow<QR>,
        C: Borrow<QC>,
        QR: Hash + Eq + ?Sized,
        QC: Hash + Eq + ?Sized,
    {
        self.rows.get(row)?.get(column)
    }

    /// Returns the stored value if the cell exists, otherwise `default`.
    ///
    /// Unlike [`Map2D::get_value`], a cell explicitly holding `None` returns
    /// that stored `None` rather than the default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map2d::core::map2d::Map2D;
    ///
    /// let mut map: Map2D<&str, &str, Option<i32>> = Map2D::new();
    /// map.put("A", "x", None);
    ///
    /// assert_eq!(map.get_or_default(&"A", &"x", &Some(7)), &None);
    /// assert_eq!(map.get_or_default(&"A", &"y", &Some(7)), &Some(7));
    /// ```
    pub fn get_or_default<'a, QR, QC>(&'a self, row: &QR, column: &QC, default: &'a V) -> &'a V
    where
        R: Borrow<QR>,
        C: Borrow<QC>,
        QR: Hash + Eq + ?Sized,
        QC: Hash + Eq + ?Sized,
    {
        self.get(row, column).unwrap_or(default)
    }

    /// Removes the cell at `(row, column)` and returns its value.
    ///
    /// If the row has no columns left afterwards, the row itself is removed.
    pub fn remove<QR, QC>(&mut self, row: &QR, column: &QC) -> Option<V>
    where
        R: Borrow<QR>,
        C: Borrow<QC>,
        QR: Hash + Eq + ?Sized,
        QC: Hash + Eq + ?Sized,
    {
        let cells = self.rows.get_mut(row)?;
        let removed = cells.remove(column);
        if cells.is_empty() {
            tracing::trace!("map2d: pruning emptied row");
            self.rows.remove(row);
        }
        removed
    }

    /// Returns `true` if a cell exists at `(row, column)`.
    pub fn contains_key<QR, QC>(&self, row: &QR, column: &QC) -> bool
    where
        R: Borrow<QR>,
        C: Borrow<QC>,
        QR: Hash + Eq + ?Sized,
        QC: Hash + Eq + ?Sized,
    {
        self.rows
            .get(row)
            .is_some_and(|cells| cells.contains_key(column))
    }

    /// Returns `true` if the row holds at least one cell.
    pub fn contains_row<QR>(&self, row: &QR) -> bool
    where
        R: Borrow<QR>,
        QR: Hash + Eq + ?Sized,
    {
        self.rows.contains_key(row)
    }

    /// Returns `true` if any row holds the column. O(rows).
    pub fn contains_column<QC>(&self, column: &QC) -> bool
    where
        C: Borrow<QC>,
        QC: Hash + Eq + ?Sized,
    {
        self.rows.values().any(|cells| cells.contains_key(column))
    }

    /// Returns `true` if any cell holds a value equal to `value`. O(cells).
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.rows
            .values()
            .any(|cells| cells.values().any(|stored| stored == value))
    }

    /// Returns the distinct column keys across all rows.
    #[must_use]
    pub fn columns(&self) -> HashSet<&C, S>
    where
        S: Clone,
    {
        let mut columns = HashSet::with_hasher(self.rows.hasher().clone());
        columns.extend(self.rows.values().flat_map(HashMap::keys));
        columns
    }

    /// Removes a whole row, returning its cells.
    pub fn remove_row<QR>(&mut self, row: &QR) -> Option<RowView<C, V, S>>
    where
        R: Borrow<QR>,
        QR: Hash + Eq + ?Sized,
    {
        self.rows.remove(row)
    }

    /// Removes a column from every row, returning the removed cells keyed by row.
    ///
    /// Rows left without columns are pruned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map2d::core::map2d::Map2D;
    ///
    /// let mut map = Map2D::new();
    /// map.put("A", "x", 1);
    /// map.put("A", "y", 2);
    /// map.put("B", "x", 3);
    ///
    /// let removed = map.remove_column(&"x");
    /// assert_eq!(removed.len(), 2);
    /// assert!(map.contains_row(&"A"));
    /// assert!(!map.contains_row(&"B"));
    /// ```
    pub fn remove_column<QC>(&mut self, column: &QC) -> ColumnView<R, V, S>
    where
        R: Clone,
        C: Borrow<QC>,
        QC: Hash + Eq + ?Sized,
        S: Clone,
    {
        let mut removed = HashMap::with_hasher(self.rows.hasher().clone());
        self.rows.retain(|row, cells| {
            if let Some(value) = cells.remove(column) {
                removed.insert(row.clone(), value);
            }
            !cells.is_empty()
        });
        tracing::trace!(removed = removed.len(), "map2d: removed column");
        removed
    }

    /// Checks that no row is present without columns.
    ///
    /// # Errors
    ///
    /// Returns [`Map2DError::EmptyRow`] with the number of offending rows.
    pub fn is_valid(&self) -> Result<(), Map2DError> {
        let count = self.rows.values().filter(|cells| cells.is_empty()).count();
        if count > 0 {
            tracing::warn!(count, "map2d: found rows without columns");
            return Err(Map2DError::EmptyRow { count });
        }
        Ok(())
    }
}

impl<R, C, T, S> Map2D<R, C, Option<T>, S>
where
    R: Eq + Hash,
    C: Eq + Hash,
    S: BuildHasher,
{
    /// Plain lookup for maps whose cells may hold "no value".
    ///
    /// Returns `None` both when the cell is absent and when it stores `None`.
    /// Use [`Map2D::contains_key`] or [`Map2D::get_or_default`] to tell the
    /// two cases apart.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map2d::core::map2d::Map2D;
    ///
    /// let mut map: Map2D<&str, &str, Option<i32>> = Map2D::new();
    /// map.put("A", "x", None);
    /// map.put("A", "y", Some(3));
    ///
    /// assert_eq!(map.get_value(&"A", &"x"), None);
    /// assert_eq!(map.get_value(&"A", &"z"), None);
    /// assert_eq!(map.get_value(&"A", &"y"), Some(&3));
    /// assert!(map.contains_key(&"A", &"x"));
    /// ```
    pub fn get_value<QR, QC>(&self, row: &QR, column: &QC) -> Option<&T>
    where
        R: Borrow<QR>,
        C: Borrow<QC>,
        QR: Hash + Eq + ?Sized,
        QC: Hash + Eq + ?Sized,
    {
        self.get(row, column)?.as_ref()
    }
}

// =============================================================================
// ITERATION
// =============================================================================

/// Iterator over the cells of a [`Map2D`], created by [`Map2D::iter`].
pub struct Iter<'a, R, C, V, S> {
    rows: hash_map::Iter<'a, R, HashMap<C, V, S>>,
    cells: Option<(&'a R, hash_map::Iter<'a, C, V>)>,
}

impl<'a, R, C, V, S> Iterator for Iter<'a, R, C, V, S> {
    type Item = (&'a R, &'a C, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((row, cells)) = &mut self.cells {
                if let Some((column, value)) = cells.next() {
                    return Some((*row, column, value));
                }
            }
            let (row, cells) = self.rows.next()?;
            self.cells = Some((row, cells.iter()));
        }
    }
}

impl<'a, R, C, V, S> IntoIterator for &'a Map2D<R, C, V, S> {
    type Item = (&'a R, &'a C, &'a V);
    type IntoIter = Iter<'a, R, C, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// TRAIT IMPLEMENTATIONS
// =============================================================================

impl<R, C, V, S> Default for Map2D<R, C, V, S>
where
    S: Default,
{
    fn default() -> Self {
        Self {
            rows: HashMap::default(),
        }
    }
}

impl<R, C, V, S> fmt::Debug for Map2D<R, C, V, S>
where
    R: fmt::Debug,
    C: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.rows.iter()).finish()
    }
}

/// Two maps are equal when they hold the same cells.
impl<R, C, V, S> PartialEq for Map2D<R, C, V, S>
where
    R: Eq + Hash,
    C: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<R, C, V, S> Eq for Map2D<R, C, V, S>
where
    R: Eq + Hash,
    C: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<R, C, V, S> Extend<(R, C, V)> for Map2D<R, C, V, S>
where
    R: Eq + Hash,
    C: Eq + Hash,
    S: BuildHasher + Clone,
{
    fn extend<I: IntoIterator<Item = (R, C, V)>>(&mut self, iter: I) {
        for (row, column, value) in iter {
            self.put(row, column, value);
        }
    }
}

impl<R, C, V, S> FromIterator<(R, C, V)> for Map2D<R, C, V, S>
where
    R: Eq + Hash,
    C: Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = (R, C, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::RandomState;

    pub(super) fn init_tracing() {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            let filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_test_writer()
                .try_init();
        });
    }

    fn sample_map() -> Map2D<&'static str, &'static str, i32> {
        let mut map = Map2D::new();
        map.put("A", "x", 1);
        map.put("A", "y", 2);
        map.put("B", "x", 3);
        map
    }

    // =============================================================================
    // CELL OPERATION TESTS
    // =============================================================================

    #[test]
    fn test_put_get_and_overwrite() {
        let mut map: Map2D<&str, &str, i32> = Map2D::new();
        assert_eq!(map.put("A", "x", 1), None);
        assert_eq!(map.get(&"A", &"x"), Some(&1));
        assert!(map.contains_key(&"A", &"x"));

        assert_eq!(map.put("A", "x", 9), Some(1));
        assert_eq!(map.get(&"A", &"x"), Some(&9));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_get_missing_row_and_missing_column() {
        let map = sample_map();
        assert_eq!(map.get(&"Z", &"x"), None);
        assert_eq!(map.get(&"B", &"y"), None);
    }

    #[test]
    fn test_borrowed_key_lookups() {
        let mut map: Map2D<String, String, u32> = Map2D::new();
        map.put("row".to_string(), "col".to_string(), 4);

        assert_eq!(map.get("row", "col"), Some(&4));
        assert!(map.contains_key("row", "col"));
        assert!(map.contains_row("row"));
        assert!(map.contains_column("col"));
        assert_eq!(map.remove("row", "col"), Some(4));
        assert!(map.is_empty());
    }

    #[test]
    fn test_try_put_rejects_missing_keys_without_mutation() {
        init_tracing();
        let mut map: Map2D<&str, &str, i32> = Map2D::new();

        assert_eq!(
            map.try_put(None, Some("x"), 1),
            Err(Map2DError::MissingRowKey)
        );
        assert_eq!(
            map.try_put(Some("A"), None, 1),
            Err(Map2DError::MissingColumnKey)
        );
        // Row is reported first when both are missing
        assert_eq!(map.try_put(None, None, 1), Err(Map2DError::MissingRowKey));
        assert!(map.is_empty());

        assert_eq!(map.try_put(Some("A"), Some("x"), 1), Ok(None));
        assert_eq!(map.try_put(Some("A"), Some("x"), 2), Ok(Some(1)));
    }

    #[test]
    fn test_remove_prunes_emptied_row() {
        init_tracing();
        let mut map = sample_map();

        assert_eq!(map.remove(&"A", &"y"), Some(2));
        assert_eq!(map.row_view(&"A").len(), 1);
        assert!(map.contains_row(&"A"));

        assert_eq!(map.remove(&"A", &"x"), Some(1));
        assert!(!map.contains_row(&"A"));
        assert_eq!(map.row_count(), 1);
        assert!(map.is_valid().is_ok());
    }

    #[test]
    fn test_remove_absent_cells_is_noop() {
        let mut map = sample_map();
        assert_eq!(map.remove(&"Z", &"x"), None);
        assert_eq!(map.remove(&"B", &"q"), None);
        assert_eq!(map.len(), 3);
        assert!(map.contains_row(&"B"));
    }

    #[test]
    fn test_contains_queries() {
        let map = sample_map();
        assert!(map.contains_row(&"A"));
        assert!(!map.contains_row(&"x"));
        assert!(map.contains_column(&"y"));
        assert!(!map.contains_column(&"A"));
        assert!(map.contains_value(&3));
        assert!(!map.contains_value(&4));
        assert!(!map.contains_key(&"B", &"y"));
    }

    #[test]
    fn test_len_empty_and_clear() {
        init_tracing();
        let mut map = sample_map();
        assert_eq!(map.len(), 3);
        assert!(map.non_empty());
        assert!(!map.is_empty());

        map.clear();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert!(!map.non_empty());
        assert_eq!(map.get(&"A", &"x"), None);
    }

    #[test]
    fn test_null_like_values_and_get_or_default() {
        let mut map: Map2D<&str, &str, Option<i32>> = Map2D::new();
        assert_eq!(map.put("A", "x", None), None);

        // Plain lookup cannot distinguish a stored None from an absent cell
        assert_eq!(map.get_value(&"A", &"x"), None);
        assert_eq!(map.get_value(&"A", &"missing"), None);

        assert!(map.contains_key(&"A", &"x"));
        assert!(!map.contains_key(&"A", &"missing"));
        assert_eq!(map.get_or_default(&"A", &"x", &Some(-1)), &None);
        assert_eq!(map.get_or_default(&"A", &"missing", &Some(-1)), &Some(-1));

        // Overwriting a stored None reports it as the previous value
        assert_eq!(map.put("A", "x", Some(5)), Some(None));
        assert_eq!(map.get_value(&"A", &"x"), Some(&5));
        assert!(map.contains_value(&Some(5)));
    }

    #[test]
    fn test_columns_and_rows() {
        let map = sample_map();
        let columns = map.columns();
        assert_eq!(columns.len(), 2);
        assert!(columns.contains(&"x"));
        assert!(columns.contains(&"y"));

        let mut rows: Vec<_> = map.rows().copied().collect();
        rows.sort_unstable();
        assert_eq!(rows, vec!["A", "B"]);
    }

    #[test]
    fn test_remove_row_and_remove_column() {
        let mut map = sample_map();

        let row = map.remove_row(&"A").expect("row A should be present");
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("y"), Some(&2));
        assert!(map.remove_row(&"A").is_none());

        map.put("C", "x", 7);
        map.put("C", "z", 8);
        let column = map.remove_column(&"x");
        assert_eq!(column.len(), 2);
        assert_eq!(column.get("B"), Some(&3));
        assert_eq!(column.get("C"), Some(&7));
        assert!(!map.contains_row(&"B"));
        assert_eq!(map.get(&"C", &"z"), Some(&8));
        assert!(map.is_valid().is_ok());

        assert!(map.remove_column(&"nope").is_empty());
    }

    #[test]
    fn test_is_valid_reports_empty_rows() {
        init_tracing();
        let mut map = sample_map();
        assert!(map.is_valid().is_ok());

        // Only reachable by corrupting the storage directly
        map.rows.insert("E", HashMap::default());
        map.rows.insert("F", HashMap::default());
        assert_eq!(map.is_valid(), Err(Map2DError::EmptyRow { count: 2 }));
    }

    // =============================================================================
    // ITERATION AND TRAIT TESTS
    // =============================================================================

    #[test]
    fn test_iter_visits_every_cell_once() {
        let map = sample_map();
        let mut cells: Vec<_> = map.iter().map(|(r, c, v)| (*r, *c, *v)).collect();
        cells.sort_unstable();
        assert_eq!(cells, vec![("A", "x", 1), ("A", "y", 2), ("B", "x", 3)]);

        let count = (&map).into_iter().count();
        assert_eq!(count, map.len());

        let empty: Map2D<u8, u8, u8> = Map2D::new();
        assert_eq!(empty.iter().next(), None);
    }

    #[test]
    fn test_from_iterator_extend_and_equality() {
        let collected: Map2D<&str, &str, i32> =
            [("A", "x", 1), ("A", "y", 2), ("B", "x", 3)].into_iter().collect();
        assert_eq!(collected, sample_map());

        let mut extended = collected.clone();
        extended.extend([("A", "x", 10)]);
        assert_ne!(extended, collected);
        assert_eq!(extended.get(&"A", &"x"), Some(&10));
        assert_eq!(extended.len(), 3);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample_map();
        let mut copy = original.clone();
        copy.put("A", "x", 100);
        copy.remove(&"B", &"x");

        assert_eq!(original.get(&"A", &"x"), Some(&1));
        assert!(original.contains_row(&"B"));
    }

    #[test]
    fn test_debug_output_contains_cells() {
        let mut map: Map2D<&str, &str, i32> = Map2D::new();
        map.put("A", "x", 1);
        assert_eq!(format!("{map:?}"), r#"{"A": {"x": 1}}"#);
    }

    #[test]
    fn test_custom_hasher_configuration() {
        let mut map: Map2D<u32, u32, &str, RandomState> =
            Map2D::with_capacity_and_hasher(16, RandomState::new());
        map.put(1, 2, "a");
        map.put(1, 3, "b");
        assert_eq!(map.len(), 2);
        assert_eq!(map.row_view(&1).len(), 2);

        let with_capacity: Map2D<u32, u32, u32> = Map2D::with_capacity(32);
        assert!(with_capacity.is_empty());
        let _ = with_capacity.hasher();
    }

    #[test]
    fn test_map2d_is_normal() {
        assert!(crate::is_normal::<Map2D<String, u64, f64>>());
        assert!(crate::is_normal::<Map2D<u8, u8, Option<Vec<u8>>>>());
    }
}
