//! Hash collection types used for storage and for every view a `Map2D` returns.
//!
//! The container stores its cells row-major in nested [`FastHashMap`]s and
//! hands out owned copies typed by the aliases in this module
//! ([`RowView`], [`ColumnView`], [`RowMapView`], [`ColumnMapView`]).

mod aliases;
mod view_maps;

pub use aliases::*;
pub use view_maps::*;
