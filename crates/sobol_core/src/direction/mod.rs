//! # Direction Numbers
//!
//! Per-dimension Sobol parameters and the matrix they expand into.
//!
//! ## Module Structure
//!
//! - [`table`]: `DirectionNumberParams`, `DirectionNumberTable`, the
//!   transcribed leading Joe & Kuo rows and the embedded published file
//! - [`joe_kuo`]: Reader and writer for the published `new-joe-kuo` text format
//! - [`matrix`]: The GF(2) recurrence building a `DirectionNumberMatrix`
//!
//! ## Dimension Mapping
//!
//! Dimension index 0 has no table row: its direction numbers are the
//! all-ones column `1 << (32 - i)`. Dimension index `j >= 1` reads data row
//! `row_offset + j - 1` of the table, i.e. the row the published file labels
//! `d = row_offset + j + 1`.
//!
//! [`DirectionNumberTable::builtin`] carries [`HISTORICAL_ROW_SKIP`] when the
//! published file is embedded, so index 1 reads `d = 1002`. Without the file
//! it falls back to [`DirectionNumberTable::joe_kuo_head`] at offset 0, where
//! index 1 reads `d = 2`. Either way the supported range is
//! `1..=DirectionNumberTable::builtin().max_dimension()`.
//!
//! ## Usage Example
//!
//! ```rust
//! use sobol_core::direction::{DirectionNumberMatrix, DirectionNumberTable};
//!
//! let table = DirectionNumberTable::builtin();
//! assert!(table.max_dimension() >= 37);
//!
//! let matrix = DirectionNumberMatrix::build(3, DirectionNumberTable::joe_kuo_head()).unwrap();
//! assert_eq!(matrix.get(1, 1), 0x8000_0000);
//! assert_eq!(matrix.get(2, 2), 0xC000_0000);
//! ```

pub mod joe_kuo;
pub mod matrix;
pub mod table;

pub use matrix::DirectionNumberMatrix;
pub use table::{
    DirectionNumberParams, DirectionNumberTable, HISTORICAL_ROW_SKIP, MAX_BIT,
    PUBLISHED_TABLE_EMBEDDED,
};
