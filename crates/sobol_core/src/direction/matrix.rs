//! Direction-number matrix construction.
//!
//! Expands table parameters into 32-bit direction numbers with the GF(2)
//! recurrence of Bratley & Fox (1988), Algorithm 659:
//!
//! ```text
//! v[i] = v[i-s] ^ (v[i-s] >> s) ^ XOR_{k=1}^{s-1} a_k * v[i-k]
//! ```
//!
//! where `a_k = (a >> (s - 1 - k)) & 1` and the first `s` entries are the
//! seeds left-aligned in the 32-bit word: `v[i] = m_i << (32 - i)`.

use tracing::debug;

use super::table::{DirectionNumberParams, DirectionNumberTable, MAX_BIT};
use crate::error::Result;

/// Direction numbers of one dimension, indexed by bit position `1..=32`.
///
/// Entry 0 is unused by the draw rule and always holds 0.
pub type DirectionRow = [u32; MAX_BIT + 1];

/// Matrix of direction numbers `v[j][i]` for dimension index `j` and bit
/// position `i`.
///
/// Built once per engine and read-only afterwards. Two builds for the same
/// dimensionality and table compare equal.
///
/// # Examples
///
/// ```rust
/// use sobol_core::direction::{DirectionNumberMatrix, DirectionNumberTable};
///
/// let table = DirectionNumberTable::joe_kuo_head();
/// let matrix = DirectionNumberMatrix::build(2, table).unwrap();
///
/// assert_eq!(matrix.dimension(), 2);
/// // Dimension 0 is the all-ones column: v[0][i] = 1 << (32 - i).
/// assert_eq!(matrix.get(0, 1), 1 << 31);
/// assert_eq!(matrix.get(0, 32), 1);
///
/// assert!(DirectionNumberMatrix::build(38, table).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionNumberMatrix {
    rows: Vec<DirectionRow>,
}

impl DirectionNumberMatrix {
    /// Builds the matrix for `dimension` dimensions from `table`.
    ///
    /// # Errors
    ///
    /// Returns `SobolError::InvalidDimension` when `dimension` is 0 or exceeds
    /// `table.max_dimension()`. The check happens before any row is read.
    pub fn build(dimension: usize, table: &DirectionNumberTable) -> Result<Self> {
        table.check_dimension(dimension)?;

        let mut rows = Vec::with_capacity(dimension);
        rows.push(first_dimension_row());
        // check_dimension guarantees a row for every index below `dimension`.
        rows.extend(
            table
                .rows()
                .iter()
                .skip(table.row_offset())
                .take(dimension - 1)
                .map(recurrence_row),
        );

        debug!(
            dimension,
            row_offset = table.row_offset(),
            "Built direction-number matrix"
        );
        Ok(Self { rows })
    }

    /// Number of dimensions covered.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Direction numbers of dimension index `j`.
    ///
    /// # Panics
    ///
    /// Panics if `j >= self.dimension()`.
    #[inline]
    pub fn row(&self, j: usize) -> &DirectionRow {
        &self.rows[j]
    }

    /// All rows in dimension order.
    #[inline]
    pub fn rows(&self) -> &[DirectionRow] {
        &self.rows
    }

    /// Direction number `v[j][i]`.
    ///
    /// # Panics
    ///
    /// Panics if `j >= self.dimension()` or `i > 32`.
    #[inline]
    pub fn get(&self, j: usize, i: usize) -> u32 {
        self.rows[j][i]
    }
}

/// All-ones column for dimension index 0: `v[i] = 1 << (32 - i)`.
///
/// Index 0 would need a shift by the full word width and holds 0.
fn first_dimension_row() -> DirectionRow {
    let mut row = [0u32; MAX_BIT + 1];
    for (i, v) in row.iter_mut().enumerate() {
        *v = 1u32.checked_shl((MAX_BIT - i) as u32).unwrap_or(0);
    }
    row
}

fn recurrence_row(params: &DirectionNumberParams) -> DirectionRow {
    let s = params.degree() as usize;
    let mut row = [0u32; MAX_BIT + 1];

    for (i, &m) in (1..=s).zip(params.seeds()) {
        row[i] = m << (MAX_BIT - i);
    }

    for i in (s + 1)..=MAX_BIT {
        let mut value = row[i - s] ^ (row[i - s] >> s);
        for k in 1..s {
            if params.coefficient_bit(k as u32) == 1 {
                value ^= row[i - k];
            }
        }
        row[i] = value;
    }
    row
}
