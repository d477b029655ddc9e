//! Direction-number parameters and tables.
//!
//! Values come from the Joe & Kuo `new-joe-kuo-6.21201` parameter file
//! (<https://web.maths.unsw.edu.au/~fkuo/sobol/>). They are data, not logic:
//! any deviation breaks bit-exact agreement with other Sobol generators that
//! read the same file.

use std::sync::OnceLock;

#[cfg(published_table)]
use tracing::error;

use crate::error::{Result, SobolError};

/// Width of the fixed-point state and number of direction-number columns.
pub const MAX_BIT: usize = 32;

/// Row offset reproducing generators that skipped the first 1000 data rows
/// of the published parameter file.
///
/// With this offset dimension index `j >= 1` reads the row labelled
/// `d = j + 1001`, the entry such generators fetch as `rows[1000 + j]` from a
/// list that holds file dimension `d` at position `d - 1`.
pub const HISTORICAL_ROW_SKIP: usize = 1000;

/// `true` when the full published parameter file was embedded at build time.
pub const PUBLISHED_TABLE_EMBEDDED: bool = cfg!(published_table);

/// Leading rows of `new-joe-kuo-6.21201`: every primitive polynomial of
/// degree 1 to 7, file dimensions `d = 2..=37`. Columns are `(s, a, m_i)`.
const JOE_KUO_HEAD: [(u32, u32, &[u32]); 36] = [
    (1, 0, &[1]),
    (2, 1, &[1, 3]),
    (3, 1, &[1, 3, 1]),
    (3, 2, &[1, 1, 1]),
    (4, 1, &[1, 1, 3, 3]),
    (4, 4, &[1, 3, 5, 13]),
    (5, 2, &[1, 1, 5, 5, 17]),
    (5, 4, &[1, 1, 5, 5, 5]),
    (5, 7, &[1, 1, 7, 11, 19]),
    (5, 11, &[1, 1, 5, 1, 1]),
    (5, 13, &[1, 1, 1, 3, 11]),
    (5, 14, &[1, 3, 5, 5, 31]),
    (6, 1, &[1, 3, 3, 9, 7, 49]),
    (6, 13, &[1, 1, 1, 15, 21, 21]),
    (6, 16, &[1, 3, 1, 13, 27, 49]),
    (6, 19, &[1, 1, 1, 15, 7, 5]),
    (6, 22, &[1, 3, 1, 15, 13, 25]),
    (6, 25, &[1, 1, 5, 5, 19, 61]),
    (7, 1, &[1, 3, 7, 11, 23, 15, 103]),
    (7, 4, &[1, 3, 7, 13, 13, 15, 69]),
    (7, 7, &[1, 1, 3, 13, 7, 35, 63]),
    (7, 8, &[1, 3, 5, 9, 1, 25, 53]),
    (7, 14, &[1, 3, 1, 13, 9, 35, 107]),
    (7, 19, &[1, 3, 1, 5, 27, 61, 31]),
    (7, 21, &[1, 1, 5, 11, 19, 41, 61]),
    (7, 28, &[1, 3, 5, 3, 3, 13, 69]),
    (7, 31, &[1, 1, 7, 13, 1, 19, 1]),
    (7, 32, &[1, 3, 7, 5, 13, 19, 59]),
    (7, 37, &[1, 1, 3, 9, 25, 29, 41]),
    (7, 41, &[1, 3, 5, 13, 23, 1, 55]),
    (7, 42, &[1, 3, 7, 3, 13, 59, 17]),
    (7, 50, &[1, 3, 1, 3, 5, 53, 69]),
    (7, 55, &[1, 1, 5, 5, 23, 33, 13]),
    (7, 56, &[1, 1, 7, 7, 1, 61, 123]),
    (7, 59, &[1, 1, 7, 9, 13, 61, 49]),
    (7, 62, &[1, 3, 3, 5, 3, 55, 33]),
];

#[cfg(published_table)]
static PUBLISHED_TEXT: &str = include_str!(concat!(env!("OUT_DIR"), "/new-joe-kuo-6.21201"));

static HEAD_TABLE: OnceLock<DirectionNumberTable> = OnceLock::new();
static BUILTIN_TABLE: OnceLock<DirectionNumberTable> = OnceLock::new();

/// Sobol parameters for one dimension.
///
/// Holds the degree `s` of a primitive polynomial over GF(2), its inner
/// coefficients `a` packed into `s - 1` bits (highest-order coefficient
/// first), and the `s` initial direction numbers `m_1 .. m_s`.
///
/// # Examples
///
/// ```rust
/// use sobol_core::direction::DirectionNumberParams;
///
/// // x^3 + x + 1 with m = (1, 3, 1)
/// let params = DirectionNumberParams::new(3, 1, vec![1, 3, 1]).unwrap();
/// assert_eq!(params.degree(), 3);
/// assert_eq!(params.coefficient_bit(1), 0);
/// assert_eq!(params.coefficient_bit(2), 1);
///
/// // m_2 must be odd and below 2^2
/// assert!(DirectionNumberParams::new(2, 1, vec![1, 4]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionNumberParams {
    degree: u32,
    coefficients: u32,
    seeds: Vec<u32>,
}

impl DirectionNumberParams {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns `SobolError::InvalidParams` if the degree is outside
    /// `1..=32`, the coefficients use more than `degree - 1` bits, the seed
    /// count differs from the degree, or a seed `m_k` is even or not below
    /// `2^k`.
    pub fn new(degree: u32, coefficients: u32, seeds: Vec<u32>) -> Result<Self> {
        let params = Self {
            degree,
            coefficients,
            seeds,
        };
        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> Result<()> {
        let invalid = |message: String| SobolError::InvalidParams {
            degree: self.degree,
            message,
        };

        if self.degree == 0 || self.degree as usize > MAX_BIT {
            return Err(invalid(format!("degree must lie in 1..={}", MAX_BIT)));
        }
        if u64::from(self.coefficients) >= 1u64 << (self.degree - 1) {
            return Err(invalid(format!(
                "coefficients {} use more than {} bits",
                self.coefficients,
                self.degree - 1
            )));
        }
        if self.seeds.len() != self.degree as usize {
            return Err(invalid(format!(
                "expected {} seeds, got {}",
                self.degree,
                self.seeds.len()
            )));
        }
        for (k, &seed) in (1u32..).zip(&self.seeds) {
            if seed % 2 == 0 {
                return Err(invalid(format!("seed m_{} = {} is even", k, seed)));
            }
            if u64::from(seed) >= 1u64 << k {
                return Err(invalid(format!("seed m_{} = {} is not below 2^{}", k, seed, k)));
            }
        }
        Ok(())
    }

    /// Degree `s` of the primitive polynomial.
    #[inline]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Packed inner coefficients `a`.
    #[inline]
    pub fn coefficients(&self) -> u32 {
        self.coefficients
    }

    /// Initial direction numbers `m_1 .. m_s`.
    #[inline]
    pub fn seeds(&self) -> &[u32] {
        &self.seeds
    }

    /// Coefficient `a_k` for `k` in `1..s`, i.e. `(a >> (s - 1 - k)) & 1`.
    #[inline]
    pub fn coefficient_bit(&self, k: u32) -> u32 {
        debug_assert!(k >= 1 && k < self.degree);
        (self.coefficients >> (self.degree - 1 - k)) & 1
    }
}

/// An immutable table of direction-number parameters.
///
/// The table owns the data rows of a Joe & Kuo style parameter file (the row
/// labelled `d = 2` first) and a row offset. Dimension index `j >= 1` reads
/// row `row_offset + j - 1`; dimension index 0 needs no row.
///
/// # Examples
///
/// ```rust
/// use sobol_core::direction::{DirectionNumberTable, HISTORICAL_ROW_SKIP};
///
/// let head = DirectionNumberTable::joe_kuo_head();
/// assert_eq!(head.len(), 36);
/// assert_eq!(head.max_dimension(), 37);
/// assert_eq!(head.params(2).unwrap().seeds(), &[1, 3]);
///
/// // Skipping more rows than the table holds leaves dimension 1 only.
/// let skipped = head.clone().with_row_offset(HISTORICAL_ROW_SKIP);
/// assert_eq!(skipped.max_dimension(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionNumberTable {
    rows: Vec<DirectionNumberParams>,
    row_offset: usize,
}

impl DirectionNumberTable {
    /// Returns the table `SobolEngine::new` reads.
    ///
    /// When the published file was embedded at build time (see
    /// [`PUBLISHED_TABLE_EMBEDDED`]) this is every row of it at
    /// [`HISTORICAL_ROW_SKIP`]. Otherwise it is [`Self::joe_kuo_head`].
    ///
    /// Initialised lazily on first use and shared for the process lifetime.
    pub fn builtin() -> &'static DirectionNumberTable {
        BUILTIN_TABLE.get_or_init(Self::load_builtin)
    }

    /// Returns the leading 36 rows of the published file (`d = 2..=37`, every
    /// primitive polynomial of degree 1 to 7) at row offset 0.
    pub fn joe_kuo_head() -> &'static DirectionNumberTable {
        HEAD_TABLE.get_or_init(|| {
            let rows = JOE_KUO_HEAD
                .iter()
                .map(|&(degree, coefficients, seeds)| DirectionNumberParams {
                    degree,
                    coefficients,
                    seeds: seeds.to_vec(),
                })
                .collect();
            Self::from_rows(rows)
        })
    }

    #[cfg(published_table)]
    fn load_builtin() -> DirectionNumberTable {
        match Self::parse_joe_kuo(PUBLISHED_TEXT) {
            Ok(table) => table.with_row_offset(HISTORICAL_ROW_SKIP),
            Err(e) => {
                error!(error = %e, "Embedded parameter file is malformed, using leading rows");
                Self::joe_kuo_head().clone()
            }
        }
    }

    #[cfg(not(published_table))]
    fn load_builtin() -> DirectionNumberTable {
        Self::joe_kuo_head().clone()
    }

    /// Creates a table from validated rows with a row offset of 0.
    pub fn from_rows(rows: Vec<DirectionNumberParams>) -> Self {
        Self {
            rows,
            row_offset: 0,
        }
    }

    /// Returns the table with a different row offset.
    pub fn with_row_offset(mut self, row_offset: usize) -> Self {
        self.row_offset = row_offset;
        self
    }

    /// Number of data rows skipped before dimension index 1's row.
    #[inline]
    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// Number of data rows held, including skipped ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table holds no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All data rows, including skipped ones.
    #[inline]
    pub fn rows(&self) -> &[DirectionNumberParams] {
        &self.rows
    }

    /// Largest dimensionality an engine built on this table may request.
    ///
    /// Counts dimension 0 (no row) plus every row past the offset.
    #[inline]
    pub fn max_dimension(&self) -> usize {
        self.rows.len().saturating_sub(self.row_offset) + 1
    }

    /// Parameters for dimension index `dimension`.
    ///
    /// Returns `None` for dimension 0 (defined without a row) and for
    /// indices past the end of the table.
    pub fn params(&self, dimension: usize) -> Option<&DirectionNumberParams> {
        if dimension == 0 {
            return None;
        }
        self.rows.get(self.row_offset + dimension - 1)
    }

    /// Verifies that `dimension` lies in `1..=max_dimension()`.
    ///
    /// # Errors
    ///
    /// Returns `SobolError::InvalidDimension` otherwise.
    pub fn check_dimension(&self, dimension: usize) -> Result<()> {
        let max = self.max_dimension();
        if dimension == 0 || dimension > max {
            return Err(SobolError::InvalidDimension {
                requested: dimension,
                max,
            });
        }
        Ok(())
    }
}
