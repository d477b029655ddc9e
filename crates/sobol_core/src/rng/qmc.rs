//! Quasi-Monte Carlo sequence trait and the Sobol engine.
//!
//! [`SobolEngine`] advances a Sobol sequence in Gray-code order (Antonov &
//! Saleev, 1979): consecutive points differ by a single XOR with one
//! direction-number column per dimension, selected by the lowest zero bit of
//! the previous counter value.

use tracing::{debug, warn};

use crate::direction::{DirectionNumberMatrix, DirectionNumberTable, MAX_BIT};
use crate::error::{Result, SobolError};

/// Denominator of the 32-bit fixed-point representation.
const FIXED_POINT_DENOMINATOR: f64 = 4_294_967_296.0;

/// Number of points a 32-bit draw counter can index.
pub const MAX_POINTS: u32 = u32::MAX;

/// Trait for low-discrepancy sequences used in quasi-Monte Carlo sampling.
///
/// Low-discrepancy sequences cover the unit hypercube more evenly than
/// pseudo-random draws, so fewer samples are needed to explore a search
/// space.
pub trait LowDiscrepancySequence {
    /// Returns the dimensionality of the sequence.
    fn dimension(&self) -> usize;

    /// Advances the sequence and returns the next point.
    ///
    /// # Returns
    ///
    /// A slice of `dimension()` values, each in the interval [0, 1).
    ///
    /// # Errors
    ///
    /// Returns an error once the sequence cannot advance further.
    fn next_point(&mut self) -> Result<&[f64]>;

    /// Resets the sequence to its initial state.
    ///
    /// After calling this method, the sequence will produce the same
    /// points as a newly initialised instance.
    fn reset(&mut self);

    /// Skips ahead by `n` points in the sequence.
    ///
    /// Useful when different consumers need non-overlapping portions of the
    /// same sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence holds fewer than `n` further points.
    fn skip(&mut self, n: u32) -> Result<()>;
}

/// Converts a 32-bit fixed-point fraction to `f64` in [0, 1).
#[inline]
pub(crate) fn fixed_point_to_unit(value: u32) -> f64 {
    f64::from(value) / FIXED_POINT_DENOMINATOR
}

/// 1-based position of the lowest zero bit of `n`.
///
/// `n` must not be `u32::MAX`, which has no zero bit.
#[inline]
fn rightmost_zero_bit(n: u32) -> usize {
    n.trailing_ones() as usize + 1
}

/// Sobol quasi-random point generator.
///
/// Owns its direction-number matrix, a 32-bit draw counter and the latest
/// fixed-point value per dimension. Only the latest value is kept: callers
/// needing the full history feed each draw to a
/// [`SequenceRecorder`](super::SequenceRecorder).
///
/// Drawing takes `&mut self`, so a single engine has exactly one writer.
/// Concurrent consumers clone the engine or build their own.
///
/// # Examples
///
/// ```rust
/// use sobol_core::direction::DirectionNumberTable;
/// use sobol_core::rng::SobolEngine;
///
/// let mut engine = SobolEngine::with_table(2, DirectionNumberTable::joe_kuo_head()).unwrap();
/// assert_eq!(engine.draw().unwrap(), vec![0.5, 0.5]);
/// assert_eq!(engine.draw().unwrap(), vec![0.75, 0.25]);
/// assert_eq!(engine.draw().unwrap(), vec![0.25, 0.75]);
///
/// // Unsupported dimensionality is a configuration error, not a panic.
/// let max = DirectionNumberTable::builtin().max_dimension();
/// assert!(SobolEngine::new(0).is_err());
/// assert!(SobolEngine::new(max + 1).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SobolEngine {
    /// Direction numbers, read-only after construction.
    matrix: DirectionNumberMatrix,
    /// Number of points drawn so far.
    count: u32,
    /// Latest fixed-point value per dimension.
    state: Vec<u32>,
    /// Scratch buffer backing `next_point`.
    point: Vec<f64>,
}

impl SobolEngine {
    /// Creates an engine over the built-in direction-number table.
    ///
    /// # Errors
    ///
    /// Returns `SobolError::InvalidDimension` when `dimension` is 0 or above
    /// `DirectionNumberTable::builtin().max_dimension()`.
    pub fn new(dimension: usize) -> Result<Self> {
        Self::with_table(dimension, DirectionNumberTable::builtin())
    }

    /// Creates an engine over an explicit direction-number table.
    ///
    /// # Errors
    ///
    /// Returns `SobolError::InvalidDimension` when `dimension` is 0 or above
    /// `table.max_dimension()`.
    pub fn with_table(dimension: usize, table: &DirectionNumberTable) -> Result<Self> {
        let matrix = DirectionNumberMatrix::build(dimension, table)?;
        debug!(dimension, "Initialised Sobol engine");
        Ok(Self::from_matrix(matrix))
    }

    /// Creates an engine from a prebuilt matrix, at the start of the sequence.
    pub fn from_matrix(matrix: DirectionNumberMatrix) -> Self {
        let dimension = matrix.dimension();
        Self {
            matrix,
            count: 0,
            state: vec![0; dimension],
            point: vec![0.0; dimension],
        }
    }

    /// Number of coordinates per point.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.state.len()
    }

    /// Number of points drawn (or skipped) so far.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Number of points that can still be drawn.
    #[inline]
    pub fn remaining(&self) -> u32 {
        MAX_POINTS - self.count
    }

    /// The direction-number matrix driving this engine.
    #[inline]
    pub fn matrix(&self) -> &DirectionNumberMatrix {
        &self.matrix
    }

    /// Latest fixed-point value per dimension (all zero before the first draw).
    #[inline]
    pub fn fixed_point(&self) -> &[u32] {
        &self.state
    }

    /// Advances the counter and folds one direction-number column into the
    /// state of every dimension.
    fn advance(&mut self) -> Result<()> {
        if self.count == MAX_POINTS {
            warn!(dimension = self.dimension(), "Sobol draw counter exhausted");
            return Err(SobolError::CounterExhausted { limit: MAX_POINTS });
        }

        let column = rightmost_zero_bit(self.count);
        self.count += 1;
        for (x, row) in self.state.iter_mut().zip(self.matrix.rows()) {
            *x ^= row[column];
        }
        Ok(())
    }

    /// Draws the next point.
    ///
    /// # Returns
    ///
    /// `dimension()` coordinates, each `x / 2^32` for the 32-bit state `x`,
    /// hence in [0, 1).
    ///
    /// # Errors
    ///
    /// Returns `SobolError::CounterExhausted` after `2^32 - 1` points. The
    /// engine state is left untouched and every later draw fails the same way.
    pub fn draw(&mut self) -> Result<Vec<f64>> {
        self.advance()?;
        Ok(self.state.iter().copied().map(fixed_point_to_unit).collect())
    }

    /// Draws the next point into a caller-supplied buffer.
    ///
    /// Zero-allocation counterpart of [`SobolEngine::draw`].
    ///
    /// # Errors
    ///
    /// Returns `SobolError::BufferLength` if `out.len() != dimension()` (the
    /// engine does not advance), otherwise as [`SobolEngine::draw`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sobol_core::rng::SobolEngine;
    ///
    /// let mut engine = SobolEngine::new(3).unwrap();
    /// let mut buffer = [0.0; 3];
    /// engine.draw_into(&mut buffer).unwrap();
    /// assert_eq!(buffer, [0.5, 0.5, 0.5]);
    /// ```
    pub fn draw_into(&mut self, out: &mut [f64]) -> Result<()> {
        if out.len() != self.dimension() {
            return Err(SobolError::BufferLength {
                expected: self.dimension(),
                actual: out.len(),
            });
        }
        self.advance()?;
        for (slot, &x) in out.iter_mut().zip(&self.state) {
            *slot = fixed_point_to_unit(x);
        }
        Ok(())
    }

    /// Draws the next point as raw 32-bit fixed-point values.
    ///
    /// # Errors
    ///
    /// As [`SobolEngine::draw`].
    pub fn draw_fixed_point(&mut self) -> Result<&[u32]> {
        self.advance()?;
        Ok(&self.state)
    }

    /// Positions the engine so that `index` points have been drawn.
    ///
    /// The Gray-code state after `index` draws is the XOR of `v[j][b + 1]`
    /// over the set bits `b` of `index ^ (index >> 1)`, so this runs in
    /// O(dimension × 32) regardless of `index`.
    pub fn seek(&mut self, index: u32) {
        let gray = index ^ (index >> 1);
        for (x, row) in self.state.iter_mut().zip(self.matrix.rows()) {
            *x = (0..MAX_BIT)
                .filter(|&bit| (gray >> bit) & 1 == 1)
                .fold(0, |acc, bit| acc ^ row[bit + 1]);
        }
        self.count = index;
    }

    /// Skips `n` points without emitting them.
    ///
    /// # Errors
    ///
    /// Returns `SobolError::CounterExhausted` if fewer than `n` points
    /// remain. The engine state is left untouched.
    pub fn skip(&mut self, n: u32) -> Result<()> {
        let target = self
            .count
            .checked_add(n)
            .ok_or(SobolError::CounterExhausted { limit: MAX_POINTS })?;
        self.seek(target);
        Ok(())
    }

    /// Returns the engine to the start of the sequence.
    pub fn reset(&mut self) {
        self.count = 0;
        self.state.fill(0);
    }
}

impl LowDiscrepancySequence for SobolEngine {
    fn dimension(&self) -> usize {
        SobolEngine::dimension(self)
    }

    fn next_point(&mut self) -> Result<&[f64]> {
        self.advance()?;
        for (slot, &x) in self.point.iter_mut().zip(&self.state) {
            *slot = fixed_point_to_unit(x);
        }
        Ok(&self.point)
    }

    fn reset(&mut self) {
        SobolEngine::reset(self);
    }

    fn skip(&mut self, n: u32) -> Result<()> {
        SobolEngine::skip(self, n)
    }
}
