//! Caller-owned history of drawn Sobol points.
//!
//! The engine keeps only the latest value per dimension. When a full replay
//! of the sequence is needed, the caller owns a [`SequenceRecorder`] and
//! feeds it every draw; generation and accumulation stay separate.

use super::qmc::{fixed_point_to_unit, SobolEngine};
use crate::error::{Result, SobolError};

/// Per-dimension history of fixed-point values.
///
/// Starts with the origin, so after `k` recorded draws every dimension holds
/// `k + 1` values and `history(j)[0] == 0`. Memory grows by one word per
/// dimension per draw.
///
/// # Examples
///
/// ```rust
/// use sobol_core::rng::{SequenceRecorder, SobolEngine};
///
/// let mut engine = SobolEngine::new(2).unwrap();
/// let mut recorder = SequenceRecorder::new(2);
///
/// for _ in 0..4 {
///     recorder.draw_from(&mut engine).unwrap();
/// }
///
/// assert_eq!(engine.count(), 4);
/// assert_eq!(recorder.count(), 4);
/// assert_eq!(recorder.history(0).unwrap().len(), 5);
/// assert_eq!(recorder.point(1).unwrap(), vec![0.5, 0.5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecorder {
    history: Vec<Vec<u32>>,
}

impl SequenceRecorder {
    /// Creates an empty recorder for `dimension` coordinates per point.
    pub fn new(dimension: usize) -> Self {
        Self {
            history: vec![vec![0]; dimension],
        }
    }

    /// Creates a recorder sized for `dimension` coordinates and `capacity`
    /// points.
    pub fn with_capacity(dimension: usize, capacity: usize) -> Self {
        let mut history = Vec::with_capacity(dimension);
        for _ in 0..dimension {
            let mut values = Vec::with_capacity(capacity + 1);
            values.push(0);
            history.push(values);
        }
        Self { history }
    }

    /// Number of coordinates per point.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.history.len()
    }

    /// Number of points recorded, the origin excluded.
    #[inline]
    pub fn count(&self) -> usize {
        self.history.first().map_or(0, |values| values.len() - 1)
    }

    /// Appends one point given as fixed-point values.
    ///
    /// # Errors
    ///
    /// Returns `SobolError::BufferLength` if `values.len()` differs from
    /// `dimension()`. Nothing is recorded in that case.
    pub fn record(&mut self, values: &[u32]) -> Result<()> {
        if values.len() != self.dimension() {
            return Err(SobolError::BufferLength {
                expected: self.dimension(),
                actual: values.len(),
            });
        }
        for (history, &value) in self.history.iter_mut().zip(values) {
            history.push(value);
        }
        Ok(())
    }

    /// Draws the next point from `engine`, records it and returns it.
    ///
    /// # Errors
    ///
    /// Returns `SobolError::BufferLength` if the engine dimensionality
    /// differs (the engine does not advance), otherwise any error of
    /// [`SobolEngine::draw_fixed_point`].
    pub fn draw_from(&mut self, engine: &mut SobolEngine) -> Result<Vec<f64>> {
        if engine.dimension() != self.dimension() {
            return Err(SobolError::BufferLength {
                expected: self.dimension(),
                actual: engine.dimension(),
            });
        }
        let values = engine.draw_fixed_point()?;
        self.record(values)?;
        Ok(values.iter().copied().map(fixed_point_to_unit).collect())
    }

    /// Recorded fixed-point values of dimension index `j`, origin first.
    pub fn history(&self, j: usize) -> Option<&[u32]> {
        self.history.get(j).map(Vec::as_slice)
    }

    /// Point `k` as coordinates in [0, 1); point 0 is the origin.
    pub fn point(&self, k: usize) -> Option<Vec<f64>> {
        if k > self.count() {
            return None;
        }
        Some(
            self.history
                .iter()
                .map(|values| fixed_point_to_unit(values[k]))
                .collect(),
        )
    }

    /// Iterates over recorded points in draw order, the origin excluded.
    pub fn points(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        (1..=self.count()).filter_map(move |k| self.point(k))
    }

    /// Discards every recorded point, keeping the origin.
    pub fn clear(&mut self) {
        for values in &mut self.history {
            values.truncate(1);
        }
    }
}
