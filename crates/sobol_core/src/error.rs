//! Error types for Sobol sequence generation.
//!
//! This module provides:
//! - `SobolError`: Errors from table loading, matrix construction and drawing

use thiserror::Error;

/// Categorised Sobol engine errors.
///
/// Every variant is terminal for the operation that raised it: the engine
/// never retries internally and never clamps a bad request.
///
/// # Variants
/// - `InvalidDimension`: Requested dimensionality outside `1..=max`
/// - `CounterExhausted`: The 32-bit draw counter cannot advance further
/// - `BufferLength`: Output buffer does not match the dimensionality
/// - `InvalidParams`: Direction-number parameters violate the table contract
/// - `TableParse`: Malformed or invalid direction-number row
/// - `TableIo`: Direction-number file could not be read
///
/// # Examples
/// ```
/// use sobol_core::error::SobolError;
///
/// let err = SobolError::InvalidDimension { requested: 40, max: 37 };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid dimension: 40 requested, supported range is 1..=37"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SobolError {
    /// Dimensionality is zero or exceeds what the table covers.
    #[error("Invalid dimension: {requested} requested, supported range is 1..={max}")]
    InvalidDimension {
        /// The requested dimensionality
        requested: usize,
        /// Largest dimensionality the table supports
        max: usize,
    },

    /// The draw counter reached the limit of its fixed width.
    #[error("Counter exhausted: the sequence is limited to {limit} points")]
    CounterExhausted {
        /// Maximum number of points the counter can index
        limit: u32,
    },

    /// Output buffer length differs from the engine dimensionality.
    #[error("Buffer length mismatch: expected {expected}, got {actual}")]
    BufferLength {
        /// The engine dimensionality
        expected: usize,
        /// The supplied buffer length
        actual: usize,
    },

    /// Direction-number parameters violate the table contract.
    #[error("Invalid direction-number parameters (degree {degree}): {message}")]
    InvalidParams {
        /// Polynomial degree of the offending row
        degree: u32,
        /// Description of the violated constraint
        message: String,
    },

    /// A direction-number row failed to parse or validate.
    #[error("Direction table parse error at line {line}: {message}")]
    TableParse {
        /// 1-based line number in the source text
        line: usize,
        /// Description of the problem
        message: String,
    },

    /// A direction-number file could not be read.
    #[error("Direction table I/O error for {path}: {message}")]
    TableIo {
        /// Path that was being read
        path: String,
        /// Underlying I/O error message
        message: String,
    },
}

impl SobolError {
    /// Returns `true` for errors caused by caller configuration rather than
    /// by the sequence running out of points.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, SobolError::CounterExhausted { .. })
    }
}

/// Result alias for Sobol operations.
pub type Result<T> = std::result::Result<T, SobolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_display() {
        let err = SobolError::InvalidDimension {
            requested: 0,
            max: 37,
        };
        assert_eq!(
            format!("{}", err),
            "Invalid dimension: 0 requested, supported range is 1..=37"
        );
    }

    #[test]
    fn test_counter_exhausted_display() {
        let err = SobolError::CounterExhausted { limit: u32::MAX };
        assert_eq!(
            format!("{}", err),
            "Counter exhausted: the sequence is limited to 4294967295 points"
        );
    }

    #[test]
    fn test_table_parse_display() {
        let err = SobolError::TableParse {
            line: 7,
            message: "seed 4 is even".to_string(),
        };
        assert!(err.to_string().contains("line 7"));
        assert!(err.to_string().contains("seed 4 is even"));
    }

    #[test]
    fn test_is_configuration() {
        assert!(SobolError::InvalidDimension {
            requested: 99,
            max: 37
        }
        .is_configuration());
        assert!(SobolError::BufferLength {
            expected: 3,
            actual: 2
        }
        .is_configuration());
        assert!(!SobolError::CounterExhausted { limit: u32::MAX }.is_configuration());
    }

    #[test]
    fn test_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(SobolError::TableIo {
            path: "missing.txt".to_string(),
            message: "not found".to_string(),
        });
        assert!(err.to_string().contains("missing.txt"));
    }
}
