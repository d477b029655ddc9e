//! # Quasi-Random Number Generation
//!
//! This module provides the Sobol low-discrepancy sequence used to seed
//! multi-dimensional parameter searches.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: No seed, no external entropy. Equal dimensionality
//!   and equal draw counts give bit-identical points.
//! - **Bounded state**: The engine keeps one 32-bit word per dimension; the
//!   full history lives in a caller-owned [`SequenceRecorder`].
//! - **Fail fast**: Unsupported dimensionality and counter exhaustion are
//!   returned as [`SobolError`](crate::error::SobolError) values.
//! - **Static dispatch**: `SobolEngine` is a concrete type; the
//!   [`LowDiscrepancySequence`] trait is there for generic callers.
//!
//! ## British English Convention
//!
//! All documentation in this module uses British English spelling conventions:
//! - "initialise" (not "initialize")
//! - "behaviour" (not "behavior")
//! - "serialise" (not "serialize")
//!
//! ## Module Structure
//!
//! - [`qmc`]: `LowDiscrepancySequence` trait and `SobolEngine`
//! - [`recorder`]: `SequenceRecorder` for full-history replay
//!
//! ## Usage Example
//!
//! ```rust
//! use sobol_core::direction::DirectionNumberTable;
//! use sobol_core::rng::{LowDiscrepancySequence, SobolEngine};
//!
//! let mut engine = SobolEngine::with_table(3, DirectionNumberTable::joe_kuo_head()).unwrap();
//!
//! // Allocating draw
//! let point = engine.draw().unwrap();
//! assert_eq!(point, vec![0.5, 0.5, 0.5]);
//!
//! // Zero-allocation draw
//! let mut buffer = [0.0; 3];
//! engine.draw_into(&mut buffer).unwrap();
//! assert_eq!(buffer, [0.75, 0.25, 0.25]);
//!
//! // Through the trait
//! engine.reset();
//! assert_eq!(engine.next_point().unwrap(), &[0.5, 0.5, 0.5]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Draw**: O(dimension), one XOR per coordinate
//! - **Skip / seek**: O(dimension × 32), independent of the distance

pub mod qmc;
pub mod recorder;

// Public re-exports
pub use qmc::{LowDiscrepancySequence, SobolEngine, MAX_POINTS};
pub use recorder::SequenceRecorder;
