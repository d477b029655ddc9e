//! # sobol_core: Sobol Quasi-Random Sequence Engine
//!
//! ## Layer Role
//!
//! sobol_core is the kernel of the workspace, providing:
//! - Direction-number tables: the published Joe & Kuo parameter file
//!   (embedded at build time when supplied, read at the historical 1000-row
//!   offset), its transcribed leading rows and a loader (`direction`)
//! - The GF(2) recurrence that expands a table into a direction-number matrix
//!   (`direction::matrix`)
//! - The stateful Gray-code engine emitting points in `[0, 1)^d` (`rng`)
//! - Error types: `SobolError` (`error`)
//!
//! ## Zero Dependency Principle
//!
//! The kernel has no dependencies on other workspace crates and only minimal
//! external dependencies:
//! - thiserror: Structured error types
//! - tracing: Diagnostic events on construction and counter exhaustion
//! - serde: Serialisation support for tables (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use sobol_core::direction::DirectionNumberTable;
//! use sobol_core::rng::SobolEngine;
//!
//! // Default table
//! let mut engine = SobolEngine::new(3).unwrap();
//! let first = engine.draw().unwrap();
//! assert_eq!(first, vec![0.5, 0.5, 0.5]);
//!
//! // Leading rows of the published file at offset 0
//! let mut engine = SobolEngine::with_table(3, DirectionNumberTable::joe_kuo_head()).unwrap();
//! engine.skip(1).unwrap();
//! let second = engine.draw().unwrap();
//! assert_eq!(second, vec![0.75, 0.25, 0.25]);
//! assert_eq!(engine.count(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `DirectionNumberParams` and
//!   `DirectionNumberTable`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod direction;
pub mod error;
pub mod rng;

pub use direction::{DirectionNumberMatrix, DirectionNumberParams, DirectionNumberTable};
pub use error::{Result, SobolError};
pub use rng::{LowDiscrepancySequence, SequenceRecorder, SobolEngine};
