//! Check command implementation
//!
//! Reports the coverage of the active direction-number table and verifies
//! that an engine of the largest supported dimensionality builds and draws.

use sobol_core::{DirectionNumberTable, SobolEngine};
use tracing::info;

use crate::Result;

/// Summary of a table check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// Data rows held, skipped ones included
    pub rows: usize,
    /// Data rows skipped before dimension 1's row
    pub row_offset: usize,
    /// Largest supported dimensionality
    pub max_dimension: usize,
    /// First point of the largest engine
    pub first_point: Vec<f64>,
}

/// Run the check command
pub fn run(table: &DirectionNumberTable) -> Result<()> {
    info!("Checking direction-number table...");
    let report = inspect(table)?;

    println!("Direction-number table");
    println!("  Rows:          {}", report.rows);
    println!("  Row offset:    {}", report.row_offset);
    println!("  Max dimension: {}", report.max_dimension);
    println!(
        "  Engine check:  OK (first point of {} coordinates in [0, 1))",
        report.first_point.len()
    );

    info!("Check complete");
    Ok(())
}

/// Build and exercise an engine of the largest dimensionality `table`
/// supports.
pub fn inspect(table: &DirectionNumberTable) -> Result<CheckReport> {
    let max_dimension = table.max_dimension();
    let mut engine = SobolEngine::with_table(max_dimension, table)?;
    let first_point = engine.draw()?;

    Ok(CheckReport {
        rows: table.len(),
        row_offset: table.row_offset(),
        max_dimension,
        first_point,
    })
}
