//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod draw;

use sobol_core::DirectionNumberTable;
use tracing::info;

use crate::config::TableConfig;
use crate::Result;

/// Resolve the direction-number table named by the configuration.
///
/// Reads the Joe & Kuo file at `path` when set (row offset 0), otherwise
/// clones the built-in table (its own offset). A configured row offset
/// replaces either.
pub fn load_table(config: &TableConfig) -> Result<DirectionNumberTable> {
    let table = match &config.path {
        Some(path) => {
            info!("Loading direction numbers from {}", path.display());
            DirectionNumberTable::load_joe_kuo(path)?
        }
        None => DirectionNumberTable::builtin().clone(),
    };
    Ok(match config.row_offset {
        Some(offset) => table.with_row_offset(offset),
        None => table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_builtin_keeps_its_offset() {
        let table = load_table(&TableConfig::default()).unwrap();
        assert_eq!(&table, DirectionNumberTable::builtin());
    }

    #[test]
    fn test_load_builtin_with_offset() {
        let builtin = DirectionNumberTable::builtin();
        let offset = builtin.row_offset() + 2;
        let table = load_table(&TableConfig {
            path: None,
            row_offset: Some(offset),
        })
        .unwrap();
        assert_eq!(table.row_offset(), offset);
        assert_eq!(table.max_dimension(), builtin.max_dimension() - 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_table(&TableConfig {
            path: Some(PathBuf::from("/nonexistent/joe-kuo.txt")),
            row_offset: None,
        })
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/joe-kuo.txt"));
    }
}
