//! Reader and writer for the Joe & Kuo parameter file format.
//!
//! The published files (`new-joe-kuo-6.21201` and friends) are plain text:
//!
//! ```text
//! d       s       a       m_i
//! 2       1       0       1
//! 3       2       1       1 3
//! 4       3       1       1 3 1
//! ```
//!
//! One optional header line, then one whitespace-separated row per dimension
//! with the file dimension `d`, degree `s`, coefficients `a` and the `s`
//! initial direction numbers. Rows must start at `d = 2` and be contiguous.

use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use super::table::{DirectionNumberParams, DirectionNumberTable};
use crate::error::{Result, SobolError};

/// File dimension of the first data row.
const FIRST_FILE_DIMENSION: u32 = 2;

impl DirectionNumberTable {
    /// Parses the Joe & Kuo text format.
    ///
    /// Blank lines are ignored. A first non-blank line whose leading token is
    /// not numeric is treated as the header.
    ///
    /// # Errors
    ///
    /// Returns `SobolError::TableParse` with the 1-based line number when a
    /// token is not an unsigned integer, a row is truncated or has trailing
    /// values, the `d` column is not contiguous from 2, or the row violates
    /// the parameter contract.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sobol_core::direction::DirectionNumberTable;
    ///
    /// let text = "d s a m_i\n2 1 0 1\n3 2 1 1 3\n";
    /// let table = DirectionNumberTable::parse_joe_kuo(text).unwrap();
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.max_dimension(), 3);
    /// ```
    pub fn parse_joe_kuo(text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        let mut expected_d = FIRST_FILE_DIMENSION;
        let mut seen_content = false;

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            let mut tokens = line.split_whitespace().peekable();
            let Some(&first) = tokens.peek() else {
                continue;
            };

            if !seen_content {
                seen_content = true;
                if first.parse::<u32>().is_err() {
                    continue;
                }
            }

            let mut next = |name: &str| -> Result<u32> {
                let token = tokens.next().ok_or_else(|| SobolError::TableParse {
                    line: line_no,
                    message: format!("missing {}", name),
                })?;
                token.parse::<u32>().map_err(|_| SobolError::TableParse {
                    line: line_no,
                    message: format!("{} is not an unsigned integer: {:?}", name, token),
                })
            };

            let d = next("d")?;
            if d != expected_d {
                return Err(SobolError::TableParse {
                    line: line_no,
                    message: format!("expected d = {}, found d = {}", expected_d, d),
                });
            }
            let degree = next("s")?;
            let coefficients = next("a")?;
            let seeds = (1..=degree)
                .map(|k| next(&format!("m_{}", k)))
                .collect::<Result<Vec<u32>>>()?;
            if let Some(extra) = tokens.next() {
                return Err(SobolError::TableParse {
                    line: line_no,
                    message: format!("unexpected trailing value {:?}", extra),
                });
            }

            let params = DirectionNumberParams::new(degree, coefficients, seeds).map_err(|e| {
                SobolError::TableParse {
                    line: line_no,
                    message: e.to_string(),
                }
            })?;
            rows.push(params);
            expected_d += 1;
        }

        debug!(rows = rows.len(), "Parsed Joe & Kuo direction-number table");
        Ok(Self::from_rows(rows))
    }

    /// Reads and parses a Joe & Kuo parameter file.
    ///
    /// # Errors
    ///
    /// Returns `SobolError::TableIo` if the file cannot be read, otherwise
    /// any error of [`DirectionNumberTable::parse_joe_kuo`].
    pub fn load_joe_kuo(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SobolError::TableIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse_joe_kuo(&text)
    }

    /// Renders every data row (skipped ones included) in the Joe & Kuo format,
    /// header first. The row offset is not part of the format.
    pub fn to_joe_kuo(&self) -> String {
        let mut out = String::from("d\ts\ta\tm_i\n");
        for (d, row) in (FIRST_FILE_DIMENSION..).zip(self.rows()) {
            out.push_str(&format!("{}\t{}\t{}\t", d, row.degree(), row.coefficients()));
            let seeds: Vec<String> = row.seeds().iter().map(u32::to_string).collect();
            out.push_str(&seeds.join(" "));
            out.push('\n');
        }
        out
    }
}

impl FromStr for DirectionNumberTable {
    type Err = SobolError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_joe_kuo(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "d       s       a       m_i
2       1       0       1
3       2       1       1 3
4       3       1       1 3 1
";

    #[test]
    fn test_parse_with_header() {
        let table = DirectionNumberTable::parse_joe_kuo(SAMPLE).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.row_offset(), 0);
        assert_eq!(table.params(3).unwrap().seeds(), &[1, 3, 1]);
    }

    #[test]
    fn test_parse_without_header_and_blank_lines() {
        let text = "\n2 1 0 1\n\n3 2 1 1 3\n";
        let table: DirectionNumberTable = text.parse().unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_parse_empty() {
        let table = DirectionNumberTable::parse_joe_kuo("").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.max_dimension(), 1);
    }

    #[test]
    fn test_to_joe_kuo_layout() {
        let table = DirectionNumberTable::parse_joe_kuo(SAMPLE).unwrap();
        assert_eq!(
            table.to_joe_kuo(),
            "d\ts\ta\tm_i\n2\t1\t0\t1\n3\t2\t1\t1 3\n4\t3\t1\t1 3 1\n"
        );
    }

    #[test]
    fn test_head_round_trips_through_text() {
        let head = DirectionNumberTable::joe_kuo_head();
        let parsed = DirectionNumberTable::parse_joe_kuo(&head.to_joe_kuo()).unwrap();
        assert_eq!(&parsed, head);
    }

    #[test]
    fn test_rejects_non_numeric_token() {
        let err = DirectionNumberTable::parse_joe_kuo("d s a m_i\n2 1 0 x\n").unwrap_err();
        assert_eq!(
            err,
            SobolError::TableParse {
                line: 2,
                message: "m_1 is not an unsigned integer: \"x\"".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_truncated_row() {
        let err = DirectionNumberTable::parse_joe_kuo("2 1 0 1\n3 2 1 1\n").unwrap_err();
        assert_eq!(
            err,
            SobolError::TableParse {
                line: 2,
                message: "missing m_2".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_trailing_values() {
        let err = DirectionNumberTable::parse_joe_kuo("2 1 0 1 1\n").unwrap_err();
        assert!(matches!(err, SobolError::TableParse { line: 1, .. }));
    }

    #[test]
    fn test_rejects_gap_in_dimensions() {
        let err = DirectionNumberTable::parse_joe_kuo("2 1 0 1\n4 3 1 1 3 1\n").unwrap_err();
        assert_eq!(
            err,
            SobolError::TableParse {
                line: 2,
                message: "expected d = 3, found d = 4".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_invalid_params() {
        // m_2 = 5 is not below 2^2.
        let err = DirectionNumberTable::parse_joe_kuo("2 1 0 1\n3 2 1 1 5\n").unwrap_err();
        match err {
            SobolError::TableParse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("m_2 = 5"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = DirectionNumberTable::load_joe_kuo("/nonexistent/new-joe-kuo").unwrap_err();
        assert!(matches!(err, SobolError::TableIo { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("sobol-core-table-{}.txt", std::process::id()));
        std::fs::write(&path, SAMPLE).unwrap();
        let table = DirectionNumberTable::load_joe_kuo(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(table.len(), 3);
    }
}
