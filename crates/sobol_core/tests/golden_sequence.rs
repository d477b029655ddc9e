//! Integration tests for end-to-end Sobol generation.
//!
//! Covers the reference sequence, tables loaded from the Joe & Kuo text
//! format, and the historical 1000-row offset.

use approx::assert_abs_diff_eq;
use sobol_core::direction::{
    DirectionNumberParams, HISTORICAL_ROW_SKIP, PUBLISHED_TABLE_EMBEDDED,
};
use sobol_core::{DirectionNumberTable, SequenceRecorder, SobolEngine, SobolError};

/// The ten points of a three-dimensional engine whose rows for dimension
/// indices 1 and 2 are the published `d = 2` and `d = 3` rows.
const REFERENCE_3D: [[f64; 3]; 10] = [
    [0.5, 0.5, 0.5],
    [0.75, 0.25, 0.25],
    [0.25, 0.75, 0.75],
    [0.375, 0.375, 0.625],
    [0.875, 0.875, 0.125],
    [0.625, 0.125, 0.875],
    [0.125, 0.625, 0.375],
    [0.1875, 0.3125, 0.9375],
    [0.6875, 0.8125, 0.4375],
    [0.9375, 0.0625, 0.6875],
];

fn head() -> &'static DirectionNumberTable {
    DirectionNumberTable::joe_kuo_head()
}

/// Builds a parameter file with `padding` filler rows from `d = 2`, followed
/// by the leading published rows relabelled from `d = padding + 2`.
fn padded_table_text(padding: usize) -> String {
    let text = head().to_joe_kuo();
    let mut lines = text.lines();
    let header = lines.next().unwrap_or_default();

    let mut padded = format!("{}\n", header);
    for d in 2..(2 + padding) {
        padded.push_str(&format!("{}\t1\t0\t1\n", d));
    }
    for (d, line) in ((2 + padding)..).zip(lines) {
        let rest = line.split_once('\t').map(|(_, rest)| rest).unwrap_or(line);
        padded.push_str(&format!("{}\t{}\n", d, rest));
    }
    padded
}

/// Reads the row labelled `d` from Joe & Kuo text.
fn row_labelled(text: &str, d: usize) -> Option<DirectionNumberParams> {
    text.lines().skip(1).find_map(|line| {
        let mut fields = line.split_whitespace().map(|t| t.parse::<u32>().ok());
        if fields.next()?? as usize != d {
            return None;
        }
        let degree = fields.next()??;
        let coefficients = fields.next()??;
        let seeds = fields.collect::<Option<Vec<u32>>>()?;
        DirectionNumberParams::new(degree, coefficients, seeds).ok()
    })
}

#[test]
fn test_reference_sequence() {
    let mut engine = SobolEngine::with_table(3, head()).unwrap();
    for expected in &REFERENCE_3D {
        let point = engine.draw().unwrap();
        for (&actual, &wanted) in point.iter().zip(expected) {
            assert_abs_diff_eq!(actual, wanted, epsilon = 0.0);
        }
    }
}

#[test]
fn test_recorder_replays_reference_sequence() {
    let mut engine = SobolEngine::with_table(3, head()).unwrap();
    let mut recorder = SequenceRecorder::with_capacity(3, REFERENCE_3D.len());
    for _ in 0..REFERENCE_3D.len() {
        recorder.draw_from(&mut engine).unwrap();
    }

    let replayed: Vec<Vec<f64>> = recorder.points().collect();
    let expected: Vec<Vec<f64>> = REFERENCE_3D.iter().map(|p| p.to_vec()).collect();
    assert_eq!(replayed, expected);
    assert_eq!(recorder.point(0).unwrap(), vec![0.0; 3]);
}

#[test]
fn test_text_round_trip_preserves_sequence() {
    let text = head().to_joe_kuo();
    let parsed: DirectionNumberTable = text.parse().unwrap();
    assert_eq!(&parsed, head());

    let mut from_builtin = SobolEngine::with_table(37, head()).unwrap();
    let mut from_text = SobolEngine::with_table(37, &parsed).unwrap();
    for _ in 0..256 {
        assert_eq!(from_builtin.draw().unwrap(), from_text.draw().unwrap());
    }
}

#[test]
fn test_historical_skip_reads_rows_1002_and_1003() {
    let text = padded_table_text(HISTORICAL_ROW_SKIP);
    let table = DirectionNumberTable::parse_joe_kuo(&text)
        .unwrap()
        .with_row_offset(HISTORICAL_ROW_SKIP);

    // Dimension indices 1 and 2 take the rows labelled d = 1002 and 1003,
    // which carry the published d = 2 and d = 3 parameters.
    assert_eq!(table.params(1), row_labelled(&text, 1002).as_ref());
    assert_eq!(table.params(2), row_labelled(&text, 1003).as_ref());
    assert_eq!(table.params(1), head().params(1));
    assert_eq!(table.params(2), head().params(2));

    let mut engine = SobolEngine::with_table(3, &table).unwrap();
    for expected in &REFERENCE_3D {
        assert_eq!(engine.draw().unwrap(), expected.to_vec());
    }
}

#[test]
fn test_default_engine_reads_published_rows() {
    let builtin = DirectionNumberTable::builtin();
    let engine = SobolEngine::new(3).unwrap();

    if PUBLISHED_TABLE_EMBEDDED {
        let text = builtin.to_joe_kuo();
        assert_eq!(builtin.row_offset(), HISTORICAL_ROW_SKIP);
        assert_eq!(builtin.params(1), row_labelled(&text, 1002).as_ref());
        assert_eq!(builtin.params(2), row_labelled(&text, 1003).as_ref());
    } else {
        assert_eq!(builtin, head());
        assert_eq!(builtin.params(1), row_labelled(&head().to_joe_kuo(), 2).as_ref());
    }

    let expected = SobolEngine::with_table(3, builtin).unwrap();
    assert_eq!(engine.matrix(), expected.matrix());
}

#[test]
fn test_short_table_with_historical_skip() {
    // A table with no rows past the offset supports dimension 1 only.
    let table = head().clone().with_row_offset(HISTORICAL_ROW_SKIP);
    assert!(SobolEngine::with_table(1, &table).is_ok());
    assert_eq!(
        SobolEngine::with_table(2, &table).unwrap_err(),
        SobolError::InvalidDimension {
            requested: 2,
            max: 1
        }
    );
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!(
        "sobol_core_golden_{}.txt",
        std::process::id()
    ));
    std::fs::write(&path, head().to_joe_kuo()).unwrap();

    let table = DirectionNumberTable::load_joe_kuo(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let mut engine = SobolEngine::with_table(3, &table).unwrap();
    assert_eq!(engine.draw().unwrap(), vec![0.5, 0.5, 0.5]);
}

#[test]
fn test_seek_matches_reference() {
    let mut engine = SobolEngine::with_table(3, head()).unwrap();
    for (n, expected) in REFERENCE_3D.iter().enumerate() {
        engine.seek(n as u32);
        assert_eq!(engine.draw().unwrap(), expected.to_vec());
    }
}
