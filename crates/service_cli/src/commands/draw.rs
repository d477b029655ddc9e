//! Draw command implementation
//!
//! Generates Sobol points and prints them as a table, CSV or JSON.

use serde::Serialize;
use sobol_core::{DirectionNumberTable, SobolEngine};
use tracing::info;

use crate::config::{OutputFormat, SamplerConfig};
use crate::Result;

/// One emitted point with its 1-based sequence index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointRecord {
    /// Number of points drawn when this one was emitted
    pub index: u32,
    /// Coordinates in [0, 1)
    pub coordinates: Vec<f64>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    dimension: usize,
    skip: u32,
    points: &'a [PointRecord],
}

/// Run the draw command
pub fn run(config: &SamplerConfig, table: &DirectionNumberTable, skip: u32) -> Result<()> {
    info!("Starting draw...");
    info!("  Dimension: {}", config.dimension);
    info!("  Count: {}", config.count);
    info!("  Skip: {}", skip);
    info!("  Output format: {}", config.format);

    let mut engine = SobolEngine::with_table(config.dimension, table)?;
    engine.skip(skip)?;
    let points = generate(&mut engine, config.count)?;

    let rendered = render(&points, config.dimension, skip, config.format)?;
    print!("{}", rendered);

    info!("Draw complete");
    Ok(())
}

/// Draw `count` points from `engine`.
pub fn generate(engine: &mut SobolEngine, count: usize) -> Result<Vec<PointRecord>> {
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let coordinates = engine.draw()?;
        points.push(PointRecord {
            index: engine.count(),
            coordinates,
        });
    }
    Ok(points)
}

/// Render points in the requested format.
pub fn render(
    points: &[PointRecord],
    dimension: usize,
    skip: u32,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(points, dimension)),
        OutputFormat::Csv => render_csv(points, dimension),
        OutputFormat::Json => render_json(points, dimension, skip),
    }
}

fn render_table(points: &[PointRecord], dimension: usize) -> String {
    let mut out = format!("{:>10}", "index");
    for j in 0..dimension {
        out.push_str(&format!(" {:>12}", format!("x{}", j)));
    }
    out.push('\n');
    out.push_str(&"-".repeat(10 + 13 * dimension));
    out.push('\n');

    for point in points {
        out.push_str(&format!("{:>10}", point.index));
        for x in &point.coordinates {
            out.push_str(&format!(" {:>12.10}", x));
        }
        out.push('\n');
    }
    out
}

fn render_csv(points: &[PointRecord], dimension: usize) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let header =
        std::iter::once("index".to_string()).chain((0..dimension).map(|j| format!("x{}", j)));
    writer.write_record(header)?;

    for point in points {
        let record = std::iter::once(point.index.to_string())
            .chain(point.coordinates.iter().map(f64::to_string));
        writer.write_record(record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn render_json(points: &[PointRecord], dimension: usize, skip: u32) -> Result<String> {
    let output = JsonOutput {
        dimension,
        skip,
        points,
    };
    let mut json = serde_json::to_string_pretty(&output)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn head_engine(dimension: usize) -> SobolEngine {
        SobolEngine::with_table(dimension, DirectionNumberTable::joe_kuo_head()).unwrap()
    }

    fn first_points(count: usize) -> Vec<PointRecord> {
        let mut engine = head_engine(2);
        generate(&mut engine, count).unwrap()
    }

    #[test]
    fn test_generate_indices() {
        let points = first_points(3);
        let indices: Vec<u32> = points.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_relative_eq!(points[1].coordinates[0], 0.75);
        assert_relative_eq!(points[1].coordinates[1], 0.25);
    }

    #[test]
    fn test_generate_after_skip() {
        let mut engine = head_engine(2);
        engine.skip(2).unwrap();
        let points = generate(&mut engine, 1).unwrap();
        assert_eq!(points[0].index, 3);
        assert_eq!(points[0].coordinates, vec![0.25, 0.75]);
    }

    #[test]
    fn test_render_csv() {
        let csv = render(&first_points(2), 2, 0, OutputFormat::Csv).unwrap();
        assert_eq!(csv, "index,x0,x1\n1,0.5,0.5\n2,0.75,0.25\n");
    }

    #[test]
    fn test_render_csv_reads_back() {
        let points = first_points(4);
        let rendered = render(&points, 2, 0, OutputFormat::Csv).unwrap();

        let mut reader = csv::Reader::from_reader(rendered.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["index", "x0", "x1"]);

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), points.len());
        for (record, point) in records.iter().zip(&points) {
            assert_eq!(record[0].parse::<u32>().unwrap(), point.index);
            for (field, x) in record.iter().skip(1).zip(&point.coordinates) {
                assert_relative_eq!(field.parse::<f64>().unwrap(), *x);
            }
        }
    }

    #[test]
    fn test_render_table() {
        let table = render(&first_points(2), 2, 0, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("x0") && lines[0].contains("x1"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].contains("0.5000000000"));
        assert!(lines[3].trim_start().starts_with('2'));
    }

    #[test]
    fn test_render_json() {
        let json = render(&first_points(2), 2, 0, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["dimension"], 2);
        assert_eq!(value["skip"], 0);
        assert_eq!(value["points"][1]["index"], 2);
        assert_eq!(value["points"][1]["coordinates"][0], 0.75);
    }

    #[test]
    fn test_run_rejects_unsupported_dimension() {
        let config = SamplerConfig {
            dimension: DirectionNumberTable::builtin().max_dimension() + 1,
            ..Default::default()
        };
        assert!(run(&config, DirectionNumberTable::builtin(), 0).is_err());
    }
}
