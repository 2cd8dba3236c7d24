//! CSV batch conversion of point records

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::projection::{Coordinate, Transformer};

/// Marker written in place of values for rows that fail validation
pub const INVALID: &str = "INVALID";

/// One input row: `longitude,latitude[,name]`
#[derive(Debug, Deserialize)]
pub struct CsvPoint {
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default)]
    pub name: Option<String>,
}

/// Counts from one conversion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecordSummary {
    pub total: usize,
    pub converted: usize,
    pub skipped: usize,
}

/// Reads point rows from `input`, converts them, and writes them to `output`.
///
/// Rows that cannot be parsed are dropped. Rows outside the geodetic range are
/// kept with `INVALID` values. Both count as skipped.
pub fn convert_records<R: Read, W: Write>(
    input: R,
    output: W,
    transformer: &Transformer,
) -> Result<RecordSummary> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(input);

    let mut summary = RecordSummary::default();
    let mut points: Vec<CsvPoint> = Vec::new();

    for (line, result) in reader.deserialize::<CsvPoint>().enumerate() {
        summary.total += 1;
        match result {
            Ok(point) => points.push(point),
            Err(e) => {
                warn!(row = line + 1, error = %e, "skipping unreadable row");
                summary.skipped += 1;
            }
        }
    }

    let has_names = points.iter().any(|p| p.name.is_some());
    let mut writer = csv::Writer::from_writer(output);

    if has_names {
        writer.write_record(["longitude", "latitude", "name"])?;
    } else {
        writer.write_record(["longitude", "latitude"])?;
    }

    let coords: Vec<Coordinate> = points
        .iter()
        .map(|p| Coordinate::new(p.longitude, p.latitude))
        .collect();
    let converted = transformer.transform_many(&coords);

    for ((point, source), target) in points.iter().zip(&coords).zip(&converted) {
        let (lng, lat) = match source.validate() {
            Ok(()) => {
                summary.converted += 1;
                (target.lng.to_string(), target.lat.to_string())
            }
            Err(e) => {
                warn!(error = %e, "row outside geodetic range");
                summary.skipped += 1;
                (INVALID.to_string(), INVALID.to_string())
            }
        };

        if has_names {
            let name = point.name.as_deref().unwrap_or("");
            writer.write_record([lng.as_str(), lat.as_str(), name])?;
        } else {
            writer.write_record([lng.as_str(), lat.as_str()])?;
        }
    }

    writer.flush()?;

    debug!(
        total = summary.total,
        converted = summary.converted,
        skipped = summary.skipped,
        from = %transformer.from_system(),
        to = %transformer.to_system(),
        "converted records"
    );

    Ok(summary)
}

/// Converts a CSV file into another CSV file
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    transformer: &Transformer,
) -> Result<RecordSummary> {
    let input = File::open(input_path)?;
    let output = File::create(output_path)?;
    convert_records(input, output, transformer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::wgs84_to_gcj02;
    use crate::types::CoordinateSystem;
    use std::io::Write as _;

    fn wgs84_to_gcj() -> Transformer {
        Transformer::new(CoordinateSystem::Wgs84, CoordinateSystem::Gcj02).unwrap()
    }

    #[test]
    fn test_convert_records_with_names() {
        let input = "longitude,latitude,name\n116.4074,39.9042,Beijing\n121.4737,31.2304,Shanghai\n";
        let mut output = Vec::new();

        let summary = convert_records(input.as_bytes(), &mut output, &wgs84_to_gcj()).unwrap();
        assert_eq!(summary, RecordSummary { total: 2, converted: 2, skipped: 0 });

        let text = String::from_utf8(output).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("longitude,latitude,name"));

        let (lng, lat) = wgs84_to_gcj02(116.4074, 39.9042);
        assert_eq!(lines.next(), Some(format!("{},{},Beijing", lng, lat).as_str()));
    }

    #[test]
    fn test_convert_records_without_names() {
        let input = "longitude,latitude\n2.3522,48.8566\n";
        let mut output = Vec::new();

        convert_records(input.as_bytes(), &mut output, &wgs84_to_gcj()).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "longitude,latitude\n2.3522,48.8566\n");
    }

    #[test]
    fn test_bad_rows_are_skipped() {
        let input = "longitude,latitude\nabc,39.9\n116.4,95.0\n116.4074,39.9042\n";
        let mut output = Vec::new();

        let summary = convert_records(input.as_bytes(), &mut output, &wgs84_to_gcj()).unwrap();
        assert_eq!(summary, RecordSummary { total: 3, converted: 1, skipped: 2 });

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("INVALID,INVALID"));
    }

    #[test]
    fn test_convert_file() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        writeln!(input, "longitude,latitude").unwrap();
        writeln!(input, "121.4737,31.2304").unwrap();
        input.flush().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("out.csv");

        let summary = convert_file(input.path(), &output_path, &wgs84_to_gcj()).unwrap();
        assert_eq!(summary.converted, 1);

        let text = std::fs::read_to_string(&output_path).unwrap();
        let (lng, lat) = wgs84_to_gcj02(121.4737, 31.2304);
        assert!(text.contains(&format!("{},{}", lng, lat)));
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = convert_file(dir.path().join("missing.csv"), dir.path().join("out.csv"), &wgs84_to_gcj());
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
