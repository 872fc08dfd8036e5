//! Whitespace-delimited IRM data ingest.
//!
//! Measurement files are loose text: a header or two, then rows of
//! `field  remanence  [anything else]`. The rules are:
//! - a row is kept only if the x-column token parses as a number
//! - a missing or non-numeric y-column token is logged and read as `0.0`
//! - extra columns are ignored
//! - everything else (headers, comments, blank lines) is skipped silently

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::domain::{ColumnSpec, DataSeries};
use crate::error::AppError;

/// Read a two-column series from `path`.
///
/// `name` overrides the display name; otherwise the file's base name is used.
pub fn read_series(path: &Path, columns: ColumnSpec, name: Option<String>) -> Result<DataSeries, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open data file '{}': {e}", path.display())))?;

    let mut rows = Vec::new();
    // Headers may be Latin-1 (`µ`); decode lossily and let them skip as text.
    for (idx, line) in BufReader::new(file).split(b'\n').enumerate() {
        let line = line
            .map_err(|e| AppError::new(2, format!("Failed to read data file '{}': {e}", path.display())))?;
        let line = String::from_utf8_lossy(&line);
        if let Some(row) = parse_line(&line, idx + 1, columns) {
            rows.push(row);
        }
    }

    log::info!("read {} rows from '{}'", rows.len(), path.display());
    Ok(DataSeries::from_rows(rows, name, path))
}

fn parse_line(line: &str, line_no: usize, columns: ColumnSpec) -> Option<(f64, f64)> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    let Some(x) = parts.get(columns.x).and_then(|s| s.parse::<f64>().ok()) else {
        log::debug!("line {line_no}: no numeric value in column {}, skipped", columns.x);
        return None;
    };

    let y = match parts.get(columns.y).map(|s| s.parse::<f64>()) {
        Some(Ok(y)) => y,
        Some(Err(_)) => {
            log::warn!("line {line_no}: non-numeric data at {x}, using 0.0");
            0.0
        }
        None => {
            log::warn!("line {line_no}: missing data at {x}, using 0.0");
            0.0
        }
    };

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn reads_rows_in_file_order_skipping_non_numeric_lines() {
        let f = write_temp(
            "Field(mT)  M(Am2)\n\n# comment\n10 1.5e-5 extra\n20\t3.0e-5\n5 0.5e-5\n",
        );
        let s = read_series(f.path(), ColumnSpec::default(), None).unwrap();
        assert_eq!(s.x(), &[10.0, 20.0, 5.0]);
        assert_eq!(s.y(), &[1.5e-5, 3.0e-5, 0.5e-5]);
    }

    #[test]
    fn latin1_header_is_skipped() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"Field(mT) M(\xb5Am2)\r\n10 1.0\r\n20 2.0\r\n").unwrap();
        let s = read_series(f.path(), ColumnSpec::default(), None).unwrap();
        assert_eq!(s.x(), &[10.0, 20.0]);
        assert_eq!(s.y(), &[1.0, 2.0]);
    }

    #[test]
    fn missing_y_becomes_zero() {
        let f = write_temp("1 2\n3\n4 n/a\n5 6\n");
        let s = read_series(f.path(), ColumnSpec::default(), None).unwrap();
        assert_eq!(s.x(), &[1.0, 3.0, 4.0, 5.0]);
        assert_eq!(s.y(), &[2.0, 0.0, 0.0, 6.0]);
    }

    #[test]
    fn honours_column_selection() {
        let f = write_temp("step field moment\n1 10 0.1\n2 20 0.2\n");
        let columns = ColumnSpec { x: 1, y: 2 };
        let s = read_series(f.path(), columns, Some("S7".to_string())).unwrap();
        assert_eq!(s.x(), &[10.0, 20.0]);
        assert_eq!(s.y(), &[0.1, 0.2]);
        assert_eq!(s.name(), Some("S7"));
    }

    #[test]
    fn name_defaults_to_base_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("S3.irm");
        std::fs::write(&path, "1 1\n").unwrap();
        let s = read_series(&path, ColumnSpec::default(), None).unwrap();
        assert_eq!(s.name(), Some("S3.irm"));
    }

    #[test]
    fn empty_file_is_an_empty_series() {
        let f = write_temp("header only\n");
        let s = read_series(f.path(), ColumnSpec::default(), None).unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_series(Path::new("/nonexistent/irm.dat"), ColumnSpec::default(), None).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("/nonexistent/irm.dat"));
    }
}
