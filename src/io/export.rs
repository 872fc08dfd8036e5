//! Export parsed curve parameters to CSV.
//!
//! One row per parameter file, meant for spreadsheets:
//!
//! ```text
//! Sample,M_abs,m_rel,a,Bhalf,DP[,M_abs,m_rel,a,Bhalf,DP...]
//! S1.txt,8.90,0.72,0.93,1.58,0.31,...
//! ```

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::AppError;
use crate::models::{ClgCurveModel, csv_header_for};

/// Write the header plus one line per model.
///
/// When models have different component counts, the header covers the largest.
pub fn write_models_csv<W: Write>(out: &mut W, models: &[ClgCurveModel]) -> io::Result<()> {
    let widest = models.iter().map(|m| m.components().len()).max().unwrap_or(0);
    writeln!(out, "{}", csv_header_for(widest))?;
    for m in models {
        writeln!(out, "{}", m.csv_line())?;
    }
    Ok(())
}

/// Write models CSV to `path`, or to stdout when no path is given.
pub fn export_models_csv(path: Option<&Path>, models: &[ClgCurveModel]) -> Result<(), AppError> {
    match path {
        Some(path) => {
            let mut file = File::create(path)
                .map_err(|e| AppError::new(4, format!("Failed to create export CSV '{}': {e}", path.display())))?;
            write_models_csv(&mut file, models)
                .map_err(|e| AppError::new(4, format!("Failed to write export CSV: {e}")))?;
            log::info!("wrote {} row(s) to '{}'", models.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_models_csv(&mut lock, models)
                .map_err(|e| AppError::new(4, format!("Failed to write CSV to stdout: {e}")))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GaussianComponent;

    #[test]
    fn header_covers_widest_model() {
        let one = ClgCurveModel::new("A", 1.0, vec![GaussianComponent::new(1.0, 1.0, 1.5, 0.2).unwrap()]);
        let two = ClgCurveModel::new(
            "B",
            1.0,
            vec![
                GaussianComponent::new(1.0, 0.5, 1.5, 0.2).unwrap(),
                GaussianComponent::new(1.0, 0.5, 2.5, 0.2).unwrap(),
            ],
        );

        let mut buf = Vec::new();
        write_models_csv(&mut buf, &[one, two]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Sample,M_abs,m_rel,a,Bhalf,DP,M_abs,m_rel,a,Bhalf,DP");
        assert_eq!(lines[1], "A,1.00,1.00,1.99,1.50,0.20");
        assert!(lines[2].starts_with("B,1.00,0.50,1.00,1.50,0.20,"));
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.csv");
        let m = ClgCurveModel::new("A", 1.0, vec![]);
        export_models_csv(Some(&path), &[m]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Sample,\nA,\n");
    }
}
