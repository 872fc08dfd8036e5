//! Write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a parsed model:
//! - SIRM + per-component parameters
//! - the model's half-max field
//! - a precomputed grid (composite, acquisition, components) for quick plotting
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use chrono::Local;

use crate::domain::{CurveFile, CurveGrid};
use crate::error::AppError;
use crate::math::x_for_half_max_y;
use crate::models::ClgCurveModel;

/// Evaluate `model` over `grid` and bundle the result for export.
pub fn build_curve_file(model: &ClgCurveModel, grid: &[f64]) -> Result<CurveFile, AppError> {
    let curve = model.evaluate_all(grid, true);
    let half_max_log_field = x_for_half_max_y(grid, &curve)?;

    Ok(CurveFile {
        tool: "clg".to_string(),
        generated: Local::now().to_rfc3339(),
        name: model.name().to_string(),
        sirm: model.sirm(),
        components: model.components().iter().map(|c| c.params()).collect(),
        half_max_log_field,
        grid: CurveGrid {
            log_field: grid.to_vec(),
            acquisition: grid.iter().map(|&x| model.acquisition(x, true)).collect(),
            components: model.component_curves(grid),
            model: curve,
        },
    })
}

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, curve: &CurveFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, curve)
        .map_err(|e| AppError::new(4, format!("Failed to write curve JSON: {e}")))?;

    log::info!("wrote curve grid to '{}'", path.display());
    Ok(())
}
