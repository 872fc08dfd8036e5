//! Shared analysis pipeline used by the `plot` and `summary` commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! data ingest -> curve file parse -> log10 fields -> normalized gradient
//! -> model grid -> half-max fields
//!
//! The commands can then focus on presentation (plot vs. text).

use crate::domain::{CurveConfig, DataSeries};
use crate::error::AppError;
use crate::io::{read_curve_file, read_series};
use crate::math::{arange, gradient, x_for_half_max_y};
use crate::models::ClgCurveModel;

/// All computed outputs of a single analysis run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub series: DataSeries,
    pub curves: ClgCurveModel,
    /// log10 of the applied fields that were usable (field > 0).
    pub log_field: Vec<f64>,
    /// Measured gradient `dM / dlog10(B)` divided by SIRM.
    pub gradient: Vec<f64>,
    pub grid: Vec<f64>,
    /// Normalized composite model on `grid`.
    pub model: Vec<f64>,
    /// Normalized components on `grid`, one curve each.
    pub components: Vec<Vec<f64>>,
    /// Half-max field (log10 mT) of the measured gradient.
    pub data_half_max: Option<f64>,
    /// Half-max field (log10 mT) of the model curve.
    pub model_half_max: Option<f64>,
}

/// Load both inputs named in `config` and run the analysis.
pub fn run_analysis(config: &CurveConfig) -> Result<Analysis, AppError> {
    let series = read_series(&config.data_path, config.columns, None)?;
    let curves = read_curve_file(&config.curves_path)?;
    analyse(series, curves, config)
}

/// Run the analysis on already-loaded inputs.
pub fn analyse(series: DataSeries, curves: ClgCurveModel, config: &CurveConfig) -> Result<Analysis, AppError> {
    if curves.sirm() == 0.0 || !curves.sirm().is_finite() {
        return Err(AppError::new(
            3,
            format!("Curve file '{}' has an unusable SIRM ({}).", curves.name(), curves.sirm()),
        ));
    }

    // The zero-field step (and any non-positive field) has no log10.
    let logged = series.log_field();
    let dropped = series.len() - logged.len();
    if dropped > 0 {
        log::debug!("dropped {dropped} row(s) with non-positive field");
    }
    let log_field = logged.x().to_vec();

    let gradient: Vec<f64> = gradient(logged.x(), logged.y())?
        .into_iter()
        .map(|g| g / curves.sirm())
        .collect();
    let data_half_max = x_for_half_max_y(&log_field, &gradient)?;

    let grid = arange(config.grid_min, config.grid_max, config.grid_step)?;
    let model = curves.evaluate_all(&grid, true);
    let components = curves.component_curves(&grid);
    let model_half_max = x_for_half_max_y(&grid, &model)?;

    Ok(Analysis {
        series,
        curves,
        log_field,
        gradient,
        grid,
        model,
        components,
        data_half_max,
        model_half_max,
    })
}
