//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - built from flat files in `io`
//! - consumed by the numeric routines in `math`
//! - exported to JSON for downstream plotting

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ComputeError;
use crate::math::{gradient, x_for_half_max_y};

/// Zero-based column indices for the field (x) and magnetization (y) values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub x: usize,
    pub y: usize,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self { x: 0, y: 1 }
    }
}

/// An ordered pair of equal-length sequences, e.g. applied field vs. remanence.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSeries {
    x: Vec<f64>,
    y: Vec<f64>,
    name: Option<String>,
}

impl DataSeries {
    /// Build a series from literal arrays.
    pub fn new(x: Vec<f64>, y: Vec<f64>, name: Option<String>) -> Result<Self, ComputeError> {
        if x.len() != y.len() {
            return Err(ComputeError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        Ok(Self { x, y, name })
    }

    /// Build a series read from `source`, naming it after the file unless a name is given.
    pub(crate) fn from_rows(rows: Vec<(f64, f64)>, name: Option<String>, source: &Path) -> Self {
        let (x, y) = rows.into_iter().unzip();
        let name = name.or_else(|| base_name(source));
        Self { x, y, name }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Centered-difference `dy/dx` at every sample.
    pub fn gradient(&self) -> Result<Vec<f64>, ComputeError> {
        gradient(&self.x, &self.y)
    }

    /// First `x` at which `y` reaches half its maximum; `Ok(None)` when it never does.
    pub fn half_max_x(&self) -> Result<Option<f64>, ComputeError> {
        x_for_half_max_y(&self.x, &self.y)
    }

    /// Rows with a positive field, with the field replaced by its log10.
    pub fn log_field(&self) -> DataSeries {
        let (x, y) = self
            .x
            .iter()
            .zip(&self.y)
            .filter(|(b, _)| **b > 0.0)
            .map(|(b, m)| (b.log10(), *m))
            .unzip();
        DataSeries {
            x,
            y,
            name: self.name.clone(),
        }
    }
}

/// The file name without its directory, used as a display name.
pub fn base_name(path: &Path) -> Option<String> {
    path.file_name().map(|s| s.to_string_lossy().into_owned())
}

/// Resolved run configuration for a single `clg` invocation.
///
/// This is derived from CLI flags (plus `.env` / environment fallbacks).
#[derive(Debug, Clone)]
pub struct CurveConfig {
    pub data_path: PathBuf,
    pub curves_path: PathBuf,
    pub columns: ColumnSpec,

    /// Evaluation grid in log10(mT), half-open.
    pub grid_min: f64,
    pub grid_max: f64,
    pub grid_step: f64,

    /// Draw the individual components under the composite curve.
    pub show_components: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_grid: Option<PathBuf>,
}

pub const DEFAULT_GRID_MIN: f64 = 0.5;
pub const DEFAULT_GRID_MAX: f64 = 3.0;
pub const DEFAULT_GRID_STEP: f64 = 0.02;

/// Per-component parameters as written to curve JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentParams {
    pub abs_contribution: f64,
    pub rel_contribution: f64,
    pub amplitude: f64,
    pub mean: f64,
    pub dispersion: f64,
}

/// Evaluated model curves on the plotting grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveGrid {
    pub log_field: Vec<f64>,
    /// SIRM-normalized composite gradient curve.
    pub model: Vec<f64>,
    /// SIRM-normalized cumulative (acquisition) curve.
    pub acquisition: Vec<f64>,
    /// One curve per component, in file order.
    pub components: Vec<Vec<f64>>,
}

/// Portable JSON record of a parsed model plus its evaluated grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub generated: String,
    pub name: String,
    pub sirm: f64,
    pub components: Vec<ComponentParams>,
    /// Half-max field of the model curve, log10(mT).
    pub half_max_log_field: Option<f64>,
    pub grid: CurveGrid,
}
