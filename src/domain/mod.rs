//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - measured data (`DataSeries`, `ColumnSpec`)
//! - the resolved run configuration (`CurveConfig`)
//! - JSON export records (`CurveFile`, `CurveGrid`)

pub mod types;

pub use types::*;
