//! Command-line parsing for the CLG curve tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the parsing/numeric code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{DEFAULT_GRID_MAX, DEFAULT_GRID_MIN, DEFAULT_GRID_STEP};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "clg", version, about = "IRM acquisition curves vs. cumulative log-Gaussian models")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Plot the measured gradient against the CLG model in the terminal.
    Plot(PlotArgs),
    /// Print the model components and half-max fields.
    Summary(AnalysisArgs),
    /// Print the discrete gradient of a data file.
    Gradient(GradientArgs),
    /// Export one or more unmixing parameter files as CSV.
    Export(ExportArgs),
}

/// Input files shared by `plot` and `summary`.
#[derive(Debug, Args, Clone)]
pub struct AnalysisArgs {
    /// IRM data file (whitespace-delimited field/remanence columns).
    #[arg(short = 'd', long = "data", value_name = "FILE")]
    pub data: PathBuf,

    /// Unmixing parameter file.
    #[arg(short = 'c', long = "curves", value_name = "FILE")]
    pub curves: PathBuf,

    #[command(flatten)]
    pub columns: ColumnArgs,

    /// Start of the model grid, log10(mT).
    #[arg(long, env = "CLG_GRID_MIN", default_value_t = DEFAULT_GRID_MIN)]
    pub grid_min: f64,

    /// End of the model grid (exclusive), log10(mT).
    #[arg(long, env = "CLG_GRID_MAX", default_value_t = DEFAULT_GRID_MAX)]
    pub grid_max: f64,

    /// Model grid spacing, log10(mT).
    #[arg(long, env = "CLG_GRID_STEP", default_value_t = DEFAULT_GRID_STEP)]
    pub grid_step: f64,
}

/// Column selection for data files.
#[derive(Debug, Args, Clone, Copy)]
pub struct ColumnArgs {
    /// Zero-based column holding the applied field.
    #[arg(long, default_value_t = 0)]
    pub x_col: usize,

    /// Zero-based column holding the remanence.
    #[arg(long, default_value_t = 1)]
    pub y_col: usize,
}

/// Options for the terminal plot.
#[derive(Debug, Args, Clone)]
pub struct PlotArgs {
    #[command(flatten)]
    pub input: AnalysisArgs,

    /// Plot width (columns).
    #[arg(long, env = "CLG_PLOT_WIDTH", default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, env = "CLG_PLOT_HEIGHT", default_value_t = 25)]
    pub height: usize,

    /// Hide the individual component curves.
    #[arg(long)]
    pub no_components: bool,

    /// Also write the evaluated model grid to JSON.
    #[arg(long = "export-grid", value_name = "JSON")]
    pub export_grid: Option<PathBuf>,
}

/// Options for `gradient`.
#[derive(Debug, Args, Clone)]
pub struct GradientArgs {
    /// IRM data file.
    #[arg(short = 'd', long = "data", value_name = "FILE")]
    pub data: PathBuf,

    #[command(flatten)]
    pub columns: ColumnArgs,

    /// Differentiate against log10(field), dropping non-positive fields.
    #[arg(long)]
    pub log_field: bool,
}

/// Options for `export`.
#[derive(Debug, Args, Clone)]
pub struct ExportArgs {
    /// Unmixing parameter files.
    #[arg(required = true, value_name = "FILE")]
    pub curves: Vec<PathBuf>,

    /// Output CSV (stdout when omitted).
    #[arg(short = 'o', long, value_name = "CSV")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn plot_defaults() {
        let cli = Cli::try_parse_from(["clg", "plot", "-d", "a.dat", "-c", "b.txt"]).unwrap();
        let Command::Plot(args) = cli.command else { panic!("expected plot") };
        assert_eq!(args.input.columns.x_col, 0);
        assert_eq!(args.input.columns.y_col, 1);
        assert!(!args.no_components);
        assert!(args.export_grid.is_none());
    }

    #[test]
    fn export_requires_files() {
        assert!(Cli::try_parse_from(["clg", "export"]).is_err());
        let cli = Cli::try_parse_from(["clg", "export", "a.txt", "b.txt", "-o", "out.csv"]).unwrap();
        let Command::Export(args) = cli.command else { panic!("expected export") };
        assert_eq!(args.curves.len(), 2);
    }
}
