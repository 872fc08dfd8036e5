//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - reads IRM data and unmixing parameter files
//! - runs the gradient / model / half-max analysis
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;
use rayon::prelude::*;

use crate::cli::{AnalysisArgs, ColumnArgs, Command, ExportArgs, GradientArgs, PlotArgs};
use crate::domain::{ColumnSpec, CurveConfig};
use crate::error::AppError;
use crate::io::{build_curve_file, export_models_csv, read_curve_file, read_series, write_curve_json};
use crate::math::gradient;

pub mod pipeline;

/// Entry point for the `clg` binary.
pub fn run() -> Result<(), AppError> {
    // Optional: environment fallbacks for grid/plot flags.
    dotenvy::dotenv().ok();

    // `clg -d data -c curves` behaves like `clg plot -d data -c curves`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Plot(args) => handle_plot(args),
        Command::Summary(args) => handle_summary(args),
        Command::Gradient(args) => handle_gradient(args),
        Command::Export(args) => handle_export(args),
    }
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let config = curve_config_from_args(&args.input, Some(&args));
    let analysis = pipeline::run_analysis(&config)?;

    println!(
        "{}",
        crate::plot::render_ascii_plot(&analysis, config.plot_width, config.plot_height, config.show_components)
    );
    println!("{}", crate::report::format_summary(&analysis));

    if let Some(path) = &config.export_grid {
        let curve = build_curve_file(&analysis.curves, &analysis.grid)?;
        write_curve_json(path, &curve)?;
    }

    Ok(())
}

fn handle_summary(args: AnalysisArgs) -> Result<(), AppError> {
    let config = curve_config_from_args(&args, None);
    let analysis = pipeline::run_analysis(&config)?;
    println!("{}", crate::report::format_summary(&analysis));
    Ok(())
}

fn handle_gradient(args: GradientArgs) -> Result<(), AppError> {
    let series = read_series(&args.data, column_spec(args.columns), None)?;
    let series = if args.log_field { series.log_field() } else { series };
    let g = gradient(series.x(), series.y())?;
    print!("{}", crate::report::format_gradient(&series, &g));
    Ok(())
}

fn handle_export(args: ExportArgs) -> Result<(), AppError> {
    // Each parse is self-contained; collect keeps argument order.
    let models = args
        .curves
        .par_iter()
        .map(|path| read_curve_file(path))
        .collect::<Result<Vec<_>, _>>()?;
    export_models_csv(args.output.as_deref(), &models)
}

pub fn curve_config_from_args(args: &AnalysisArgs, plot: Option<&PlotArgs>) -> CurveConfig {
    CurveConfig {
        data_path: args.data.clone(),
        curves_path: args.curves.clone(),
        columns: column_spec(args.columns),
        grid_min: args.grid_min,
        grid_max: args.grid_max,
        grid_step: args.grid_step,
        show_components: plot.is_none_or(|p| !p.no_components),
        plot_width: plot.map_or(100, |p| p.width),
        plot_height: plot.map_or(25, |p| p.height),
        export_grid: plot.and_then(|p| p.export_grid.clone()),
    }
}

fn column_spec(args: ColumnArgs) -> ColumnSpec {
    ColumnSpec {
        x: args.x_col,
        y: args.y_col,
    }
}

/// Rewrite argv so flag-only invocations default to `plot`.
///
/// Rules:
/// - `clg`                      -> unchanged (clap prints usage)
/// - `clg -d X -c Y ...`        -> `clg plot -d X -c Y ...`
/// - `clg --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "plot" | "summary" | "gradient" | "export");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "plot flags".
    if arg1.starts_with('-') {
        argv.insert(1, "plot".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
