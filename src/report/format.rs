//! Formatted terminal output: run summary, component table, gradient listing.
//!
//! We keep formatting code in one place so:
//! - the numeric code stays clean and testable
//! - output changes are localized (important for snapshot tests)

use crate::app::pipeline::Analysis;
use crate::domain::DataSeries;
use crate::models::ClgCurveModel;

/// Format the full run summary (inputs + components + half-max fields).
pub fn format_summary(analysis: &Analysis) -> String {
    let mut out = String::new();
    let curves = &analysis.curves;

    out.push_str("=== clg - CLG curve summary ===\n");
    out.push_str(&format!(
        "Data:   {} ({} rows, {} with field > 0)\n",
        analysis.series.name().unwrap_or("-"),
        analysis.series.len(),
        analysis.log_field.len(),
    ));
    out.push_str(&format!(
        "Curves: {} | SIRM={:.4e} | {} component(s)\n",
        curves.name(),
        curves.sirm(),
        curves.components().len(),
    ));

    out.push_str("\nComponents:\n");
    out.push_str(&format_components(curves, analysis.model_half_max));

    out.push_str("\nHalf-max field (H'cr):\n");
    out.push_str(&format!("- measured gradient: {}\n", fmt_field(analysis.data_half_max)));
    out.push_str(&format!("- model:             {}\n", fmt_field(analysis.model_half_max)));

    out
}

/// Component table. `acq` is the fraction of each component acquired at `at` (log10 mT).
pub fn format_components(curves: &ClgCurveModel, at: Option<f64>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>3} {:>12} {:>7} {:>7} {:>7} {:>10} {:>6} {:>6}\n",
        "#", "M_abs", "m_rel", "a", "Bhalf", "Bhalf(mT)", "DP", "acq"
    ));
    for (i, c) in curves.components().iter().enumerate() {
        let acq = at.map(|x| format!("{:.3}", c.cdf(x))).unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:>3} {:>12.4e} {:>7.3} {:>7.3} {:>7.3} {:>10.1} {:>6.3} {:>6}\n",
            i + 1,
            c.abs_contribution(),
            c.rel_contribution(),
            c.amplitude(),
            c.mean(),
            10f64.powf(c.mean()),
            c.dispersion(),
            acq,
        ));
    }
    out
}

/// Three columns: x, y, dy/dx.
pub fn format_gradient(series: &DataSeries, gradient: &[f64]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>14} {:>14} {:>14}\n", "x", "y", "dy/dx"));
    for ((x, y), g) in series.x().iter().zip(series.y()).zip(gradient) {
        out.push_str(&format!("{x:>14.6} {y:>14.6e} {g:>14.6e}\n"));
    }
    out
}

fn fmt_field(log_field: Option<f64>) -> String {
    match log_field {
        Some(x) if x.is_finite() => format!("{x:.3} log10(mT) = {:.1} mT", 10f64.powf(x)),
        _ => "not found".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GaussianComponent;

    #[test]
    fn field_formatting() {
        assert_eq!(fmt_field(Some(2.0)), "2.000 log10(mT) = 100.0 mT");
        assert_eq!(fmt_field(None), "not found");
    }

    #[test]
    fn component_table_lists_every_component() {
        let curves = ClgCurveModel::new(
            "S1",
            1.0,
            vec![
                GaussianComponent::new(1.0e-5, 0.7, 1.5, 0.3).unwrap(),
                GaussianComponent::new(2.0e-6, 0.3, 2.5, 0.2).unwrap(),
            ],
        );
        let table = format_components(&curves, Some(1.5));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].trim_start().starts_with("1 "));
        // First component is half acquired at its own median field.
        assert!(lines[1].ends_with("0.500"), "{}", lines[1]);
        assert!(lines[1].contains("31.6"), "{}", lines[1]);

        let table = format_components(&curves, None);
        assert!(table.lines().nth(2).unwrap().ends_with('-'));
    }

    #[test]
    fn gradient_listing_has_one_row_per_sample() {
        let series = DataSeries::new(vec![1.0, 2.0], vec![5.0, 7.0], None).unwrap();
        let g = series.gradient().unwrap();
        let text = format_gradient(&series, &g);
        assert_eq!(text.lines().count(), 3);
    }
}
