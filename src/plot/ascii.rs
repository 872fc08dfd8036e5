//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - measured normalized gradient: `o`
//! - composite model curve: `-`
//! - individual components: `.`
//!
//! The y-axis always starts at zero, like the gradient plots it replaces.

use crate::app::pipeline::Analysis;

/// Render the measured gradient against the model (and optionally its components).
pub fn render_ascii_plot(analysis: &Analysis, width: usize, height: usize, show_components: bool) -> String {
    let points: Vec<(f64, f64)> = analysis
        .log_field
        .iter()
        .copied()
        .zip(analysis.gradient.iter().copied())
        .collect();
    let curve: Vec<(f64, f64)> = analysis.grid.iter().copied().zip(analysis.model.iter().copied()).collect();
    let components: Vec<Vec<(f64, f64)>> = if show_components {
        analysis
            .components
            .iter()
            .map(|ys| analysis.grid.iter().copied().zip(ys.iter().copied()).collect())
            .collect()
    } else {
        Vec::new()
    };

    render_plot(&points, &curve, &components, width, height)
}

fn render_plot(
    points: &[(f64, f64)],
    curve: &[(f64, f64)],
    components: &[Vec<(f64, f64)>],
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let all = || points.iter().chain(curve).chain(components.iter().flatten());
    let (x_min, x_max) = range(all().map(|p| p.0)).unwrap_or((0.0, 1.0));
    let y_max = all().map(|p| p.1).filter(|y| y.is_finite()).fold(0.0, f64::max);
    let (x_min, x_max) = pad_range(x_min, x_max, 0.02);
    let (y_min, y_max) = (0.0, if y_max > 0.0 { y_max * 1.05 } else { 1.0 });

    let mut grid = vec![vec![' '; width]; height];

    // Components first, then the composite, then points on top.
    for c in components {
        draw_curve(&mut grid, c, x_min, x_max, y_min, y_max, '.');
    }
    draw_curve(&mut grid, curve, x_min, x_max, y_min, y_max, '-');
    for &(x, y) in points {
        if !(x.is_finite() && y.is_finite()) {
            continue;
        }
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: log10(B/mT)=[{x_min:.3}, {x_max:.3}] | dM/dlogB / SIRM=[{y_min:.2}, {y_max:.2}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() && max > min {
        Some((min, max))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(
    grid: &mut [Vec<char>],
    curve: &[(f64, f64)],
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    ch: char,
) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        if !(x.is_finite() && y.is_finite()) {
            prev = None;
            continue;
        }
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, ch);
        } else {
            grid[row][col] = ch;
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish). Overwrites blanks and lower layers.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0 && (y0 as usize) < grid.len() && x0 >= 0 && (x0 as usize) < grid[0].len() {
            let cell = &mut grid[y0 as usize][x0 as usize];
            if *cell == ' ' || (*cell == '.' && ch == '-') {
                *cell = ch;
            }
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_golden_snapshot_small() {
        let points = vec![(0.0, 1.0), (1.0, 2.0)];
        let curve = vec![(0.0, 1.0), (1.0, 1.0)];

        let txt = render_plot(&points, &curve, &[], 10, 5);
        let expected = concat!(
            "Plot: log10(B/mT)=[-0.020, 1.020] | dM/dlogB / SIRM=[0.00, 2.10]\n",
            "         o\n",
            "          \n",
            "o---------\n",
            "          \n",
            "          \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn components_sit_under_the_composite() {
        let curve = vec![(0.0, 1.0), (1.0, 1.0)];
        let component = vec![(0.0, 1.0), (1.0, 1.0)];
        let txt = render_plot(&[], &curve, &[component], 10, 5);
        assert!(!txt.lines().skip(1).any(|l| l.contains('.')));

        let low = vec![(0.0, 0.0), (1.0, 0.0)];
        let txt = render_plot(&[], &curve, &[low], 10, 5);
        assert!(txt.lines().last().unwrap().contains(".........."));
    }
}
