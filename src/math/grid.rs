//! Evaluation grids.
//!
//! Model curves are drawn on an evenly spaced grid in log10(field) space. The
//! grid is half-open (`[start, stop)`) so the default `0.5..3.0` step `0.02`
//! yields 125 points.

use crate::error::AppError;

/// Upper bound on grid size.
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Generate `start, start + step, ...` strictly below `stop`.
pub fn arange(start: f64, stop: f64, step: f64) -> Result<Vec<f64>, AppError> {
    if !(start.is_finite() && stop.is_finite() && step.is_finite()) {
        return Err(AppError::new(
            2,
            format!("Invalid grid: start={start}, stop={stop}, step={step} (must be finite)."),
        ));
    }
    if step <= 0.0 || stop <= start {
        return Err(AppError::new(
            2,
            format!("Invalid grid: start={start}, stop={stop}, step={step} (need step>0 and stop>start)."),
        ));
    }

    // Count first, then multiply: accumulating `x += step` drifts.
    let n = ((stop - start) / step).ceil();
    if n > MAX_GRID_POINTS as f64 {
        return Err(AppError::new(
            2,
            format!("Invalid grid: start={start}, stop={stop}, step={step} (more than {MAX_GRID_POINTS} points)."),
        ));
    }
    let mut out = Vec::new();
    for i in 0..n as usize {
        let x = start + step * i as f64;
        if x >= stop {
            break;
        }
        out.push(x);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_shape() {
        let g = arange(0.5, 3.0, 0.02).unwrap();
        assert_eq!(g.len(), 125);
        assert!((g[0] - 0.5).abs() < 1e-12);
        assert!((g[124] - 2.98).abs() < 1e-9);
    }

    #[test]
    fn rejects_invalid_ranges() {
        assert!(arange(1.0, 1.0, 0.1).is_err());
        assert!(arange(0.0, 1.0, 0.0).is_err());
        assert!(arange(0.0, f64::INFINITY, 0.1).is_err());
    }

    #[test]
    fn rejects_oversized_grid() {
        let err = arange(0.0, 1.0, 1e-300).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(arange(0.0, 1.0, 1.0 / 262_144.0).unwrap().len(), 262_144);
        assert!(arange(0.0, 1.0, 1e-7).is_err());
    }
}
