//! Discrete gradient estimation.
//!
//! For interior points the estimate is the mean of the left and right finite
//! differences. At the two boundaries only one difference exists, and it is used
//! on its own (one-sided, not averaged with itself twice).

use crate::error::ComputeError;

/// Estimate `dy/dx` at every sample.
///
/// Requires at least two points: with a single sample neither finite difference
/// is defined.
pub fn gradient(x: &[f64], y: &[f64]) -> Result<Vec<f64>, ComputeError> {
    if x.len() != y.len() {
        return Err(ComputeError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(ComputeError::InsufficientData { needed: 2, got: n });
    }

    // slopes[i] is the difference between samples i and i+1.
    let mut slopes = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let dx = x[i + 1] - x[i];
        if dx == 0.0 {
            return Err(ComputeError::ZeroStep { index: i + 1 });
        }
        slopes.push((y[i + 1] - y[i]) / dx);
    }

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let left = if i > 0 { Some(slopes[i - 1]) } else { None };
        let right = slopes.get(i).copied();
        let g = match (left, right) {
            (Some(l), Some(r)) => (l + r) / 2.0,
            (Some(s), None) | (None, Some(s)) => s,
            (None, None) => unreachable!("n >= 2 guarantees one neighbour"),
        };
        out.push(g);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_points_use_one_sided_difference() {
        let g = gradient(&[1.0, 2.0], &[5.0, 7.0]).unwrap();
        assert_eq!(g, vec![2.0, 2.0]);
    }

    #[test]
    fn linear_series_has_constant_slope() {
        let x = [0.1, 0.4, 1.0, 1.3, 2.9, 3.0];
        let y: Vec<f64> = x.iter().map(|v| -1.5 * v + 4.0).collect();
        let g = gradient(&x, &y).unwrap();
        assert_eq!(g.len(), x.len());
        for v in g {
            assert!((v + 1.5).abs() < 1e-12, "got {v}");
        }
    }

    #[test]
    fn interior_points_average_both_sides() {
        let g = gradient(&[0.0, 1.0, 3.0], &[0.0, 1.0, 5.0]).unwrap();
        // left slope at index 1 is 1, right slope is 2.
        assert!((g[1] - 1.5).abs() < 1e-12);
        assert!((g[0] - 1.0).abs() < 1e-12);
        assert!((g[2] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(
            gradient(&[1.0, 2.0], &[1.0]),
            Err(ComputeError::LengthMismatch { x: 2, y: 1 })
        );
        assert_eq!(
            gradient(&[1.0], &[1.0]),
            Err(ComputeError::InsufficientData { needed: 2, got: 1 })
        );
        assert_eq!(
            gradient(&[1.0, 2.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(ComputeError::ZeroStep { index: 2 })
        );
    }
}
