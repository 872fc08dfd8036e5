//! Half-maximum crossing.
//!
//! Used to read off the half-max field (H'cr) from a gradient curve: the first
//! `x` at which `y` reaches half of its maximum, linearly interpolated between
//! the bracketing samples.

use crate::error::ComputeError;

/// Find the first `x` where `y` reaches `max(y) / 2`.
///
/// Scans brackets `[i, i + 1]` for the first `y[i + 1] >= half`. Returns
/// `Ok(None)` when no bracket reaches the threshold (empty or single-sample
/// input included).
/// Ties resolve to the leftmost matching sample.
pub fn x_for_half_max_y(x: &[f64], y: &[f64]) -> Result<Option<f64>, ComputeError> {
    if x.len() != y.len() {
        return Err(ComputeError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if y.is_empty() {
        return Ok(None);
    }

    let max = y.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let half = max / 2.0;

    // Bracket `[i, i + 1]`; a single sample has no bracket.
    for i in 0..y.len() - 1 {
        if y[i + 1] >= half {
            if y[i] == half {
                return Ok(Some(x[i]));
            }
            let dy = y[i + 1] - y[i];
            // Only reachable when y[0] is already above the threshold.
            if dy == 0.0 {
                return Ok(Some(x[i]));
            }
            return Ok(Some(x[i] + (half - y[i]) / dy * (x[i + 1] - x[i])));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_zero_series_returns_first_x() {
        assert_eq!(x_for_half_max_y(&[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0]), Ok(Some(0.0)));
    }

    #[test]
    fn exact_crossing_on_sample() {
        let x = [1.0, 2.0, 5.0, 16.0, 19.0, 99.0];
        let y = [1.0, 1.0, 9.0, 11.0, 18.0, 14.0];
        assert_eq!(x_for_half_max_y(&x, &y), Ok(Some(5.0)));
    }

    #[test]
    fn interpolates_between_samples() {
        let got = x_for_half_max_y(&[0.0, 2.0, 3.0, 8.0], &[1.0, 2.0, 4.0, 6.0])
            .unwrap()
            .unwrap();
        assert!((got - 2.5).abs() < 1e-10);

        let got = x_for_half_max_y(&[0.0, 2.0, 3.0, 8.0], &[0.0, 1.0, 5.0, 8.0])
            .unwrap()
            .unwrap();
        assert!((got - 2.75).abs() < 1e-10);
    }

    #[test]
    fn first_tie_wins() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.0, 2.0, 4.0, 2.0];
        assert_eq!(x_for_half_max_y(&x, &y), Ok(Some(1.0)));
    }

    #[test]
    fn no_crossing_is_none() {
        // Peak at the first sample and nothing later reaches half of it.
        assert_eq!(x_for_half_max_y(&[0.0, 1.0, 2.0], &[4.0, 1.0, 1.0]), Ok(None));
        // NaN maximum: nothing ever compares >= half.
        assert_eq!(x_for_half_max_y(&[0.0, 1.0], &[f64::NAN, f64::NAN]), Ok(None));
        assert_eq!(x_for_half_max_y(&[], &[]), Ok(None));
    }

    #[test]
    fn sample_at_half_followed_by_dip_is_skipped() {
        let got = x_for_half_max_y(&[0.0, 1.0, 2.0], &[2.0, 1.0, 4.0]).unwrap().unwrap();
        assert!((got - 4.0 / 3.0).abs() < 1e-12, "{got}");
    }

    #[test]
    fn single_sample_has_no_crossing() {
        assert_eq!(x_for_half_max_y(&[7.0], &[0.0]), Ok(None));
        assert_eq!(x_for_half_max_y(&[7.0], &[3.0]), Ok(None));
    }

    #[test]
    fn mismatched_lengths_fail() {
        assert_eq!(
            x_for_half_max_y(&[0.0, 1.0], &[0.0]),
            Err(ComputeError::LengthMismatch { x: 2, y: 1 })
        );
    }
}
