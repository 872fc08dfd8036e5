//! A single log-Gaussian coercivity component.
//!
//! Each component is a Gaussian in log10(field) space:
//!
//! - `evaluate(x) = a * exp(-(x - B1/2)^2 / (2 DP^2))` with `a = m_rel / (DP sqrt(2π))`
//! - `cdf(x) = 0.5 * (1 + erf((x - B1/2) / sqrt(2 DP^2)))`
//!
//! `evaluate` is the component's contribution to the gradient (coercivity
//! spectrum); `cdf` is its normalized cumulative acquisition curve.

use std::f64::consts::PI;

use crate::domain::ComponentParams;
use crate::error::ComputeError;
use crate::math::erf;

#[derive(Debug, Clone, PartialEq)]
pub struct GaussianComponent {
    /// Absolute contribution. Carried through to exports, never used in evaluation.
    abs_contribution: f64,
    rel_contribution: f64,
    amplitude: f64,
    mean: f64,
    dispersion: f64,
}

impl GaussianComponent {
    pub fn new(
        abs_contribution: f64,
        rel_contribution: f64,
        mean: f64,
        dispersion: f64,
    ) -> Result<Self, ComputeError> {
        if !(dispersion.is_finite() && dispersion > 0.0) {
            return Err(ComputeError::InvalidDispersion(dispersion));
        }
        Ok(Self {
            abs_contribution,
            rel_contribution,
            amplitude: rel_contribution / (dispersion * (2.0 * PI).sqrt()),
            mean,
            dispersion,
        })
    }

    pub fn abs_contribution(&self) -> f64 {
        self.abs_contribution
    }

    pub fn rel_contribution(&self) -> f64 {
        self.rel_contribution
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn dispersion(&self) -> f64 {
        self.dispersion
    }

    /// Gaussian density at `x`, scaled by the amplitude.
    pub fn evaluate(&self, x: f64) -> f64 {
        let d = x - self.mean;
        self.amplitude * (-(d * d) / (2.0 * self.dispersion * self.dispersion)).exp()
    }

    /// Cumulative distribution at `x`. Independent of the amplitude.
    pub fn cdf(&self, x: f64) -> f64 {
        0.5 * (1.0 + erf((x - self.mean) / (2.0 * self.dispersion * self.dispersion).sqrt()))
    }

    /// `M_abs,m_rel,a,Bhalf,DP`, two decimals each.
    pub fn csv_line(&self) -> String {
        format!(
            "{:.2},{:.2},{:.2},{:.2},{:.2}",
            self.abs_contribution, self.rel_contribution, self.amplitude, self.mean, self.dispersion
        )
    }

    pub fn csv_header() -> &'static str {
        "M_abs,m_rel,a,Bhalf,DP"
    }

    pub fn params(&self) -> ComponentParams {
        ComponentParams {
            abs_contribution: self.abs_contribution,
            rel_contribution: self.rel_contribution,
            amplitude: self.amplitude,
            mean: self.mean,
            dispersion: self.dispersion,
        }
    }
}
