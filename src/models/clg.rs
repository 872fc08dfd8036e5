//! Cumulative log-Gaussian (CLG) curve model.
//!
//! A sample's IRM acquisition is modelled as a sum of log-Gaussian components,
//! scaled by the saturation remanence (SIRM). The model is read from a parameter
//! file (`io::unmix`), never fitted here.

use super::GaussianComponent;

#[derive(Debug, Clone, PartialEq)]
pub struct ClgCurveModel {
    name: String,
    sirm: f64,
    components: Vec<GaussianComponent>,
}

impl ClgCurveModel {
    pub fn new(name: impl Into<String>, sirm: f64, components: Vec<GaussianComponent>) -> Self {
        Self {
            name: name.into(),
            sirm,
            components,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sirm(&self) -> f64 {
        self.sirm
    }

    pub fn components(&self) -> &[GaussianComponent] {
        &self.components
    }

    /// Composite gradient curve at `x` (log10 field).
    ///
    /// With `normalize` the SIRM scale is left out, so curves of different
    /// samples can be compared by shape.
    pub fn evaluate(&self, x: f64, normalize: bool) -> f64 {
        let sum: f64 = self.components.iter().map(|c| c.evaluate(x)).sum();
        if normalize { sum } else { sum * self.sirm }
    }

    pub fn evaluate_all(&self, xs: &[f64], normalize: bool) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x, normalize)).collect()
    }

    /// Each component evaluated over `xs`, unscaled by SIRM.
    pub fn component_curves(&self, xs: &[f64]) -> Vec<Vec<f64>> {
        self.components
            .iter()
            .map(|c| xs.iter().map(|&x| c.evaluate(x)).collect())
            .collect()
    }

    /// Modelled remanence at `x`: `Σ m_rel * cdf(x)`, times SIRM unless normalized.
    pub fn acquisition(&self, x: f64, normalize: bool) -> f64 {
        let sum: f64 = self
            .components
            .iter()
            .map(|c| c.rel_contribution() * c.cdf(x))
            .sum();
        if normalize { sum } else { sum * self.sirm }
    }

    /// `name,` followed by one `M_abs,m_rel,a,Bhalf,DP` group per component.
    pub fn csv_line(&self) -> String {
        let groups: Vec<String> = self.components.iter().map(|c| c.csv_line()).collect();
        format!("{},{}", self.name, groups.join(","))
    }

    pub fn csv_header(&self) -> String {
        csv_header_for(self.components.len())
    }
}

/// Header row for `n` component groups.
pub fn csv_header_for(n: usize) -> String {
    let groups = vec![GaussianComponent::csv_header(); n];
    format!("Sample,{}", groups.join(","))
}
