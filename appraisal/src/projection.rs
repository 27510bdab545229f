//! Depreciation projection over a fixed future horizon.
//!
//! DESIGN
//! ======
//! One shared geometric curve, `(1 - DEPRECIATION_RATE)^k`, is applied to
//! every tracked series independently. Optional series stay optional: a result
//! without a price range projects to points without low/high values.

use serde::Serialize;

use crate::valuation::ValuationResult;

#[cfg(test)]
#[path = "projection_test.rs"]
mod tests;

/// Annual multiplicative decline applied to all series.
pub const DEPRECIATION_RATE: f64 = 0.15;

/// Number of projected years, starting at the current calendar year.
pub const PROJECTION_YEARS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub year: i32,
    pub predicted_value: f64,
    pub mean_value: Option<f64>,
    pub low_range: Option<f64>,
    pub high_range: Option<f64>,
}

/// Multiplier for offset `k` years from the valuation.
#[must_use]
pub fn depreciation_factor(k: usize) -> f64 {
    let exp = i32::try_from(k).unwrap_or(i32::MAX);
    (1.0 - DEPRECIATION_RATE).powi(exp)
}

/// Project `result` across [`PROJECTION_YEARS`] years starting at `start_year`.
#[must_use]
pub fn project(result: &ValuationResult, start_year: i32) -> Vec<ProjectionPoint> {
    let range = result.price_range;
    (0..PROJECTION_YEARS)
        .zip(start_year..)
        .map(|(k, year)| {
            let factor = depreciation_factor(k);
            ProjectionPoint {
                year,
                predicted_value: result.predicted_value * factor,
                mean_value: result.mean_value.map(|v| v * factor),
                low_range: range.map(|r| r.low * factor),
                high_range: range.map(|r| r.high * factor),
            }
        })
        .collect()
}
