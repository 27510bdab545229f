//! Valuation response returned by `POST /predict`.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "valuation_test.rs"]
mod tests;

/// Coarse qualitative indicator attached to an estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

/// Multiplier breakdown behind a point estimate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Factors {
    pub base_value: f64,
    pub trim_multiplier: f64,
    pub condition_multiplier: f64,
    pub mileage_multiplier: f64,
}

impl Factors {
    /// Unrounded product of the base value and every multiplier.
    #[must_use]
    pub fn point_estimate(&self) -> f64 {
        self.base_value * self.trim_multiplier * self.condition_multiplier * self.mileage_multiplier
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    pub predicted_value: f64,
    #[serde(default)]
    pub mean_value: Option<f64>,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    #[serde(default)]
    pub category: Option<String>,
    pub factors: Factors,
    #[serde(default)]
    pub confidence: Option<Confidence>,
    /// Model year of the valued vehicle.
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}
