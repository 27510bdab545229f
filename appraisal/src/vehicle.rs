//! Vehicle attributes collected from the user and the request sent for valuation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "vehicle_test.rs"]
mod tests;

// =============================================================================
// CONDITION
// =============================================================================

/// Self-reported condition of the vehicle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Self; 4] = [Self::Excellent, Self::Good, Self::Fair, Self::Poor];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown condition '{0}' (expected Excellent, Good, Fair or Poor)")]
pub struct ConditionParseError(pub String);

impl FromStr for Condition {
    type Err = ConditionParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConditionParseError(trimmed.to_owned()))
    }
}

// =============================================================================
// DESCRIPTOR
// =============================================================================

/// Form-side view of the vehicle being valued. Fields are edited one at a
/// time; empty strings mean "not selected".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleDescriptor {
    pub make: String,
    pub model: String,
    pub trim: String,
    pub year: i32,
    pub mileage: Option<u32>,
    pub condition: Condition,
    pub zip_code: Option<String>,
}

impl VehicleDescriptor {
    /// Empty descriptor with the year preset to `current_year`.
    #[must_use]
    pub fn new(current_year: i32) -> Self {
        Self {
            make: String::new(),
            model: String::new(),
            trim: String::new(),
            year: current_year,
            mileage: None,
            condition: Condition::default(),
            zip_code: None,
        }
    }
}

// =============================================================================
// WIRE REQUEST
// =============================================================================

/// Body of `POST /predict`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValuationRequest {
    pub make: String,
    pub model: String,
    #[serde(default)]
    pub trim: Option<String>,
    pub year: i32,
    #[serde(default)]
    pub mileage: Option<f64>,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default)]
    pub zip_code: Option<String>,
}

impl From<&VehicleDescriptor> for ValuationRequest {
    fn from(d: &VehicleDescriptor) -> Self {
        Self {
            make: d.make.clone(),
            model: d.model.clone(),
            trim: non_empty(&d.trim),
            year: d.year,
            mileage: d.mileage.map(f64::from),
            condition: d.condition,
            zip_code: d.zip_code.as_deref().and_then(non_empty),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
