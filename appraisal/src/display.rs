//! Human-readable formatting for valuation figures.

use crate::valuation::Factors;

#[cfg(test)]
#[path = "display_test.rs"]
mod tests;

/// Multiplier as a signed percentage delta with one decimal, e.g. `0.95` → `-5.0%`.
#[must_use]
pub fn percent_delta(multiplier: f64) -> String {
    let pct = (multiplier - 1.0) * 100.0;
    // Avoid rendering "-0.0%" for multipliers a hair under 1.
    let pct = if pct.abs() < 0.05 { 0.0 } else { pct };
    format!("{pct:.1}%")
}

/// Whole-dollar currency with thousands separators, e.g. `17955.4` → `$17,955`.
#[must_use]
pub fn currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let digits = (rounded.abs() as u64).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}")
}

/// One labeled row of the multiplier breakdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactorLine {
    pub label: &'static str,
    pub value: String,
}

/// Breakdown rows in display order: base value, then trim/condition/mileage effects.
#[must_use]
pub fn factor_lines(factors: &Factors) -> [FactorLine; 4] {
    [
        FactorLine { label: "Base value", value: currency(factors.base_value) },
        FactorLine { label: "Trim", value: percent_delta(factors.trim_multiplier) },
        FactorLine { label: "Condition", value: percent_delta(factors.condition_multiplier) },
        FactorLine { label: "Mileage", value: percent_delta(factors.mileage_multiplier) },
    ]
}
