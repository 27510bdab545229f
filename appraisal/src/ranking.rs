//! Car ranking by a single criterion or a weighted overall score.
//!
//! DESIGN
//! ======
//! Each criterion maps a car's listed figures onto a comparable score. The
//! overall score is a weighted blend of the five others. Ranking is a stable
//! descending sort, so tied cars keep their input order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "ranking_test.rs"]
mod tests;

/// Cars shown per ranking unless the caller asks otherwise.
pub const TOP_N: usize = 5;

/// Price at or above which the price score bottoms out at zero.
const PRICE_CEILING: f64 = 100_000.0;
const RELIABILITY_BASE: f64 = 70.0;
const RELIABILITY_BONUS: f64 = 20.0;
const RELIABLE_MAKES: [&str; 3] = ["toyota", "honda", "lexus"];

// =============================================================================
// CRITERION
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Overall,
    Price,
    Performance,
    Efficiency,
    Safety,
    Reliability,
}

impl Criterion {
    pub const ALL: [Self; 6] = [
        Self::Overall,
        Self::Price,
        Self::Performance,
        Self::Efficiency,
        Self::Safety,
        Self::Reliability,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::Price => "price",
            Self::Performance => "performance",
            Self::Efficiency => "efficiency",
            Self::Safety => "safety",
            Self::Reliability => "reliability",
        }
    }

    /// Heading used when listing the ranking.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Overall => "Best Overall Cars",
            Self::Price => "Best Value Cars",
            Self::Performance => "High Performance Cars",
            Self::Efficiency => "Most Fuel Efficient",
            Self::Safety => "Safest Cars",
            Self::Reliability => "Most Reliable Cars",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown criterion '{0}' (expected overall, price, performance, efficiency, safety or reliability)")]
pub struct CriterionParseError(pub String);

impl FromStr for Criterion {
    type Err = CriterionParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CriterionParseError(trimmed.to_owned()))
    }
}

// =============================================================================
// CARS
// =============================================================================

/// Listed figures for one car.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarSpec {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub horsepower: f64,
    pub mpg: f64,
    /// Out of 5.
    pub safety_rating: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedCar {
    pub rank: usize,
    pub score: f64,
    #[serde(flatten)]
    pub car: CarSpec,
}

/// Built-in 2023 lineup ranked when no other data is supplied.
#[must_use]
pub fn sample_cars() -> Vec<CarSpec> {
    [
        ("Toyota", "Camry", 25_000.0, 203.0, 28.0, 5.0),
        ("Honda", "Accord", 26_000.0, 192.0, 30.0, 5.0),
        ("Ford", "Mustang", 35_000.0, 310.0, 22.0, 4.5),
        ("BMW", "3 Series", 43_000.0, 255.0, 25.0, 5.0),
        ("Toyota", "Prius", 24_000.0, 121.0, 52.0, 5.0),
        ("Honda", "CR-V", 28_000.0, 190.0, 28.0, 5.0),
        ("Chevrolet", "Corvette", 65_000.0, 495.0, 19.0, 4.8),
        ("Mercedes-Benz", "C-Class", 45_000.0, 255.0, 24.0, 5.0),
    ]
    .into_iter()
    .map(|(make, model, price, horsepower, mpg, safety_rating)| CarSpec {
        make: make.to_owned(),
        model: model.to_owned(),
        year: 2023,
        price,
        horsepower,
        mpg,
        safety_rating,
    })
    .collect()
}

// =============================================================================
// SCORING
// =============================================================================

fn price_score(car: &CarSpec) -> f64 {
    (PRICE_CEILING - car.price).max(0.0) / 1000.0
}

fn performance_score(car: &CarSpec) -> f64 {
    car.horsepower / 10.0
}

fn safety_score(car: &CarSpec) -> f64 {
    car.safety_rating * 20.0
}

fn reliability_score(car: &CarSpec) -> f64 {
    let make = car.make.to_ascii_lowercase();
    if RELIABLE_MAKES.contains(&make.as_str()) {
        RELIABILITY_BASE + RELIABILITY_BONUS
    } else {
        RELIABILITY_BASE
    }
}

/// Score `car` under `criterion`, rounded half-to-even to two decimals.
#[must_use]
pub fn score(car: &CarSpec, criterion: Criterion) -> f64 {
    let raw = match criterion {
        Criterion::Price => price_score(car),
        Criterion::Performance => performance_score(car),
        Criterion::Efficiency => car.mpg,
        Criterion::Safety => safety_score(car),
        Criterion::Reliability => reliability_score(car),
        Criterion::Overall => {
            price_score(car) * 0.25
                + performance_score(car) * 0.20
                + car.mpg * 0.20
                + safety_score(car) * 0.20
                + reliability_score(car) * 0.15
        }
    };
    (raw * 100.0).round_ties_even() / 100.0
}

/// The `top_n` best-scoring cars, ranked from 1.
#[must_use]
pub fn rank(cars: &[CarSpec], criterion: Criterion, top_n: usize) -> Vec<RankedCar> {
    let mut scored: Vec<(f64, &CarSpec)> = cars.iter().map(|car| (score(car, criterion), car)).collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(top_n)
        .enumerate()
        .map(|(i, (score, car))| RankedCar { rank: i + 1, score, car: car.clone() })
        .collect()
}
