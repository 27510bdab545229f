//! Shared vehicle valuation model for the CarSeer service and its clients.
//!
//! This crate owns the wire representation exchanged between the `carseer`
//! server and `carseer-cli`, plus the pure computations both sides agree on:
//! the depreciation projection, multiplier display formatting, catalog
//! model-name cleanup, the selectable year range, and car rankings.

pub mod catalog;
pub mod display;
pub mod projection;
pub mod ranking;
pub mod valuation;
pub mod vehicle;

pub use projection::{DEPRECIATION_RATE, PROJECTION_YEARS, ProjectionPoint, project};
pub use ranking::{CarSpec, Criterion, CriterionParseError, RankedCar, TOP_N, rank, sample_cars};
pub use valuation::{Confidence, Factors, PriceRange, ValuationResult};
pub use vehicle::{Condition, ConditionParseError, ValuationRequest, VehicleDescriptor};

/// Current calendar year in UTC.
#[must_use]
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
