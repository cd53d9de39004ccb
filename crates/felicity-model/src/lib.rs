#![forbid(unsafe_code)]
//! Felicity model SSOT.
//!
//! Pure domain types and functions: dataset records with per-field numeric
//! coercion, the closed-form happiness prediction, and the aggregations the
//! dashboard displays. No I/O lives here.

mod predict;
mod record;
mod stats;

pub use predict::{
    clamp_score, format_score, predict, PredictionInput, SCORE_INTERCEPT, SCORE_MAX, SCORE_MIN,
};
pub use record::{coerce_field, HappinessRecord, FIELD_COUNTRY, FIELD_REGION, FIELD_SCORE};
pub use stats::{mean_score, region_means, top_by_score, top_region};

pub const CRATE_NAME: &str = "felicity-model";
