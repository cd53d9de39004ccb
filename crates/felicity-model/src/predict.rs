// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Linear model inputs, one per dashboard slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub economy: f64,
    pub family: f64,
    pub health: f64,
    pub freedom: f64,
    pub trust: f64,
    pub generosity: f64,
}

pub const SCORE_INTERCEPT: f64 = 2.1;
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 10.0;

const WEIGHT_ECONOMY: f64 = 1.4;
const WEIGHT_FAMILY: f64 = 1.1;
const WEIGHT_HEALTH: f64 = 0.9;
const WEIGHT_FREEDOM: f64 = 0.7;
const WEIGHT_TRUST: f64 = 0.6;
const WEIGHT_GENEROSITY: f64 = 0.4;

/// Closed-form happiness estimate, clamped to the score range.
#[must_use]
pub fn predict(input: &PredictionInput) -> f64 {
    let raw = SCORE_INTERCEPT
        + WEIGHT_ECONOMY * input.economy
        + WEIGHT_FAMILY * input.family
        + WEIGHT_HEALTH * input.health
        + WEIGHT_FREEDOM * input.freedom
        + WEIGHT_TRUST * input.trust
        + WEIGHT_GENEROSITY * input.generosity;
    clamp_score(raw)
}

#[must_use]
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(SCORE_MIN, SCORE_MAX)
}

/// Wire formatting: exactly three decimal digits.
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score:.3}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(value: f64) -> PredictionInput {
        PredictionInput {
            economy: value,
            family: value,
            health: value,
            freedom: value,
            trust: value,
            generosity: value,
        }
    }

    #[test]
    fn zero_inputs_yield_the_intercept() {
        assert_eq!(format_score(predict(&input(0.0))), "2.100");
    }

    #[test]
    fn large_inputs_clamp_to_the_upper_bound() {
        assert_eq!(format_score(predict(&input(100.0))), "10.000");
    }

    #[test]
    fn negative_inputs_clamp_to_the_lower_bound() {
        assert_eq!(format_score(predict(&input(-100.0))), "0.000");
    }

    #[test]
    fn prediction_is_deterministic() {
        let sliders = PredictionInput {
            economy: 1.2,
            family: 0.9,
            health: 0.7,
            freedom: 0.4,
            trust: 0.2,
            generosity: 0.3,
        };
        assert_eq!(predict(&sliders), predict(&sliders));
    }

    #[test]
    fn interior_values_are_not_clamped() {
        let sliders = PredictionInput {
            economy: 1.0,
            family: 0.0,
            health: 0.0,
            freedom: 0.0,
            trust: 0.0,
            generosity: 0.0,
        };
        assert_eq!(format_score(predict(&sliders)), "3.500");
    }
}
