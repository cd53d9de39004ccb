// SPDX-License-Identifier: Apache-2.0

use felicity_model::{format_score, PredictionInput};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/predict`. All six predictors are required and must be
/// JSON numbers; unknown extra keys are tolerated. JSON cannot encode
/// NaN or infinities, so a deserialized request is always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub economy: f64,
    pub family: f64,
    pub health: f64,
    pub freedom: f64,
    pub trust: f64,
    pub generosity: f64,
}

impl PredictRequest {
    #[must_use]
    pub fn into_input(self) -> PredictionInput {
        PredictionInput {
            economy: self.economy,
            family: self.family,
            health: self.health,
            freedom: self.freedom,
            trust: self.trust,
            generosity: self.generosity,
        }
    }
}

/// Body of a successful prediction: the score as a string with exactly
/// three decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictResponse {
    pub happiness_score: String,
}

impl PredictResponse {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        Self {
            happiness_score: format_score(score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_rejects_missing_fields() {
        let err = serde_json::from_str::<PredictRequest>(r#"{"economy": 1.0}"#);
        assert!(err.is_err());
    }

    #[test]
    fn request_rejects_non_numeric_fields() {
        let body = r#"{"economy":"1.0","family":0,"health":0,"freedom":0,"trust":0,"generosity":0}"#;
        assert!(serde_json::from_str::<PredictRequest>(body).is_err());
    }

    #[test]
    fn request_tolerates_extra_keys() {
        let body = r#"{"economy":1,"family":0,"health":0,"freedom":0,"trust":0,"generosity":0,"year":2015}"#;
        let request: PredictRequest = serde_json::from_str(body).expect("deserialize");
        assert_eq!(request.economy, 1.0);
    }

    #[test]
    fn response_formats_three_decimals() {
        assert_eq!(PredictResponse::from_score(2.1).happiness_score, "2.100");
    }
}
