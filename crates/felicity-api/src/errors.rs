// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    BadRequest,
    NotFound,
    UpstreamUnavailable,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::new(ApiErrorCode::BadRequest, message, details)
    }

    #[must_use]
    pub fn not_found(path: &str) -> Self {
        Self::new(
            ApiErrorCode::NotFound,
            "no such route",
            json!({"path": path}),
        )
    }

    #[must_use]
    pub fn dataset_unavailable(reason: &str) -> Self {
        Self::new(
            ApiErrorCode::UpstreamUnavailable,
            "dataset unavailable",
            json!({"reason": reason}),
        )
    }
}

const _: fn() = || {
    fn assert_traits<T: Serialize + for<'de> Deserialize<'de>>() {}
    assert_traits::<ApiErrorCode>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_use_snake_case_on_the_wire() {
        let err = ApiError::dataset_unavailable("dataset not loaded");
        let json = serde_json::to_value(&err).expect("serialize error");
        assert_eq!(json["code"], "upstream_unavailable");
        assert_eq!(json["details"]["reason"], "dataset not loaded");
    }

    #[test]
    fn errors_round_trip() {
        let err = ApiError::bad_request("malformed prediction payload", json!({"field": "trust"}));
        let text = serde_json::to_string(&err).expect("serialize");
        let back: ApiError = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(back, err);
    }
}
