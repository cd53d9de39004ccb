// SPDX-License-Identifier: Apache-2.0

use crate::ApiErrorCode;

/// HTTP status for an error code.
#[must_use]
pub fn status_for(code: ApiErrorCode) -> u16 {
    match code {
        ApiErrorCode::BadRequest => 400,
        ApiErrorCode::NotFound => 404,
        ApiErrorCode::UpstreamUnavailable => 503,
        ApiErrorCode::Internal => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_maps_to_a_distinct_status() {
        let statuses = [
            status_for(ApiErrorCode::BadRequest),
            status_for(ApiErrorCode::NotFound),
            status_for(ApiErrorCode::UpstreamUnavailable),
            status_for(ApiErrorCode::Internal),
        ];
        assert_eq!(statuses, [400, 404, 503, 500]);
    }
}
