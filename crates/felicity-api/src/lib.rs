// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod dto;
mod error_mapping;
mod errors;

pub use dto::{PredictRequest, PredictResponse};
pub use error_mapping::status_for;
pub use errors::{ApiError, ApiErrorCode};

pub const CRATE_NAME: &str = "felicity-api";
