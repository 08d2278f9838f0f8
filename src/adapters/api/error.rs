//! Typed API errors with stable JSON response bodies.
//!
//! Clients must be able to tell "an upstream is broken" (502) apart
//! from "no data to report" (500) without parsing a crash trace, so
//! every error renders as `{"error": <message>}` with a fixed status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::usecases::highest_apy::HighestApyError;

/// Error surface of the HTTP API.
#[derive(Debug)]
pub enum ApiError {
    /// An upstream protocol API failed or returned an unusable shape.
    BadGateway(String),
    /// The service itself could not produce a result.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, json!({ "error": msg })),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<HighestApyError> for ApiError {
    fn from(err: HighestApyError) -> Self {
        match err {
            // Shape and transport failures both mean the upstream let
            // us down: 502. An empty result is ours to own: 500.
            HighestApyError::Source(e) => ApiError::BadGateway(e.to_string()),
            HighestApyError::NoData(e) => ApiError::Internal(e.to_string()),
        }
    }
}
