//! Error types for the permutation service API.
//!
//! This module defines the central [`ApiError`] enum, which captures every
//! reportable client-facing error. It implements
//! [`axum::response::IntoResponse`] so handlers can propagate errors with `?`
//! and still produce the uniform JSON error body.
//!
//! ## Error Cases
//! - `MalformedInput`: The request body was not a JSON array of integers.
//! - `InvalidSet`: The set contained a negative or duplicate value.
//! - `JobNotFound`: The job id does not refer to a registered job.
//!
//! Every error is terminal for the request that raised it; nothing is
//! retried and nothing crashes the process.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Unified error type for the permutation service API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be decoded into an integer array.
    #[error("malformed request body: expected a JSON array of integers")]
    MalformedInput(#[source] serde_json::Error),

    /// The requested set cannot be permuted.
    #[error(transparent)]
    InvalidSet(#[from] lexperm::Error),

    /// The retrieval referenced an unregistered job id.
    #[error("job does not exist")]
    JobNotFound,
}

/// Uniform JSON body for every error response.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    success: bool,
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::MalformedInput(_) | Self::InvalidSet(_) => StatusCode::BAD_REQUEST,
            Self::JobNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!("client error: {self}");
        let body = ErrorBody {
            error: self.to_string(),
            success: false,
        };
        (self.status(), Json(body)).into_response()
    }
}
