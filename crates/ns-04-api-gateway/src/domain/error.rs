//! API error types and their HTTP mapping.
//!
//! Every error renders as `{"error": "<message>"}` with the matching status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ns_02_admission::AdmissionError;
use thiserror::Error;
use tracing::error;

use std::io;
use std::net::SocketAddr;

use super::config::GatewayConfigError;
use super::types::ErrorBody;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Body was not a JSON object of the expected shape
    #[error("invalid request body")]
    InvalidBody,

    /// Value missing or blank
    #[error("value is required")]
    EmptyInput,

    /// Unknown secret id
    #[error("secret not found")]
    NotFound,

    /// Failure outside the request's control; details are logged, not returned
    #[error("internal error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody | Self::EmptyInput => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AdmissionError> for ApiError {
    fn from(err: AdmissionError) -> Self {
        match err {
            AdmissionError::EmptyValue => Self::EmptyInput,
            AdmissionError::SecretNotFound(_) => Self::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            error!(detail = %detail, "Internal error while handling request");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Errors raised while starting or running the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Config(#[from] GatewayConfigError),

    #[error("metrics registration failed: {0}")]
    Telemetry(#[from] ns_telemetry::TelemetryError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("HTTP server error: {0}")]
    Serve(#[source] io::Error),
}
