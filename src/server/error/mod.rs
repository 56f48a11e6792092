//! Error types and HTTP response handling.
//!
//! The Discord endpoints never surface errors as HTTP failures; their services fold
//! every upstream problem into the JSON payload. `AppError` covers everything else:
//! startup failures and faults in the remaining handlers, which all map to a generic
//! 500 response.

pub mod config;
pub mod discord;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::config::ConfigError,
};

pub const FAULT_ERROR: &str = "Internal Server Error";
pub const FAULT_MESSAGE: &str = "Something went wrong";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while reading the environment at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Socket error, such as a port that cannot be bound.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal server error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Every variant results in a 500 Internal Server Error. The detail is logged and
/// attached to the response as a [`FaultDetail`] extension so the fault middleware
/// can reveal it in development mode.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

/// Detail of a server fault, carried in response extensions.
#[derive(Clone, Debug)]
pub struct FaultDetail(pub String);

/// Builds the 500 response body shared by handler errors and panics.
pub fn fault_response(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto {
            error: FAULT_ERROR.to_string(),
            message: message.to_string(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns the generic "Something went wrong" body so production
/// responses never leak implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        let detail = self.0.to_string();
        tracing::error!("Server Error: {}", detail);

        let mut response = fault_response(FAULT_MESSAGE);
        response.extensions_mut().insert(FaultDetail(detail));
        response
    }
}

#[cfg(test)]
mod test;
