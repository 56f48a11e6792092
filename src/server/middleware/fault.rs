//! Server fault reporting.
//!
//! Handler errors and panics both produce the generic 500 body. In development mode
//! the `message` field carries the real cause instead of "Something went wrong".

use std::any::Any;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{fault_response, FaultDetail, FAULT_MESSAGE},
    state::AppState,
};

/// Replaces the generic fault message with the recorded detail in development mode.
pub async fn expose_fault_detail(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if !state.config.development {
        return response;
    }

    match response.extensions().get::<FaultDetail>().cloned() {
        Some(FaultDetail(detail)) => fault_response(&detail),
        None => response,
    }
}

/// Builds the response for a panicking handler, for use with `CatchPanicLayer`.
///
/// # Arguments
/// - `development` - Include the panic message in the response body
pub fn panic_response(
    development: bool,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone + Send + Sync + 'static {
    move |panic| {
        let detail = if let Some(message) = panic.downcast_ref::<String>() {
            message.clone()
        } else if let Some(message) = panic.downcast_ref::<&str>() {
            message.to_string()
        } else {
            "Unknown panic".to_string()
        };

        tracing::error!("Server Error: handler panicked: {}", detail);

        if development {
            fault_response(&detail)
        } else {
            fault_response(FAULT_MESSAGE)
        }
    }
}
