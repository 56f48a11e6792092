use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use reqwest::StatusCode as UpstreamStatus;

use crate::{
    model::api::ErrorDto,
    server::error::{discord::DiscordError, AppError, FaultDetail, FAULT_ERROR, FAULT_MESSAGE},
};

/// Tests that application errors render as a generic 500 response.
///
/// Verifies the body hides the detail while the detail travels in the
/// response extensions for the development-mode middleware.
///
/// Expected: 500 with generic body and FaultDetail extension
#[tokio::test]
async fn renders_generic_internal_server_error() {
    let response = AppError::InternalError("page cache poisoned".to_string()).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let detail = response.extensions().get::<FaultDetail>().cloned();
    assert_eq!(detail.unwrap().0, "page cache poisoned");

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let dto: ErrorDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(dto.error, FAULT_ERROR);
    assert_eq!(dto.message, FAULT_MESSAGE);
}

/// Tests the message produced for a rejected Discord request.
///
/// Expected: "Discord API Error: 403"
#[test]
fn formats_upstream_status_error() {
    let err = DiscordError::Status(UpstreamStatus::FORBIDDEN);

    assert_eq!(err.to_string(), "Discord API Error: 403");
}

/// Tests that io errors convert into an application error with their message.
#[test]
fn wraps_io_error() {
    let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing page").into();

    assert!(matches!(err, AppError::IoErr(_)));
    assert_eq!(err.to_string(), "missing page");
}
