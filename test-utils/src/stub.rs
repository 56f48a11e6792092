//! Stub of the Discord REST API.
//!
//! Every request is recorded, then answered from the canned response table keyed by
//! path. When the stub was built with a bot token, requests without the matching
//! `Authorization: Bot <token>` header are rejected with 401 the way Discord does.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, Method, StatusCode, Uri},
    Json, Router,
};
use serde_json::{json, Value};

use crate::context::RecordedRequest;

#[derive(Clone)]
pub(crate) struct StubState {
    pub responses: Arc<HashMap<String, (StatusCode, Value)>>,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
    pub bot_token: Option<String>,
}

pub(crate) fn router(state: StubState) -> Router {
    Router::new().fallback(respond).with_state(state)
}

/// Discord's error body for a status code, e.g. `{"message": "403: Forbidden", "code": 0}`.
pub(crate) fn error_body(status: StatusCode) -> Value {
    json!({
        "message": format!("{}: {}", status.as_u16(), status.canonical_reason().unwrap_or("Error")),
        "code": 0
    })
}

async fn respond(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    state
        .requests
        .lock()
        .expect("request log poisoned")
        .push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            authorization: authorization.clone(),
        });

    if let Some(token) = &state.bot_token {
        if authorization.as_deref() != Some(format!("Bot {}", token).as_str()) {
            return (
                StatusCode::UNAUTHORIZED,
                Json(error_body(StatusCode::UNAUTHORIZED)),
            );
        }
    }

    match state.responses.get(uri.path()) {
        Some((status, body)) => (*status, Json(body.clone())),
        None => (StatusCode::NOT_FOUND, Json(error_body(StatusCode::NOT_FOUND))),
    }
}
