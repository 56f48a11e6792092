use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, error::TestError, factory, TEST_GUILD_ID};
use tower::ServiceExt;

use crate::server::{config::Config, router::router, state::AppState};

mod docs;

fn app(config: Config) -> Router {
    router(AppState::new(config, reqwest::Client::new()))
}

async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = send(app, Method::GET, uri).await;

    (status, serde_json::from_str(&body).unwrap())
}
