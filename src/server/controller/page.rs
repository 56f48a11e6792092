use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::server::{error::AppError, state::AppState};

/// Pages served at `/{name}` from `{name}.html` in the public directory.
pub const PAGES: [&str; 8] = [
    "index", "terms", "privacy", "docs", "status", "servers", "akane", "koharu",
];

const NOT_FOUND_PAGE: &str = "404.html";

/// Used when the public directory has no 404 page.
const FALLBACK_NOT_FOUND_HTML: &str = "<!DOCTYPE html>\n<html><head><title>404 Not Found</title></head><body><h1>404 Not Found</h1></body></html>\n";

/// Reads `{page}.html` from the public directory.
///
/// # Returns
/// - `Ok(Html)` - Page content
/// - `Err(AppError::InternalError)` - File missing or unreadable
pub async fn serve_page(state: &AppState, page: &str) -> Result<Html<String>, AppError> {
    let path = state.config.public_dir.join(format!("{}.html", page));

    let html = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(Html(html))
}

pub async fn get_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    serve_page(&state, "index").await
}

/// Answers unmatched paths and methods with the 404 page.
pub async fn not_found(State(state): State<AppState>) -> impl IntoResponse {
    let path = state.config.public_dir.join(NOT_FOUND_PAGE);

    let html = match tokio::fs::read_to_string(&path).await {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            FALLBACK_NOT_FOUND_HTML.to_string()
        }
    };

    (StatusCode::NOT_FOUND, Html(html))
}
