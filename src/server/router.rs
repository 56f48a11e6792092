use axum::{extract::State, handler::Handler, middleware, routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::server::{
    controller::{
        discord::{get_bot_status, get_discord_stats, get_servers},
        docs::get_openapi,
        health::get_health,
        page::{self, get_index, not_found, PAGES},
    },
    middleware::fault::{expose_fault_detail, panic_response},
    state::AppState,
};

/// Builds the complete application router.
///
/// Files in the public directory are served as a fallback for unmatched paths;
/// anything still unmatched, including unsupported methods, gets the 404 page.
pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.public_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.with_state(state.clone()));

    let mut router = Router::new()
        .route("/api/discord/stats", get(get_discord_stats))
        .route("/api/bot/status", get(get_bot_status))
        .route("/api/servers", get(get_servers))
        .route("/api/openapi.json", get(get_openapi))
        .route("/health", get(get_health))
        .route("/", get(get_index));

    for name in PAGES {
        router = router.route(
            &format!("/{}", name),
            get(move |State(state): State<AppState>| async move {
                page::serve_page(&state, name).await
            }),
        );
    }

    router
        .method_not_allowed_fallback(not_found)
        .fallback_service(static_files)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            expose_fault_detail,
        ))
        .layer(CatchPanicLayer::custom(panic_response(
            state.config.development,
        )))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
