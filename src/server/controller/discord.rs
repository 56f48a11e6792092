use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::discord::{BotStatusDto, GuildStatsDto, ServerListDto},
    server::{service::discord::DiscordStatusService, state::AppState},
};

pub static DISCORD_TAG: &str = "discord";

#[utoipa::path(
    get,
    path = "/api/discord/stats",
    tag = DISCORD_TAG,
    responses(
        (status = 200, description = "Guild member and online counts, or placeholders with an error when unavailable", body = GuildStatsDto),
    ),
)]
pub async fn get_discord_stats(State(state): State<AppState>) -> impl IntoResponse {
    let stats = DiscordStatusService::new(&state.http_client, &state.config)
        .guild_stats()
        .await;

    (StatusCode::OK, Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/bot/status",
    tag = DISCORD_TAG,
    responses(
        (status = 200, description = "Whether the bot token is accepted by Discord", body = BotStatusDto),
    ),
)]
pub async fn get_bot_status(State(state): State<AppState>) -> impl IntoResponse {
    let status = DiscordStatusService::new(&state.http_client, &state.config)
        .bot_status()
        .await;

    (StatusCode::OK, Json(status))
}

#[utoipa::path(
    get,
    path = "/api/servers",
    tag = DISCORD_TAG,
    responses(
        (status = 200, description = "Guilds the bot has joined, or an empty list with a message", body = ServerListDto),
    ),
)]
pub async fn get_servers(State(state): State<AppState>) -> impl IntoResponse {
    let servers = DiscordStatusService::new(&state.http_client, &state.config)
        .servers()
        .await;

    (StatusCode::OK, Json(servers))
}
