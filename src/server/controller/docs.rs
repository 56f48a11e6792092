use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        discord::{BotState, BotStatusDto, CountValue, GuildStatsDto, ServerDto, ServerListDto},
    },
    server::controller::{discord, health},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        discord::get_discord_stats,
        discord::get_bot_status,
        discord::get_servers,
        health::get_health,
    ),
    components(schemas(
        BotState,
        BotStatusDto,
        CountValue,
        ErrorDto,
        GuildStatsDto,
        HealthDto,
        ServerDto,
        ServerListDto,
    )),
    tags(
        (name = "discord", description = "Discord guild and bot status. Always answers 200; failures are described in the body."),
        (name = "health", description = "Liveness check"),
    ),
)]
pub struct ApiDoc;

pub async fn get_openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
