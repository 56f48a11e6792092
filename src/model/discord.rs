use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NOT_CONFIGURED: &str = "not configured";
pub const FETCH_FAILED: &str = "fetch failed";
pub const MEMBER_COUNT_UNKNOWN: &str = "N/A";

pub const DISCORD_CONFIG_NOT_FOUND: &str = "Discord configuration not found";
pub const BOT_CONFIG_NOT_FOUND: &str = "Bot configuration not found";
pub const BOT_RUNNING: &str = "Bot is running normally";
pub const BOT_AUTH_FAILED: &str = "Bot authentication failed";
pub const SERVERS_FETCH_FAILED: &str = "failed to retrieve server information";

/// A count that is either a number or a human readable placeholder such as
/// `"fetch failed"`. The front end renders whichever it receives.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum CountValue {
    Count(u64),
    Text(String),
}

impl CountValue {
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<u64> for CountValue {
    fn from(count: u64) -> Self {
        Self::Count(count)
    }
}

/// Response of `GET /api/discord/stats`.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuildStatsDto {
    pub member_count: CountValue,
    pub online_count: CountValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

impl GuildStatsDto {
    pub fn not_configured() -> Self {
        Self {
            member_count: CountValue::text(NOT_CONFIGURED),
            online_count: CountValue::text(NOT_CONFIGURED),
            server_name: None,
            error: Some(DISCORD_CONFIG_NOT_FOUND.to_string()),
            success: None,
        }
    }

    pub fn fetch_failed(error: String) -> Self {
        Self {
            member_count: CountValue::text(FETCH_FAILED),
            online_count: CountValue::text(FETCH_FAILED),
            server_name: None,
            error: Some(error),
            success: None,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BotState {
    Online,
    Offline,
}

/// Response of `GET /api/bot/status`.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct BotStatusDto {
    pub status: BotState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub message: String,
}

impl BotStatusDto {
    pub fn offline(message: impl Into<String>) -> Self {
        Self {
            status: BotState::Offline,
            username: None,
            discriminator: None,
            id: None,
            message: message.into(),
        }
    }
}

/// A guild the bot is a member of, as shown on the servers page.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerDto {
    pub id: String,
    pub name: String,
    /// CDN URL of the guild icon, `null` when the guild has none
    pub icon: Option<String>,
    pub member_count: CountValue,
}

/// Response of `GET /api/servers`.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct ServerListDto {
    pub servers: Vec<ServerDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ServerListDto {
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            servers: Vec::new(),
            count: None,
            success: None,
            message: Some(message.into()),
        }
    }
}
