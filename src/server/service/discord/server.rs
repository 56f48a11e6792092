use crate::{
    model::discord::{
        CountValue, ServerDto, ServerListDto, BOT_CONFIG_NOT_FOUND, MEMBER_COUNT_UNKNOWN,
        SERVERS_FETCH_FAILED,
    },
    server::{
        error::discord::DiscordError, model::discord::DiscordUserGuild,
        service::discord::DiscordStatusService,
    },
};

impl<'a> DiscordStatusService<'a> {
    /// Lists the guilds the bot has joined.
    ///
    /// # Returns
    /// - Success: every guild with its icon URL and member count, plus `count` and `success`
    /// - Rejected request: empty list with a retrieval failure message
    /// - Transport or decode failure: empty list with the error text
    /// - No token configured: empty list with a configuration message
    pub async fn servers(&self) -> ServerListDto {
        let Some(bot_token) = self.config.discord_bot_token.as_deref() else {
            return ServerListDto::empty(BOT_CONFIG_NOT_FOUND);
        };

        match self.repository(bot_token).get_current_user_guilds().await {
            Ok(guilds) => {
                let servers: Vec<ServerDto> = guilds
                    .into_iter()
                    .map(|guild| self.server_dto(guild))
                    .collect();

                ServerListDto {
                    count: Some(servers.len()),
                    servers,
                    success: Some(true),
                    message: None,
                }
            }
            Err(DiscordError::Status(status)) => {
                tracing::warn!("Discord refused to list the bot's guilds: {}", status);
                ServerListDto::empty(SERVERS_FETCH_FAILED)
            }
            Err(e) => {
                tracing::error!("Servers API Error: {}", e);
                ServerListDto::empty(e.to_string())
            }
        }
    }

    fn server_dto(&self, guild: DiscordUserGuild) -> ServerDto {
        ServerDto {
            icon: guild.icon_url(&self.config.discord_cdn_url),
            member_count: guild
                .approximate_member_count
                .filter(|count| *count > 0)
                .map(CountValue::from)
                .unwrap_or_else(|| CountValue::text(MEMBER_COUNT_UNKNOWN)),
            id: guild.id,
            name: guild.name,
        }
    }
}
