use crate::{
    model::discord::{BotState, BotStatusDto, BOT_AUTH_FAILED, BOT_CONFIG_NOT_FOUND, BOT_RUNNING},
    server::{error::discord::DiscordError, service::discord::DiscordStatusService},
};

impl<'a> DiscordStatusService<'a> {
    /// Reports whether the bot token is accepted by Discord.
    ///
    /// # Returns
    /// - Token valid: `online` with the bot's username, discriminator and ID
    /// - Token rejected: `offline` with an authentication failure message
    /// - Transport or decode failure: `offline` with the error text
    /// - No token configured: `offline` with a configuration message
    pub async fn bot_status(&self) -> BotStatusDto {
        let Some(bot_token) = self.config.discord_bot_token.as_deref() else {
            return BotStatusDto::offline(BOT_CONFIG_NOT_FOUND);
        };

        match self.repository(bot_token).get_current_user().await {
            Ok(user) => BotStatusDto {
                status: BotState::Online,
                username: Some(user.username),
                discriminator: user.discriminator,
                id: Some(user.id),
                message: BOT_RUNNING.to_string(),
            },
            Err(DiscordError::Status(status)) => {
                tracing::warn!("Discord rejected the bot token: {}", status);
                BotStatusDto::offline(BOT_AUTH_FAILED)
            }
            Err(e) => {
                tracing::error!("Bot Status Error: {}", e);
                BotStatusDto::offline(e.to_string())
            }
        }
    }
}
