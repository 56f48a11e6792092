use crate::server::{
    data::discord::DiscordApiRepository,
    error::discord::DiscordError,
    model::discord::{DiscordCurrentUser, DiscordUserGuild},
};

impl<'a> DiscordApiRepository<'a> {
    /// Retrieves the bot's own user via `GET /users/@me`.
    pub async fn get_current_user(&self) -> Result<DiscordCurrentUser, DiscordError> {
        self.get_json("/users/@me", &[]).await
    }

    /// Lists the guilds the bot is a member of via `GET /users/@me/guilds`.
    pub async fn get_current_user_guilds(&self) -> Result<Vec<DiscordUserGuild>, DiscordError> {
        self.get_json("/users/@me/guilds", &[]).await
    }
}
