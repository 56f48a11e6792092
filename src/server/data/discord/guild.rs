use crate::server::{
    data::discord::DiscordApiRepository, error::discord::DiscordError,
    model::discord::DiscordGuild,
};

/// Maximum page size Discord allows when listing guild members.
const MEMBER_LIST_LIMIT: &str = "1000";

impl<'a> DiscordApiRepository<'a> {
    /// Fetches a guild including its approximate member count.
    ///
    /// Calls `GET /guilds/{guild_id}?with_counts=true`.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID
    ///
    /// # Returns
    /// - `Ok(DiscordGuild)`: Guild with counts
    /// - `Err(DiscordError)`: Non-success status or transport/decode failure
    pub async fn get_guild(&self, guild_id: &str) -> Result<DiscordGuild, DiscordError> {
        self.get_json(&format!("/guilds/{}", guild_id), &[("with_counts", "true")])
            .await
    }

    /// Lists up to 1000 guild members, discarding the result.
    ///
    /// Only used to verify the bot may read the member list; the body is not decoded.
    pub async fn probe_guild_members(&self, guild_id: &str) -> Result<(), DiscordError> {
        self.send(
            &format!("/guilds/{}/members", guild_id),
            &[("limit", MEMBER_LIST_LIMIT)],
        )
        .await?;

        Ok(())
    }
}
