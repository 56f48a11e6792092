use crate::{
    model::discord::{CountValue, GuildStatsDto, FETCH_FAILED},
    server::service::discord::DiscordStatusService,
};

impl<'a> DiscordStatusService<'a> {
    /// Member and online counts for the configured guild.
    ///
    /// Requires both bot token and guild ID; without them no request is made. The
    /// guild is fetched first, then the member list is probed to confirm the bot can
    /// see members. Discord only reports presence over the gateway, so the online
    /// count is an estimate derived from the member count.
    ///
    /// # Returns
    /// - Full success: numeric counts, `serverName` and `success: true`
    /// - Probe failed: numeric `memberCount`, `onlineCount: "fetch failed"`, no `success`
    /// - Guild fetch failed: both counts `"fetch failed"` and the error message
    /// - Not configured: both counts `"not configured"` and a configuration error
    pub async fn guild_stats(&self) -> GuildStatsDto {
        let Some((bot_token, guild_id)) = self.config.discord_guild_credentials() else {
            return GuildStatsDto::not_configured();
        };

        let repo = self.repository(bot_token);

        let guild = match repo.get_guild(guild_id).await {
            Ok(guild) => guild,
            Err(e) => {
                tracing::error!("Failed to fetch guild {}: {}", guild_id, e);
                return GuildStatsDto::fetch_failed(e.to_string());
            }
        };

        let member_count = guild.member_count();

        let online_count = match repo.probe_guild_members(guild_id).await {
            Ok(()) => member_count.map(estimate_online_count),
            Err(e) => {
                tracing::warn!("Failed to list members of guild {}: {}", guild_id, e);
                None
            }
        };

        let success = member_count.is_some() && online_count.is_some();

        GuildStatsDto {
            member_count: count_or_fetch_failed(member_count),
            online_count: count_or_fetch_failed(online_count),
            server_name: Some(guild.name),
            error: None,
            success: success.then_some(true),
        }
    }
}

/// Estimated online members: 30% of the member count, rounded down.
///
/// Computed per ten members so large counts cannot overflow.
pub fn estimate_online_count(member_count: u64) -> u64 {
    member_count / 10 * 3 + member_count % 10 * 3 / 10
}

fn count_or_fetch_failed(count: Option<u64>) -> CountValue {
    count
        .map(CountValue::from)
        .unwrap_or_else(|| CountValue::text(FETCH_FAILED))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the online estimate rounds 30% down.
    #[test]
    fn estimates_thirty_percent_rounded_down() {
        assert_eq!(estimate_online_count(1000), 300);
        assert_eq!(estimate_online_count(7), 2);
        assert_eq!(estimate_online_count(9), 2);
        assert_eq!(estimate_online_count(13), 3);
        assert_eq!(estimate_online_count(0), 0);
    }

    /// Tests the estimate near the top of the range does not overflow.
    #[test]
    fn estimate_does_not_overflow() {
        assert_eq!(estimate_online_count(u64::MAX), u64::MAX / 10 * 3 + 1);
    }
}
