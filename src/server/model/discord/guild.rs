use serde::Deserialize;

/// Guild returned by `GET /guilds/{guild.id}?with_counts=true`.
///
/// Only the fields the portal reads are modelled; everything else Discord sends is
/// ignored during deserialization.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DiscordGuild {
    pub id: String,
    pub name: String,
    /// Present when the guild is requested with `with_counts=true`.
    #[serde(default)]
    pub approximate_member_count: Option<u64>,
    /// Only sent for guilds delivered over the gateway; kept as a fallback.
    #[serde(default)]
    pub member_count: Option<u64>,
}

impl DiscordGuild {
    /// Best known member count, ignoring zero values.
    pub fn member_count(&self) -> Option<u64> {
        self.approximate_member_count
            .filter(|count| *count > 0)
            .or(self.member_count.filter(|count| *count > 0))
    }
}

/// Partial guild returned by `GET /users/@me/guilds`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DiscordUserGuild {
    pub id: String,
    pub name: String,
    /// Icon hash, `None` when the guild uses the default icon.
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub approximate_member_count: Option<u64>,
}

impl DiscordUserGuild {
    /// Builds the PNG icon URL on the given CDN, if the guild has an icon.
    ///
    /// # Arguments
    /// - `cdn_url` - CDN base URL without trailing slash
    pub fn icon_url(&self, cdn_url: &str) -> Option<String> {
        self.icon
            .as_ref()
            .filter(|hash| !hash.is_empty())
            .map(|hash| format!("{}/icons/{}/{}.png", cdn_url, self.id, hash))
    }
}
