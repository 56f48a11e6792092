use serde::Deserialize;

/// The bot's own user, returned by `GET /users/@me`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DiscordCurrentUser {
    pub id: String,
    pub username: String,
    /// `"0"` for accounts migrated to unique usernames.
    #[serde(default)]
    pub discriminator: Option<String>,
}
