//! Partial guild factory for `GET /users/@me/guilds` responses.

use serde_json::{json, Value};

use crate::factory::helpers::{next_id, pad_icon_hash};

/// Factory for creating the partial guilds Discord lists for the current user.
pub struct UserGuildFactory {
    id: String,
    name: String,
    icon: Option<String>,
    approximate_member_count: Option<u64>,
}

impl UserGuildFactory {
    /// Creates a new UserGuildFactory with default values.
    ///
    /// Defaults:
    /// - id: next unique snowflake
    /// - name: `"Guild {id}"`
    /// - icon: `None`
    /// - approximate_member_count: `None`
    pub fn new() -> Self {
        let id = next_id();
        Self {
            name: format!("Guild {}", id),
            id,
            icon: None,
            approximate_member_count: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the icon hash, padded to Discord's hash length.
    pub fn icon(mut self, icon: Option<&str>) -> Self {
        self.icon = icon.map(pad_icon_hash);
        self
    }

    pub fn approximate_member_count(mut self, count: Option<u64>) -> Self {
        self.approximate_member_count = count;
        self
    }

    pub fn build(self) -> Value {
        let mut guild = json!({
            "id": self.id,
            "name": self.name,
            "icon": self.icon,
            "banner": null,
            "owner": false,
            "permissions": "2147483647",
            "features": []
        });

        if let Some(count) = self.approximate_member_count {
            guild["approximate_member_count"] = json!(count);
        }

        guild
    }
}

impl Default for UserGuildFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a partial guild with the given ID, name and optional icon hash.
///
/// # Examples
///
/// ```rust,ignore
/// // Icon hash is padded to 32 characters
/// let guild = create_user_guild("1", "Test Guild", Some("abc123"));
/// assert_eq!(guild["icon"], "abc12300000000000000000000000000");
/// ```
pub fn create_user_guild(id: &str, name: &str, icon: Option<&str>) -> Value {
    UserGuildFactory::new().id(id).name(name).icon(icon).build()
}
