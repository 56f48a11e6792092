//! Guild factory for `GET /guilds/{guild.id}` responses.

use serde_json::{json, Value};

use crate::TEST_GUILD_ID;

/// Factory for creating guild records with counts.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild::GuildFactory;
///
/// let guild = GuildFactory::new()
///     .name("Support Server")
///     .approximate_member_count(Some(250))
///     .build();
/// ```
pub struct GuildFactory {
    id: String,
    name: String,
    approximate_member_count: Option<u64>,
    member_count: Option<u64>,
}

impl GuildFactory {
    /// Creates a new GuildFactory with default values.
    ///
    /// Defaults:
    /// - id: `TEST_GUILD_ID`
    /// - name: `"Test Guild"`
    /// - approximate_member_count: `Some(100)`
    /// - member_count: `None` (Discord omits it on REST responses)
    pub fn new() -> Self {
        Self {
            id: TEST_GUILD_ID.to_string(),
            name: "Test Guild".to_string(),
            approximate_member_count: Some(100),
            member_count: None,
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

    pub fn approximate_member_count(mut self, count: Option<u64>) -> Self {
        self.approximate_member_count = count;
        self
    }

    pub fn member_count(mut self, count: Option<u64>) -> Self {
        self.member_count = count;
        self
    }

    /// Builds the guild JSON, omitting unset counts the way Discord does.
    pub fn build(self) -> Value {
        let mut guild = json!({
            "id": self.id,
            "name": self.name,
            "icon": null,
            "owner_id": "80351110224678912",
            "verification_level": 1,
            "roles": [],
            "emojis": [],
            "features": ["COMMUNITY"],
            "approximate_presence_count": 0
        });

        if let Some(count) = self.approximate_member_count {
            guild["approximate_member_count"] = json!(count);
        }
        if let Some(count) = self.member_count {
            guild["member_count"] = json!(count);
        }

        guild
    }
}

impl Default for GuildFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a `TEST_GUILD_ID` guild with the given approximate member count.
pub fn create_guild(approximate_member_count: u64) -> Value {
    GuildFactory::new()
        .approximate_member_count(Some(approximate_member_count))
        .build()
}
