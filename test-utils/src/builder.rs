use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::http::StatusCode;
use serde_json::Value;
use tokio::net::TcpListener;

use crate::{
    context::TestContext,
    error::TestError,
    stub::{self, StubState},
    TEST_BOT_TOKEN, TEST_GUILD_ID,
};

/// Builder for creating test contexts backed by a Discord API stub.
///
/// Register canned responses per path, then call `build()` to start the stub on an
/// ephemeral local port. Paths without a registered response answer 404 with a
/// Discord-style error body.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, factory};
///
/// let test = TestBuilder::new()
///     .with_discord_credentials()
///     .with_guild(factory::guild::create_guild(1000))
///     .with_guild_members(factory::member::create_members(3))
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Token the stub expects in the `Authorization` header.
    bot_token: Option<String>,

    /// Guild ID handed to the application under test.
    guild_id: Option<String>,

    /// Canned responses keyed by request path.
    responses: HashMap<String, (StatusCode, Value)>,

    /// Skip starting the stub and point `api_url` at a closed port.
    unreachable: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no credentials and no responses.
    pub fn new() -> Self {
        Self {
            bot_token: None,
            guild_id: None,
            responses: HashMap::new(),
            unreachable: false,
        }
    }

    /// Sets the bot token the stub accepts.
    pub fn with_bot_token(mut self, token: impl Into<String>) -> Self {
        self.bot_token = Some(token.into());
        self
    }

    /// Sets the guild ID handed to the application.
    pub fn with_guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }

    /// Configures both `TEST_BOT_TOKEN` and `TEST_GUILD_ID`.
    pub fn with_discord_credentials(self) -> Self {
        self.with_bot_token(TEST_BOT_TOKEN)
            .with_guild_id(TEST_GUILD_ID)
    }

    /// Registers a canned response for an exact request path.
    ///
    /// # Arguments
    /// - `path` - Path relative to the API root, e.g. `/users/@me`
    /// - `status` - Status code to answer with
    /// - `body` - JSON body to answer with
    pub fn with_response(mut self, path: impl Into<String>, status: StatusCode, body: Value) -> Self {
        self.responses.insert(path.into(), (status, body));
        self
    }

    /// Makes `path` fail with `status` and Discord's error body.
    pub fn with_status(self, path: impl Into<String>, status: StatusCode) -> Self {
        self.with_response(path, status, stub::error_body(status))
    }

    /// Serves `guild` at `/guilds/{id}`, taking the ID from the record itself.
    pub fn with_guild(self, guild: Value) -> Self {
        let path = format!("/guilds/{}", guild["id"].as_str().unwrap_or(TEST_GUILD_ID));
        self.with_response(path, StatusCode::OK, guild)
    }

    /// Serves `members` at `/guilds/{TEST_GUILD_ID}/members`.
    pub fn with_guild_members(self, members: Value) -> Self {
        self.with_response(
            format!("/guilds/{}/members", TEST_GUILD_ID),
            StatusCode::OK,
            members,
        )
    }

    /// Serves `user` at `/users/@me`.
    pub fn with_current_user(self, user: Value) -> Self {
        self.with_response("/users/@me", StatusCode::OK, user)
    }

    /// Serves `guilds` at `/users/@me/guilds`.
    pub fn with_current_user_guilds(self, guilds: Value) -> Self {
        self.with_response("/users/@me/guilds", StatusCode::OK, guilds)
    }

    /// Points the context at a port nothing listens on, to provoke transport errors.
    pub fn with_unreachable_api(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Starts the stub and returns the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Stub running (or an unreachable URL when requested)
    /// - `Err(TestError::Io)` - Failed to bind a local port
    pub async fn build(self) -> Result<TestContext, TestError> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let api_url = format!("http://{}", listener.local_addr()?);

        if self.unreachable {
            drop(listener);
            return Ok(TestContext::new(
                api_url,
                self.bot_token,
                self.guild_id,
                requests,
                None,
            ));
        }

        let app = stub::router(StubState {
            responses: Arc::new(self.responses),
            requests: requests.clone(),
            bot_token: self.bot_token.clone(),
        });

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(TestContext::new(
            api_url,
            self.bot_token,
            self.guild_id,
            requests,
            Some(server),
        ))
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory;

    /// Tests that the stub answers registered paths and records the request.
    #[tokio::test]
    async fn serves_registered_response() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_discord_credentials()
            .with_current_user(factory::user::create_current_user("42", "Akane"))
            .build()
            .await?;

        let response = reqwest::Client::new()
            .get(format!("{}/users/@me", test.api_url))
            .header("Authorization", format!("Bot {}", TEST_BOT_TOKEN))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["username"], "Akane");

        let request = test.request_to("/users/@me").unwrap();
        assert_eq!(request.method, "GET");
        assert_eq!(
            request.authorization,
            Some(format!("Bot {}", TEST_BOT_TOKEN))
        );

        Ok(())
    }

    /// Tests that a wrong token is rejected with 401.
    #[tokio::test]
    async fn rejects_wrong_token() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_discord_credentials()
            .with_current_user(factory::user::create_current_user("42", "Akane"))
            .build()
            .await?;

        let response = reqwest::Client::new()
            .get(format!("{}/users/@me", test.api_url))
            .header("Authorization", "Bot wrong")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
        assert_eq!(test.request_count(), 1);

        Ok(())
    }

    /// Tests that unknown paths answer 404.
    #[tokio::test]
    async fn unknown_path_is_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let response = reqwest::get(format!("{}/guilds/1", test.api_url))
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Tests that an unreachable API refuses connections.
    #[tokio::test]
    async fn unreachable_api_refuses_connections() -> Result<(), TestError> {
        let test = TestBuilder::new().with_unreachable_api().build().await?;

        let result = reqwest::get(format!("{}/users/@me", test.api_url)).await;

        assert!(result.is_err());
        assert_eq!(test.request_count(), 0);

        Ok(())
    }
}
