pub mod guild;
pub mod user;

use reqwest::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    Response,
};
use serde::de::DeserializeOwned;

use crate::server::error::discord::DiscordError;

/// Authenticated access to the Discord REST API as the configured bot.
///
/// Borrows the shared HTTP client and configuration values for the duration of a
/// request; constructing one is free.
pub struct DiscordApiRepository<'a> {
    http_client: &'a reqwest::Client,
    api_url: &'a str,
    bot_token: &'a str,
}

impl<'a> DiscordApiRepository<'a> {
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `api_url` - Discord API base URL without trailing slash
    /// - `bot_token` - Bot token sent as `Authorization: Bot <token>`
    pub fn new(http_client: &'a reqwest::Client, api_url: &'a str, bot_token: &'a str) -> Self {
        Self {
            http_client,
            api_url,
            bot_token,
        }
    }

    /// Sends an authorized GET request and rejects non-success statuses.
    ///
    /// # Returns
    /// - `Ok(Response)` - Discord answered with a 2xx status
    /// - `Err(DiscordError::Status)` - Discord answered with any other status
    /// - `Err(DiscordError::Request)` - The request could not be completed
    async fn send(&self, path: &str, query: &[(&str, &str)]) -> Result<Response, DiscordError> {
        let response = self
            .http_client
            .get(format!("{}{}", self.api_url, path))
            .query(query)
            .header(AUTHORIZATION, format!("Bot {}", self.bot_token))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Discord responded {} for {}", status, path);
            return Err(DiscordError::Status(status));
        }

        Ok(response)
    }

    /// Sends an authorized GET request and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, DiscordError> {
        let record = self.send(path, query).await?.json::<T>().await?;

        Ok(record)
    }
}

#[cfg(test)]
mod test;
