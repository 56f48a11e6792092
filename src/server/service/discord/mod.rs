//! Discord status proxy.
//!
//! Each operation returns a complete DTO and never an error: missing configuration,
//! rejected requests and transport failures are all folded into the payload so the
//! front end only has to inspect the body. Failures are logged here, at the point
//! where they are absorbed.

pub mod bot;
pub mod guild;
pub mod server;

use crate::server::{config::Config, data::discord::DiscordApiRepository};

pub struct DiscordStatusService<'a> {
    http_client: &'a reqwest::Client,
    config: &'a Config,
}

impl<'a> DiscordStatusService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a Config) -> Self {
        Self {
            http_client,
            config,
        }
    }

    fn repository(&self, bot_token: &'a str) -> DiscordApiRepository<'a> {
        let config: &'a Config = self.config;

        DiscordApiRepository::new(self.http_client, &config.discord_api_url, bot_token)
    }
}

#[cfg(test)]
mod test;
