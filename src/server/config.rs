use std::path::PathBuf;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_API_URL: &str = "https://discord.com/api/v10";
const DISCORD_CDN_URL: &str = "https://cdn.discordapp.com";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PUBLIC_DIR: &str = "public";

/// Immutable application configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub discord_bot_token: Option<String>,
    pub discord_server_id: Option<String>,

    pub host: String,
    pub port: u16,

    pub discord_api_url: String,
    pub discord_cdn_url: String,

    pub public_dir: PathBuf,

    /// Reveals fault details in 500 responses
    pub development: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value: value.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            discord_bot_token: var("DISCORD_BOT_TOKEN"),
            discord_server_id: var("DISCORD_SERVER_ID"),
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            discord_api_url: base_url("DISCORD_API_URL", var("DISCORD_API_URL"), DISCORD_API_URL)?,
            discord_cdn_url: base_url("DISCORD_CDN_URL", var("DISCORD_CDN_URL"), DISCORD_CDN_URL)?,
            public_dir: PathBuf::from(
                var("PUBLIC_DIR").unwrap_or_else(|| DEFAULT_PUBLIC_DIR.to_string()),
            ),
            development: var("APP_ENV").is_some_and(|env| env == "development"),
        })
    }

    /// Bot token and guild id, only when both are present.
    pub fn discord_guild_credentials(&self) -> Option<(&str, &str)> {
        Some((
            self.discord_bot_token.as_deref()?,
            self.discord_server_id.as_deref()?,
        ))
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Configuration pointing at a Discord stub, serving the repository's `public/`.
    #[cfg(test)]
    pub fn from_test_context(test: &test_utils::context::TestContext) -> Self {
        Self {
            discord_bot_token: test.bot_token.clone(),
            discord_server_id: test.guild_id.clone(),
            host: "127.0.0.1".to_string(),
            port: 0,
            discord_api_url: test.api_url.clone(),
            discord_cdn_url: DISCORD_CDN_URL.to_string(),
            public_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_PUBLIC_DIR),
            development: false,
        }
    }
}

/// Validates a base URL and strips its trailing slash so paths can be appended.
fn base_url(name: &str, value: Option<String>, default: &str) -> Result<String, ConfigError> {
    let Some(value) = value else {
        return Ok(default.to_string());
    };

    Url::parse(&value).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.clone(),
        reason: e.to_string(),
    })?;

    Ok(value.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|name| vars.get(name).cloned())
    }

    /// Tests defaults when no variables are set.
    ///
    /// Expected: port 3000, Discord production URLs, no credentials
    #[test]
    fn uses_defaults_for_empty_environment() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.discord_api_url, "https://discord.com/api/v10");
        assert_eq!(config.discord_cdn_url, "https://cdn.discordapp.com");
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert!(config.discord_bot_token.is_none());
        assert!(config.discord_server_id.is_none());
        assert!(!config.development);
    }

    /// Tests that empty values count as missing credentials.
    #[test]
    fn treats_empty_values_as_unset() {
        let config = config_from(&[("DISCORD_BOT_TOKEN", ""), ("DISCORD_SERVER_ID", "  ")]).unwrap();

        assert!(config.discord_bot_token.is_none());
        assert!(config.discord_server_id.is_none());
        assert!(config.discord_guild_credentials().is_none());
    }

    /// Tests that guild credentials require both token and guild id.
    #[test]
    fn requires_both_guild_credentials() {
        let token_only = config_from(&[("DISCORD_BOT_TOKEN", "abc")]).unwrap();
        assert!(token_only.discord_guild_credentials().is_none());

        let both = config_from(&[("DISCORD_BOT_TOKEN", "abc"), ("DISCORD_SERVER_ID", "42")]).unwrap();
        assert_eq!(both.discord_guild_credentials(), Some(("abc", "42")));
    }

    /// Tests that an unparsable port is rejected.
    ///
    /// Expected: Err(ConfigError::InvalidEnvVar) naming PORT
    #[test]
    fn rejects_invalid_port() {
        let result = config_from(&[("PORT", "eighty")]);

        match result {
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { name, value, .. })) => {
                assert_eq!(name, "PORT");
                assert_eq!(value, "eighty");
            }
            other => panic!("Expected InvalidEnvVar, got: {:?}", other),
        }
    }

    /// Tests that overridden base URLs lose their trailing slash.
    #[test]
    fn trims_trailing_slash_from_api_url() {
        let config = config_from(&[("DISCORD_API_URL", "http://127.0.0.1:9000/api/")]).unwrap();

        assert_eq!(config.discord_api_url, "http://127.0.0.1:9000/api");
    }

    /// Tests that a malformed base URL is rejected.
    #[test]
    fn rejects_malformed_cdn_url() {
        let result = config_from(&[("DISCORD_CDN_URL", "not a url")]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }

    /// Tests development mode detection.
    #[test]
    fn enables_development_mode() {
        let config = config_from(&[("APP_ENV", "development"), ("PORT", "8080")]).unwrap();

        assert!(config.development);
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
    }
}
