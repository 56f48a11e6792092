use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

const USER_AGENT: &str = concat!(
    "DiscordBot (",
    env!("CARGO_PKG_NAME"),
    ", ",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG`; without it the application logs at `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the HTTP client used for all Discord API calls.
///
/// Redirects are disabled so a misbehaving upstream cannot bounce the bot token to
/// another host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client ready for use
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Logs a warning for each Discord setting that is missing.
///
/// The server still starts; the affected endpoints answer with "not configured"
/// payloads instead of calling Discord.
pub fn check_discord_config(config: &Config) {
    if config.discord_bot_token.is_none() {
        tracing::warn!("Warning: DISCORD_BOT_TOKEN is not set");
    }
    if config.discord_server_id.is_none() {
        tracing::warn!("Warning: DISCORD_SERVER_ID is not set");
    }
}

/// Resolves once SIGINT or SIGTERM is received.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("SIGINT received, shutting down gracefully"),
        _ = terminate => tracing::info!("SIGTERM received, shutting down gracefully"),
    }
}
