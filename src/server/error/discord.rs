use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the Discord REST API.
///
/// These errors never reach the HTTP caller directly. The Discord service absorbs
/// them and embeds their message into an always-200 JSON payload.
#[derive(Error, Debug)]
pub enum DiscordError {
    /// Discord answered with a non-success status code.
    #[error("Discord API Error: {}", .0.as_u16())]
    Status(StatusCode),

    /// The request could not be sent or the response body could not be decoded.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}
