use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned for any fault that escapes a request handler.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct ErrorDto {
    pub error: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct HealthDto {
    pub status: String,
    /// ISO-8601 UTC timestamp with millisecond precision
    pub timestamp: String,
    /// Seconds since the server started
    pub uptime: f64,
}

impl HealthDto {
    pub fn healthy(now: DateTime<Utc>, uptime: f64) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            uptime,
        }
    }
}
