//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through
//! Axum's state extraction. Nothing in it is mutated while serving requests.

use std::{sync::Arc, time::Instant};

use crate::server::config::Config;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `Arc<Config>` is a reference-counted pointer
/// - `reqwest::Client` uses an `Arc` internally
/// - `Instant` is `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Configuration read from the environment at startup.
    pub config: Arc<Config>,

    /// HTTP client for Discord API requests.
    ///
    /// Configured without redirects; one client is shared so connections are pooled.
    pub http_client: reqwest::Client,

    /// Moment the state was built, used to report uptime.
    pub started_at: Instant,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `config` - Application configuration
    /// - `http_client` - HTTP client for Discord API requests
    pub fn new(config: Config, http_client: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            http_client,
            started_at: Instant::now(),
        }
    }

    /// Seconds elapsed since the state was created.
    pub fn uptime(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
