//! Guild Portal Test Utils
//!
//! Provides shared testing utilities for the portal's Discord integration. Tests run
//! against a stub of the Discord REST API served on an ephemeral local port, so the
//! real request path (URL building, headers, status handling, JSON decoding) is
//! exercised without network access.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring canned Discord responses
//! - **TestContext**: Running stub with its base URL, credentials and request log
//! - **factory**: Builders for Discord JSON records (guilds, users, members)
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_guild_stats() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_discord_credentials()
//!         .with_guild(factory::guild::create_guild(1000))
//!         .build()
//!         .await?;
//!
//!     // Point the application at `test.api_url`...
//!     assert_eq!(test.request_count(), 0);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
mod stub;

/// Bot token used by `TestBuilder::with_discord_credentials`.
pub const TEST_BOT_TOKEN: &str = "test-bot-token";

/// Guild ID used by `TestBuilder::with_discord_credentials` and the guild factory.
pub const TEST_GUILD_ID: &str = "123456789012345678";
