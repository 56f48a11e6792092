//! Factory methods for creating Discord API records.
//!
//! Each record type has its own module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Records are
//! `serde_json::Value`s shaped like Discord's REST responses so they can be served
//! by the stub verbatim.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let guild = factory::guild::create_guild(1000);
//! let user = factory::user::create_current_user("42", "Akane");
//! let guilds = serde_json::json!([
//!     factory::user_guild::create_user_guild("1", "First", Some("abc")),
//!     factory::user_guild::create_user_guild("2", "Second", None),
//! ]);
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let guild = factory::guild::GuildFactory::new()
//!     .name("Koharu's Lounge")
//!     .approximate_member_count(None)
//!     .member_count(Some(12))
//!     .build();
//! ```

pub mod guild;
pub mod helpers;
pub mod member;
pub mod user;
pub mod user_guild;
