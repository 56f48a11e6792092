//! Upstream access layer.
//!
//! Repositories here perform the raw Discord REST calls: URL building, bot
//! authorization, status checks and JSON decoding. They return Discord record models
//! from `server::model` and leave all fallback decisions to the service layer.

pub mod discord;
