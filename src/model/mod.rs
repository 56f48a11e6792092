//! Data transfer objects shared with the browser front end.
//!
//! Field names follow the JSON the front end reads, so most structs rename to
//! camelCase on the wire.

pub mod api;
pub mod discord;
