//! Server-side models of Discord API records.
//!
//! Records are deserialized at the repository boundary and converted to DTOs by the
//! service layer. They keep only the fields the portal exposes.

pub mod discord;
