//! Service layer between the controllers and the Discord repositories.
//!
//! Services decide whether a request can be made at all, combine repository calls
//! and turn every outcome, including upstream failures, into a response DTO.

pub mod discord;
