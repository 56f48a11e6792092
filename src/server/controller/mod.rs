//! HTTP request handlers.
//!
//! The Discord handlers always answer 200; their payloads carry any failure. Page
//! handlers return `AppError` for unreadable files, which renders as a 500.

pub mod discord;
pub mod docs;
pub mod health;
pub mod page;

#[cfg(test)]
mod test;
