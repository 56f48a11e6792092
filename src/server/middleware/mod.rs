//! Request/response processing layers.

pub mod fault;
