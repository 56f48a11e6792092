//! HTTP server: static site plus the Discord status API.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO responses
//! - **Service Layer** (`service/`) - Discord proxy operations and failure absorption
//! - **Data Layer** (`data/`) - Authenticated Discord REST calls and JSON decoding
//! - **Model Layer** (`model/`) - Discord record models
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Fault detail exposure in development mode
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (config, HTTP client, start time)
//! - **Startup** (`startup`) - Tracing, HTTP client and shutdown signal setup
//! - **Router** (`router`) - Axum route configuration and layers
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** builds a service from the shared state
//! 3. **Service** checks configuration and calls the data layer
//! 4. **Data** calls Discord and decodes the response
//! 5. **Service** maps the result, or the failure, to a DTO
//! 6. **Controller** returns the DTO with status 200

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
