//! Exercise Tracker - A minimal exercise logging REST API
//!
//! Clients create users, log exercises against them and query a
//! filtered, limited activity log. All data is held in memory for the
//! lifetime of the process.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Users, exercise entries, calendar dates, log filtering
//! - **services**: Application use cases
//! - **infra**: Repository contracts and the in-memory store
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server on the port from $PORT (default 3000)
//! cargo run -- serve
//!
//! # Override the port
//! cargo run -- serve --port 8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{ExerciseDate, ExerciseEntry, User, UserId};
pub use errors::{AppError, AppResult};
pub use infra::MemoryStore;
