//! HTTP request handlers.

pub mod exercise_handler;
pub mod user_handler;

pub use exercise_handler::exercise_routes;
pub use user_handler::user_routes;
