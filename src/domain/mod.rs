//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod date;
pub mod exercise;
pub mod user;

pub use date::{ExerciseDate, InvalidDate};
pub use exercise::{
    ExerciseEntry, ExerciseLog, ExerciseLogResponse, ExerciseResponse, LogFilter, LoggedExercise,
    NewExercise,
};
pub use user::{User, UserId, UserResponse};
