//! Infrastructure layer - Storage backing the services
//!
//! This module handles all storage concerns:
//! - Repository contracts the services depend on
//! - The in-memory store implementing them

pub mod memory;
pub mod repositories;

pub use memory::MemoryStore;
pub use repositories::{ExerciseRepository, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockExerciseRepository, MockUserRepository};
