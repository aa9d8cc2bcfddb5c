//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services.

use std::sync::Arc;

use crate::config::Config;
use crate::services::{ExerciseService, ServiceContainer, Services, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Exercise log service
    pub exercise_service: Arc<dyn ExerciseService>,
    /// Runtime configuration (static content locations)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state backed by a fresh in-memory store.
    ///
    /// The store lives exactly as long as the returned state and its clones.
    pub fn from_config(config: Config) -> Self {
        let container = Services::in_memory();
        Self::new(container.users(), container.exercises(), config)
    }

    /// Create new application state with manually injected services.
    pub fn new(
        user_service: Arc<dyn UserService>,
        exercise_service: Arc<dyn ExerciseService>,
        config: Config,
    ) -> Self {
        Self {
            user_service,
            exercise_service,
            config: Arc::new(config),
        }
    }
}
