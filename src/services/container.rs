//! Service Container - Centralized service access.
//!
//! Owns the application's services and the store they share. Built once at
//! startup; handlers reach the services through `AppState`.

use std::sync::Arc;

use super::{ExerciseService, ExerciseTracker, UserManager, UserService};
use crate::infra::MemoryStore;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get exercise service
    fn exercises(&self) -> Arc<dyn ExerciseService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
    exercise_service: Arc<dyn ExerciseService>,
}

impl Services {
    /// Create service container backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        let user_service = Arc::new(UserManager::new(store.clone()));
        let exercise_service = Arc::new(ExerciseTracker::new(store));

        Self {
            user_service,
            exercise_service,
        }
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn exercises(&self) -> Arc<dyn ExerciseService> {
        self.exercise_service.clone()
    }
}
