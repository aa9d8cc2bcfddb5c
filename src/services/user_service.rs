//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::MSG_USERNAME_REQUIRED;
use crate::domain::{User, UserId};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user with an empty exercise log
    async fn create_user(&self, username: String) -> AppResult<User>;

    /// List all users in creation order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: &UserId) -> AppResult<User>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, username: String) -> AppResult<User> {
        if username.is_empty() {
            return Err(AppError::validation(MSG_USERNAME_REQUIRED));
        }

        let user = self.users.create(username).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "User created");
        Ok(user)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    async fn get_user(&self, id: &UserId) -> AppResult<User> {
        self.users.find_by_id(id).await?.ok_or_user_not_found()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_create_user_rejects_empty_username() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let err = service.create_user(String::new()).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(ref m) if m == "Username is required"));
    }

    #[tokio::test]
    async fn test_create_user_delegates_to_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .with(eq("alice".to_string()))
            .times(1)
            .returning(|name| Ok(User::new(name)));

        let service = UserManager::new(Arc::new(repo));
        let user = service.create_user("alice".to_string()).await.unwrap();

        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        let err = service.get_user(&UserId::from("missing")).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
