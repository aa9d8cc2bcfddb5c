//! User repository contract.

use async_trait::async_trait;

use crate::domain::{User, UserId};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user and open an empty exercise log for it
    async fn create(&self, username: String) -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>>;

    /// List all users in creation order
    async fn list(&self) -> AppResult<Vec<User>>;
}
