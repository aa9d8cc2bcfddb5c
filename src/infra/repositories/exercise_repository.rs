//! Exercise log repository contract.

use async_trait::async_trait;

use crate::domain::{ExerciseEntry, ExerciseLog, User, UserId};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Exercise log repository trait for dependency injection.
///
/// Both operations resolve the owning user in the same step as the log
/// access, so `None` always means the user does not exist and nothing
/// was read or written.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Append an entry to the end of the user's log
    async fn append(&self, user_id: &UserId, entry: ExerciseEntry) -> AppResult<Option<User>>;

    /// Fetch the user's full log in insertion order
    async fn find_log(&self, user_id: &UserId) -> AppResult<Option<ExerciseLog>>;
}
