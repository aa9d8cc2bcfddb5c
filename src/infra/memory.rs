//! In-memory store backing both repositories.
//!
//! Users and exercise logs live behind a single lock so that creating a
//! user (which writes both maps) and appending to a log (which checks the
//! user, then writes) are atomic with respect to concurrent requests.
//! Nothing survives a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::repositories::{ExerciseRepository, UserRepository};
use crate::domain::{ExerciseEntry, ExerciseLog, User, UserId};
use crate::errors::AppResult;

#[derive(Debug, Default)]
struct Tables {
    /// Creation order
    users: Vec<User>,
    /// Position of each user in `users`
    index: HashMap<UserId, usize>,
    logs: HashMap<UserId, Vec<ExerciseEntry>>,
}

impl Tables {
    fn user(&self, id: &UserId) -> Option<&User> {
        self.index.get(id).and_then(|&pos| self.users.get(pos))
    }
}

/// Process-lifetime store for users and their exercise logs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, username: String) -> AppResult<User> {
        let mut tables = self.tables.write().await;

        let mut user = User::new(username);
        while tables.index.contains_key(&user.id) {
            user.id = UserId::generate();
        }

        let position = tables.users.len();
        tables.index.insert(user.id.clone(), position);
        tables.logs.insert(user.id.clone(), Vec::new());
        tables.users.push(user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        Ok(self.tables.read().await.user(id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.tables.read().await.users.clone())
    }
}

#[async_trait]
impl ExerciseRepository for MemoryStore {
    async fn append(&self, user_id: &UserId, entry: ExerciseEntry) -> AppResult<Option<User>> {
        let mut tables = self.tables.write().await;

        let Some(user) = tables.user(user_id).cloned() else {
            return Ok(None);
        };
        tables.logs.entry(user.id.clone()).or_default().push(entry);

        Ok(Some(user))
    }

    async fn find_log(&self, user_id: &UserId) -> AppResult<Option<ExerciseLog>> {
        let tables = self.tables.read().await;

        Ok(tables.user(user_id).map(|user| ExerciseLog {
            user: user.clone(),
            entries: tables.logs.get(user_id).cloned().unwrap_or_default(),
        }))
    }
}
