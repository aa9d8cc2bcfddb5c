//! Exercise log entities, log filtering and response types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::date::ExerciseDate;
use super::user::User;

/// A single logged activity. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseEntry {
    /// What was done
    #[schema(example = "run")]
    pub description: String,
    /// Length of the activity
    #[schema(example = 30)]
    pub duration: u32,
    /// Day the activity happened
    #[schema(value_type = String, example = "Mon Jan 01 2024")]
    pub date: ExerciseDate,
}

/// Validated input for a new entry. A missing date means "today".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub description: String,
    pub duration: u32,
    pub date: Option<ExerciseDate>,
}

/// An entry together with the user it was appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedExercise {
    pub user: User,
    pub entry: ExerciseEntry,
}

/// A user's entries in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLog {
    pub user: User,
    pub entries: Vec<ExerciseEntry>,
}

/// Inclusive date bounds plus an optional cap on the number of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub from: Option<ExerciseDate>,
    pub to: Option<ExerciseDate>,
    pub limit: Option<usize>,
}

impl LogFilter {
    /// Keep entries inside `[from, to]`, then truncate to `limit`.
    pub fn apply(&self, entries: Vec<ExerciseEntry>) -> Vec<ExerciseEntry> {
        entries
            .into_iter()
            .filter(|e| self.from.map_or(true, |from| e.date >= from))
            .filter(|e| self.to.map_or(true, |to| e.date <= to))
            .take(self.limit.unwrap_or(usize::MAX))
            .collect()
    }
}

/// Response for a freshly appended exercise
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseResponse {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "run")]
    pub description: String,
    #[schema(example = 30)]
    pub duration: u32,
    #[schema(example = "Mon Jan 01 2024")]
    pub date: String,
    #[serde(rename = "_id")]
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
}

impl From<LoggedExercise> for ExerciseResponse {
    fn from(logged: LoggedExercise) -> Self {
        Self {
            username: logged.user.username,
            description: logged.entry.description,
            duration: logged.entry.duration,
            date: logged.entry.date.to_string(),
            id: logged.user.id.to_string(),
        }
    }
}

/// Response for a log query; `count` always equals `log.len()`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseLogResponse {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = 1)]
    pub count: usize,
    #[serde(rename = "_id")]
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    pub log: Vec<ExerciseEntry>,
}

impl From<ExerciseLog> for ExerciseLogResponse {
    fn from(log: ExerciseLog) -> Self {
        Self {
            username: log.user.username,
            count: log.entries.len(),
            id: log.user.id.to_string(),
            log: log.entries,
        }
    }
}
