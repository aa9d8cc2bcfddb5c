//! Exercise service - Appending to and querying users' exercise logs.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{MSG_EXERCISE_FIELDS_REQUIRED, MSG_INVALID_DURATION};
use crate::domain::{
    ExerciseDate, ExerciseEntry, ExerciseLog, LogFilter, LoggedExercise, NewExercise, UserId,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::ExerciseRepository;

/// Exercise service trait for dependency injection.
#[async_trait]
pub trait ExerciseService: Send + Sync {
    /// Append an exercise to the user's log, defaulting the date to today
    async fn add_exercise(&self, user_id: &UserId, exercise: NewExercise)
        -> AppResult<LoggedExercise>;

    /// Return the user's log narrowed by `filter`
    async fn query_log(&self, user_id: &UserId, filter: LogFilter) -> AppResult<ExerciseLog>;
}

/// Concrete implementation of ExerciseService.
pub struct ExerciseTracker {
    logs: Arc<dyn ExerciseRepository>,
}

impl ExerciseTracker {
    /// Create new exercise service instance
    pub fn new(logs: Arc<dyn ExerciseRepository>) -> Self {
        Self { logs }
    }
}

#[async_trait]
impl ExerciseService for ExerciseTracker {
    async fn add_exercise(
        &self,
        user_id: &UserId,
        exercise: NewExercise,
    ) -> AppResult<LoggedExercise> {
        if exercise.description.is_empty() {
            return Err(AppError::validation(MSG_EXERCISE_FIELDS_REQUIRED));
        }
        if exercise.duration == 0 {
            return Err(AppError::validation(MSG_INVALID_DURATION));
        }

        let entry = ExerciseEntry {
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date.unwrap_or_else(ExerciseDate::today),
        };

        let user = self
            .logs
            .append(user_id, entry.clone())
            .await?
            .ok_or_user_not_found()?;

        tracing::debug!(%user_id, date = %entry.date, "Exercise logged");
        Ok(LoggedExercise { user, entry })
    }

    async fn query_log(&self, user_id: &UserId, filter: LogFilter) -> AppResult<ExerciseLog> {
        let log = self.logs.find_log(user_id).await?.ok_or_user_not_found()?;

        Ok(ExerciseLog {
            entries: filter.apply(log.entries),
            user: log.user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::infra::MockExerciseRepository;

    fn run(date: Option<ExerciseDate>) -> NewExercise {
        NewExercise {
            description: "run".to_string(),
            duration: 30,
            date,
        }
    }

    #[tokio::test]
    async fn test_missing_date_defaults_to_today() {
        let mut repo = MockExerciseRepository::new();
        repo.expect_append()
            .times(1)
            .returning(|_, _| Ok(Some(User::new("alice".to_string()))));

        let service = ExerciseTracker::new(Arc::new(repo));
        let logged = service
            .add_exercise(&UserId::from("u1"), run(None))
            .await
            .unwrap();

        assert_eq!(logged.entry.date, ExerciseDate::today());
        assert_eq!(logged.entry.duration, 30);
    }

    #[tokio::test]
    async fn test_explicit_date_is_kept() {
        let mut repo = MockExerciseRepository::new();
        repo.expect_append()
            .withf(|_, entry| entry.date.to_string() == "Mon Jan 01 2024")
            .returning(|_, _| Ok(Some(User::new("alice".to_string()))));

        let service = ExerciseTracker::new(Arc::new(repo));
        let date = ExerciseDate::from_ymd(2024, 1, 1);
        let logged = service
            .add_exercise(&UserId::from("u1"), run(date))
            .await
            .unwrap();

        assert_eq!(logged.entry.date.to_string(), "Mon Jan 01 2024");
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let mut repo = MockExerciseRepository::new();
        repo.expect_append().returning(|_, _| Ok(None));

        let service = ExerciseTracker::new(Arc::new(repo));
        let err = service
            .add_exercise(&UserId::from("ghost"), run(None))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_fields_never_reach_the_store() {
        let mut repo = MockExerciseRepository::new();
        repo.expect_append().never();
        let service = ExerciseTracker::new(Arc::new(repo));

        let mut blank = run(None);
        blank.description.clear();
        let err = service
            .add_exercise(&UserId::from("u1"), blank)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let mut zero = run(None);
        zero.duration = 0;
        let err = service
            .add_exercise(&UserId::from("u1"), zero)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_query_log_applies_filter() {
        let mut repo = MockExerciseRepository::new();
        repo.expect_find_log().returning(|_| {
            let entries = (1..=3)
                .map(|day| ExerciseEntry {
                    description: format!("day {}", day),
                    duration: 10,
                    date: ExerciseDate::from_ymd(2024, 1, day).unwrap(),
                })
                .collect();
            Ok(Some(ExerciseLog {
                user: User::new("alice".to_string()),
                entries,
            }))
        });

        let service = ExerciseTracker::new(Arc::new(repo));
        let filter = LogFilter {
            from: ExerciseDate::from_ymd(2024, 1, 2),
            to: None,
            limit: Some(1),
        };
        let log = service
            .query_log(&UserId::from("u1"), filter)
            .await
            .unwrap();

        assert_eq!(log.entries.len(), 1);
        assert_eq!(log.entries[0].description, "day 2");
    }

    #[tokio::test]
    async fn test_query_log_unknown_user() {
        let mut repo = MockExerciseRepository::new();
        repo.expect_find_log().returning(|_| Ok(None));

        let service = ExerciseTracker::new(Arc::new(repo));
        let err = service
            .query_log(&UserId::from("ghost"), LogFilter::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
