//! Exercise log handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::extractors::Payload;
use crate::api::AppState;
use crate::config::{MSG_EXERCISE_FIELDS_REQUIRED, MSG_INVALID_DURATION};
use crate::domain::{
    ExerciseDate, ExerciseLogResponse, ExerciseResponse, LogFilter, NewExercise, UserId,
};
use crate::errors::{AppError, AppResult};

/// Duration as sent by clients: a JSON number or, from forms, a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationInput {
    Number(serde_json::Number),
    Text(String),
}

impl DurationInput {
    /// The duration as a positive whole number, if it is one.
    pub fn whole_positive(&self) -> Option<u32> {
        let value = match self {
            DurationInput::Number(n) => n.as_f64()?,
            DurationInput::Text(s) => s.trim().parse::<f64>().ok()?,
        };

        let valid = value.is_finite()
            && value >= 1.0
            && value.fract() == 0.0
            && value <= f64::from(u32::MAX);
        valid.then_some(value as u32)
    }
}

/// Exercise creation request
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateExerciseRequest {
    /// What was done
    #[validate(
        required(message = "Description and duration are required"),
        length(min = 1, message = "Description and duration are required")
    )]
    #[schema(example = "run")]
    pub description: Option<String>,
    /// Positive whole number; numeric strings are accepted
    #[validate(required(message = "Description and duration are required"))]
    #[schema(value_type = Option<u32>, example = 30)]
    pub duration: Option<DurationInput>,
    /// Calendar date such as `2024-01-01`; today when omitted
    #[schema(example = "2024-01-01")]
    pub date: Option<String>,
}

impl CreateExerciseRequest {
    /// Convert a validated request into domain input.
    pub fn into_new_exercise(self) -> AppResult<NewExercise> {
        let description = self
            .description
            .ok_or_else(|| AppError::validation(MSG_EXERCISE_FIELDS_REQUIRED))?;
        let duration = self
            .duration
            .as_ref()
            .and_then(DurationInput::whole_positive)
            .ok_or_else(|| AppError::validation(MSG_INVALID_DURATION))?;
        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(ExerciseDate::parse(raw)?),
        };

        Ok(NewExercise {
            description,
            duration,
            date,
        })
    }
}

/// Log query parameters. Values that fail to parse are ignored.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogQuery {
    /// Earliest date to include
    #[param(example = "2024-01-01")]
    pub from: Option<String>,
    /// Latest date to include
    #[param(example = "2024-01-31")]
    pub to: Option<String>,
    /// Maximum number of entries to return
    #[param(example = "10")]
    pub limit: Option<String>,
}

impl From<LogQuery> for LogFilter {
    fn from(query: LogQuery) -> Self {
        Self {
            from: ExerciseDate::parse_lenient(query.from.as_deref()),
            to: ExerciseDate::parse_lenient(query.to.as_deref()),
            limit: query.limit.as_deref().and_then(parse_limit),
        }
    }
}

/// Non-negative numbers are truncated toward zero; anything else is ignored.
fn parse_limit(raw: &str) -> Option<usize> {
    let value = raw.trim().parse::<f64>().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value as usize)
}

/// Create exercise routes
pub fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/exercises", post(add_exercise))
        .route("/:id/logs", get(get_log))
}

/// Log an exercise for a user
#[utoipa::path(
    post,
    path = "/api/users/{id}/exercises",
    tag = "Exercises",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body(
        content = CreateExerciseRequest,
        content_type = "application/json",
        description = "Also accepted as application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Exercise logged", body = ExerciseResponse),
        (status = 400, description = "Missing description/duration or invalid date"),
        (status = 404, description = "User not found")
    )
)]
pub async fn add_exercise(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    payload: Result<Payload<CreateExerciseRequest>, AppError>,
) -> AppResult<Json<ExerciseResponse>> {
    // Unknown users are reported before any body problem.
    state.user_service.get_user(&id).await?;

    let Payload(payload) = payload?;
    payload.validate()?;
    let exercise = payload.into_new_exercise()?;

    let logged = state.exercise_service.add_exercise(&id, exercise).await?;
    Ok(Json(ExerciseResponse::from(logged)))
}

/// Get a user's exercise log
#[utoipa::path(
    get,
    path = "/api/users/{id}/logs",
    tag = "Exercises",
    params(
        ("id" = String, Path, description = "User ID"),
        LogQuery
    ),
    responses(
        (status = 200, description = "Filtered exercise log", body = ExerciseLogResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_log(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Query(query): Query<LogQuery>,
) -> AppResult<Json<ExerciseLogResponse>> {
    let log = state
        .exercise_service
        .query_log(&id, LogFilter::from(query))
        .await?;
    Ok(Json(ExerciseLogResponse::from(log)))
}
