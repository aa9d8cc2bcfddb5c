//! User handlers.

use axum::{
    extract::State,
    response::Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedPayload;
use crate::api::AppState;
use crate::config::MSG_USERNAME_REQUIRED;
use crate::domain::UserResponse;
use crate::errors::{AppError, AppResult};

/// User creation request
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Display name for the new user
    #[validate(
        required(message = "Username is required"),
        length(min = 1, message = "Username is required")
    )]
    #[schema(example = "alice")]
    pub username: Option<String>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", post(create_user).get(list_users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body(
        content = CreateUserRequest,
        content_type = "application/json",
        description = "Also accepted as application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Username missing")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedPayload(payload): ValidatedPayload<CreateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let username = payload
        .username
        .ok_or_else(|| AppError::validation(MSG_USERNAME_REQUIRED))?;

    let user = state.user_service.create_user(username).await?;
    Ok(Json(UserResponse::from(user)))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in creation order", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
