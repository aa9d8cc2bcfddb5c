//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{exercise_handler, user_handler};
use crate::domain::{ExerciseEntry, ExerciseLogResponse, ExerciseResponse, UserResponse};

/// OpenAPI documentation for the exercise tracker
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exercise Tracker",
        version = "0.1.0",
        description = "Create users, log exercises against them and query their activity log",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::create_user,
        user_handler::list_users,
        exercise_handler::add_exercise,
        exercise_handler::get_log,
    ),
    components(
        schemas(
            UserResponse,
            ExerciseEntry,
            ExerciseResponse,
            ExerciseLogResponse,
            user_handler::CreateUserRequest,
            exercise_handler::CreateExerciseRequest,
        )
    ),
    tags(
        (name = "Users", description = "User creation and listing"),
        (name = "Exercises", description = "Exercise logging and log queries")
    )
)]
pub struct ApiDoc;
