//! Request body extractors accepting JSON or URL-encoded forms.

use axum::{
    async_trait,
    body::Bytes,
    extract::{
        rejection::{FormRejection, JsonRejection},
        FromRequest, Request,
    },
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// Body extractor that deserializes either `application/json` or
/// `application/x-www-form-urlencoded` payloads.
///
/// A request with no body and no content type deserializes as if every
/// field were absent, so required-field checks report the missing field
/// rather than a content-type error.
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if content_type.starts_with("application/json") || content_type.contains("+json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::bad_request(e.body_text()))?;
            return Ok(Payload(value));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::bad_request(e.body_text()))?;
            return Ok(Payload(value));
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;
        if !body.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::bad_request(format!(
                "unsupported content type '{}'",
                content_type
            )));
        }

        let value = serde_json::from_value(serde_json::Value::Object(Default::default()))
            .map_err(|e| AppError::bad_request(e.to_string()))?;
        Ok(Payload(value))
    }
}

/// Payload extractor that also runs `validator` rules before the handler.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use exercise_tracker::api::extractors::ValidatedPayload;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateUserRequest {
///     #[validate(required, length(min = 1))]
///     username: Option<String>,
/// }
///
/// async fn create_user(ValidatedPayload(payload): ValidatedPayload<CreateUserRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedPayload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedPayload<T>
where
    S: Send + Sync,
    T: Validate + Send,
    Payload<T>: FromRequest<S, Rejection = AppError>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Payload(value) = Payload::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedPayload(value))
    }
}
