//! Uniform JSON envelope.
//!
//! Success: `{ "status": 200, "success": true, "data": ... }`
//! Failure: `{ "status": 404, "success": false, "error": "...", "details": ... }`

use super::state::ApiStateError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::borrow::Cow;
use tracing::error;
use utoipa::ToSchema;

/// Result type returned by every handler.
pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    #[serde(serialize_with = "serialize_status")]
    #[schema(value_type = u16, example = 200)]
    status: StatusCode,
    success: bool,
    data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 with `data`.
    pub const fn ok(data: T) -> Self {
        Self::with_status(StatusCode::OK, data)
    }

    pub const fn with_status(status: StatusCode, data: T) -> Self {
        Self { status, success: true, data }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub const fn data(&self) -> &T {
        &self.data
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiError {
    #[serde(serialize_with = "serialize_status")]
    #[schema(value_type = u16, example = 404)]
    status: StatusCode,
    success: bool,
    #[schema(value_type = String)]
    error: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    details: Option<Value>,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<Cow<'static, str>>) -> Self {
        Self { status, success: false, error: error.into(), details: None }
    }

    pub fn not_found(error: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error)
    }

    pub fn unprocessable(error: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, error)
    }

    pub fn internal(error: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error)
    }

    /// Attaches a machine-readable payload rendered under `details`.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub const fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), error = %self.error, "Request failed");
        }
        (self.status, Json(self)).into_response()
    }
}

impl From<ApiStateError> for ApiError {
    fn from(err: ApiStateError) -> Self {
        Self::internal(err.to_string())
    }
}

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;

    async fn body_of(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn success_envelope_carries_status_and_data() {
        let response = ApiResponse::ok(json!({ "answer": 42 })).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_of(response).await,
            json!({ "status": 200, "success": true, "data": { "answer": 42 } })
        );
    }

    #[tokio::test]
    async fn failure_envelope_omits_absent_details() {
        let response = ApiError::not_found("Theme 'nope' not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_of(response).await,
            json!({ "status": 404, "success": false, "error": "Theme 'nope' not found" })
        );
    }

    #[tokio::test]
    async fn failure_envelope_includes_details_when_set() {
        let err = ApiError::unprocessable("Invalid theme settings")
            .with_details(json!({ "reason": "missing pages" }));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_of(response).await["details"], json!({ "reason": "missing pages" }));
    }
}
