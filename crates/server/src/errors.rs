use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// JSON error response carrying a `title`, an `error`, or both.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: Option<String>,
    pub error: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl JsonApiError {
    pub fn title(status: StatusCode, title: impl Into<String>) -> Self {
        Self { status, title: Some(title.into()), error: None }
    }

    pub fn error(status: StatusCode, error: impl Into<String>) -> Self {
        Self { status, title: None, error: Some(error.into()) }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { title: self.title, error: self.error })).into_response()
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::error(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<QueryRejection> for JsonApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::error(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

// An id that cannot be parsed names no record.
impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::error(StatusCode::NOT_FOUND, rejection.body_text())
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: JsonApiError) -> (StatusCode, serde_json::Value) {
        let res = err.into_response();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn only_present_fields_are_rendered() {
        let (status, v) = body_of(JsonApiError::title(StatusCode::INTERNAL_SERVER_ERROR, "dup")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(v, serde_json::json!({"title": "dup"}));

        let (status, v) = body_of(JsonApiError::error(StatusCode::BAD_REQUEST, "bad")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v, serde_json::json!({"error": "bad"}));
    }
}
