//! Translation of validation and store outcomes into HTTP responses.

use crate::domain::ValidationErrors;
use crate::storage::StoreError;
use crate::transport::http::types::ApiResponse;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid JSON body: {0}")]
    MalformedBody(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::DuplicateName) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(errors) => ApiResponse {
                data: Some(serde_json::json!({ "errors": errors.errors() })),
                ..ApiResponse::error(self.to_string())
            },
            ApiError::MalformedBody(_) => ApiResponse::error(self.to_string()),
            ApiError::Store(StoreError::NotFound(id)) => {
                ApiResponse::error(format!("Stadium {} not found", id))
            }
            ApiError::Store(StoreError::DuplicateName) => {
                ApiResponse::error(StoreError::DuplicateName.to_string())
            }
            ApiError::Store(err) => {
                // The cause stays in the logs; clients only see a generic message.
                tracing::error!(error = %err, "unhandled store error");
                ApiResponse::error("Internal server error")
            }
        };
        (status, Json(body)).into_response()
    }
}
