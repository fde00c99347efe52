//! Response envelopes and the error type every handler returns.
//!
//! Bodies follow the ticket API's flat JSON shapes rather than a generic
//! `{success, data}` wrapper:
//!
//! ```json
//! { "message": "Ticket deleted successfully" }
//! { "errors": { "priority": "The selected priority is invalid." } }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::FieldErrors;
use serde::Serialize;
use services::service::ServiceError;
use thiserror::Error;

/// A body carrying only a human-readable message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `422` body: one message per invalid field.
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: FieldErrors,
}

/// Everything a handler can fail with.
///
/// - `Validation` → `422 Unprocessable Entity`, `{errors: {...}}`
/// - `NotFound` → `404 Not Found`, `{message}`
/// - `Internal` → `500 Internal Server Error`, `{message: "Server Error"}`;
///   the detail is logged, never sent to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(FieldErrors),

    #[error("{0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation(errors) => {
                (status, Json(ValidationErrorResponse { errors })).into_response()
            }
            ApiError::NotFound(message) => (status, Json(MessageResponse::new(message))).into_response(),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "Request failed");
                (status, Json(MessageResponse::new("Server Error"))).into_response()
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { entity, .. } => ApiError::NotFound(format!("{entity} not found")),
            ServiceError::Database(db_err) => ApiError::Internal(db_err.to_string()),
        }
    }
}

/// A body that could not be read as the expected JSON object.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert("body".to_owned(), rejection.body_text());
        ApiError::Validation(errors)
    }
}
