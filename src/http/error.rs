//! API error taxonomy.
//!
//! Two kinds exist: validation failures (422, field-level detail) and
//! missing contacts (404, fixed message). Bodies keep the original API's
//! `{"detail": ...}` envelope so existing clients parse them unchanged.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::contacts::service::ContactError;
use crate::contacts::types::FieldError;

pub const NOT_FOUND_MESSAGE: &str = "Contato não encontrado";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Contato não encontrado")]
    NotFound,

    #[error("validation failed")]
    Validation(Vec<FieldError>),
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::NotFound => ApiError::NotFound,
        }
    }
}

/// A body that fails to parse or type-check is a 422, same as a payload
/// that parses but breaks the schema rules.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![FieldError::body(rejection.body_text())])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": NOT_FOUND_MESSAGE })),
            )
                .into_response(),
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": errors })),
            )
                .into_response(),
        }
    }
}
