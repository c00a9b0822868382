use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use cases::LookupError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // Unresolved names are invalid arguments at the search entry point
            ApiError::Lookup(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::InvalidBody(e) => (StatusCode::BAD_REQUEST, e.body_text()),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
