// ABOUTME: Shared API response types and error-to-HTTP conversion
// ABOUTME: Errors render as a JSON {"error": message} body

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde::Serialize;

use crate::error::QuestionsError;
use crate::types::Question;

/// JSON error body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Success body for create/update/delete, echoing the affected row
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub message: &'static str,
    pub question: Question,
}

/// Success body for operations with no row to echo
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Convert domain errors to HTTP responses. Database and upstream details are
/// logged at the handler boundary, not leaked to clients.
impl IntoResponse for QuestionsError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            QuestionsError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            QuestionsError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            QuestionsError::Conflict => (StatusCode::CONFLICT, self.to_string()),
            QuestionsError::Upstream(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error loading questions".to_string(),
            ),
            QuestionsError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
            ),
        };

        (status, ResponseJson(ErrorResponse::new(message))).into_response()
    }
}
