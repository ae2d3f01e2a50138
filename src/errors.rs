use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Failed to load quiz: {0}")]
    LoadFailure(String),

    #[error("Quiz source did not respond within {0} ms")]
    LoadTimeout(u64),

    #[error("Malformed quiz: {0}")]
    MalformedQuiz(String),

    #[error("Incomplete answers: expected {expected}, got {actual}")]
    IncompleteAnswers { expected: usize, actual: usize },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::LoadFailure(_) => "LOAD_FAILURE",
            AppError::LoadTimeout(_) => "LOAD_TIMEOUT",
            AppError::MalformedQuiz(_) => "MALFORMED_QUIZ",
            AppError::IncompleteAnswers { .. } => "INCOMPLETE_ANSWERS",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::LoadFailure(_) => StatusCode::BAD_GATEWAY,
            AppError::LoadTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::MalformedQuiz(_) => StatusCode::BAD_GATEWAY,
            AppError::IncompleteAnswers { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
        })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::LoadFailure(err.to_string())
    }
}
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::LoadFailure(format!("Invalid quiz payload: {}", err))
    }
}
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::LoadFailure(format!("I/O error: {}", err))
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
