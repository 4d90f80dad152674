use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::domain::AssessmentError;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Nothing generated: {0}")]
    NothingGenerated(String),

    #[error("Generation error: {0}")]
    GenerationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::Conflict(_) => "CONFLICT",
            AppError::NothingGenerated(_) => "NOTHING_GENERATED",
            AppError::GenerationError(_) => "GENERATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NothingGenerated(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::GenerationError(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            kind: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::GenerationError(err.to_string())
    }
}
impl From<AssessmentError> for AppError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::NoQuestions => AppError::NothingGenerated(err.to_string()),
            AssessmentError::QuestionOutOfRange { .. } => AppError::ValidationError(err.to_string()),
            AssessmentError::AlreadySubmitted | AssessmentError::NotSubmitted => {
                AppError::Conflict(err.to_string())
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
