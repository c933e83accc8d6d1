use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};

use crate::api::response;
use crate::summarizer::SummarizerError;
use crate::transcript::TranscriptError;

pub const INVALID_LINK_MESSAGE: &str = "Invalid YouTube link provided.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Error fetching transcript: {0}")]
    TranscriptError(String),

    #[error("Error during summarization: {0}")]
    SummarizationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn invalid_link() -> Self {
        AppError::InvalidInput(INVALID_LINK_MESSAGE.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::TranscriptError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::SummarizationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        response::error(status, self.to_string()).into_response()
    }
}

impl From<TranscriptError> for AppError {
    fn from(err: TranscriptError) -> Self {
        AppError::TranscriptError(err.to_string())
    }
}

impl From<SummarizerError> for AppError {
    fn from(err: SummarizerError) -> Self {
        AppError::SummarizationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
