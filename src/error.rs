use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::tts::ProviderError;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AppError {
    #[error("ElevenLabs API key not configured")]
    NotConfigured,

    #[error("Invalid JSON")]
    InvalidJson,

    #[error("{0}")]
    BadRequest(String),

    #[error("API quota exceeded. Please try again later or use browser voice.")]
    QuotaExceeded,

    #[error("TTS generation failed: {0}")]
    TtsError(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        if err.is_quota_exceeded() {
            AppError::QuotaExceeded
        } else {
            AppError::TtsError(err.message)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotConfigured | AppError::TtsError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidJson | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::NotConfigured => "NOT_CONFIGURED",
            AppError::InvalidJson => "INVALID_JSON",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::QuotaExceeded => "QUOTA_EXCEEDED",
            AppError::TtsError(_) => "TTS_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("Request failed: {} - {}", self.code(), message);
        } else {
            tracing::warn!("Request rejected: {} - {}", self.code(), message);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
