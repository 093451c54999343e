use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{GenerateRequest, HealthResponse, VoicesResponse};
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::tts::{self, voice, SynthesisParams};

pub const MAX_TEXT_CHARS: usize = 5000;

/// Upper bound on a buffered `/generate` body.
pub const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

fn text_too_long() -> AppError {
    AppError::BadRequest(format!(
        "Text too long (max {} characters)",
        MAX_TEXT_CHARS
    ))
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    let synthesizer = state.tts.as_ref().ok_or(AppError::NotConfigured)?;

    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            text_too_long()
        } else {
            AppError::InvalidJson
        }
    })?;
    let request = parse_request(&body)?;

    // Validate input
    let text = request.text.trim();
    if text.is_empty() {
        return Err(AppError::BadRequest("No text provided".into()));
    }

    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(text_too_long());
    }

    let voice_key = request.voice_key();
    let language = request.language_code();
    let voice_id = voice::resolve(voice_key, language);

    tracing::info!(
        "Generating speech: voice={} language={} chars={}",
        voice_key,
        language,
        text.chars().count()
    );

    let stream = synthesizer
        .synthesize(SynthesisParams {
            text: text.to_string(),
            voice_id: voice_id.to_string(),
            model_id: tts::MODEL_ID.to_string(),
            output_format: tts::OUTPUT_FORMAT.to_string(),
        })
        .await?;
    let audio = tts::collect_audio(stream).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "audio/mpeg"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        audio,
    )
        .into_response())
}

fn parse_request(body: &[u8]) -> Result<GenerateRequest, AppError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|_| AppError::InvalidJson)?;

    if !value.is_object() {
        return Err(AppError::InvalidJson);
    }

    serde_json::from_value(value).map_err(|_| AppError::InvalidJson)
}

pub async fn list_voices(State(state): State<Arc<AppState>>) -> Json<VoicesResponse> {
    Json(VoicesResponse {
        voices: voice::list_voices(),
        available: state.tts.is_some(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
