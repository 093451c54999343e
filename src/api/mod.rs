pub mod handlers;
pub mod routes;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::tts::{voice, VoiceInfo};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "present")]
    pub voice: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub language: Option<Value>,
}

/// Keeps an explicit `null` as `Some(Value::Null)` so it differs from a missing key.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Missing keys take the default; values that are not strings never match a preset.
fn field_or<'a>(field: &'a Option<Value>, default: &'a str) -> &'a str {
    match field {
        None => default,
        Some(value) => value.as_str().unwrap_or(""),
    }
}

impl GenerateRequest {
    pub fn voice_key(&self) -> &str {
        field_or(&self.voice, voice::DEFAULT_VOICE)
    }

    pub fn language_code(&self) -> &str {
        field_or(&self.language, voice::DEFAULT_LANGUAGE)
    }
}

#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub voices: Vec<VoiceInfo>,
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
