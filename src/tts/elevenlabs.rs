//! ElevenLabs text-to-speech client.
//!
//! - Endpoint: `POST {base}/v1/text-to-speech/{voice_id}?output_format={format}`
//! - Auth: `xi-api-key` header
//! - Output: raw audio bytes in the requested format

use std::time::Duration;

use async_trait::async_trait;
use futures_util::stream::{StreamExt, TryStreamExt};
use serde::Serialize;

use super::{AudioChunk, AudioStream, ProviderError, SpeechSynthesizer, SynthesisParams};

pub const ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io";

#[derive(Debug, Serialize)]
struct TextToSpeechBody<'a> {
    text: &'a str,
    model_id: &'a str,
}

pub struct ElevenLabsClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ElevenLabsClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, voice_id: &str) -> String {
        format!("{}/v1/text-to-speech/{}", self.base_url, voice_id)
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsClient {
    async fn synthesize(&self, params: SynthesisParams) -> Result<AudioStream, ProviderError> {
        let body = TextToSpeechBody {
            text: &params.text,
            model_id: &params.model_id,
        };

        tracing::debug!(
            "Requesting synthesis: voice={} model={} chars={}",
            params.voice_id,
            params.model_id,
            params.text.chars().count()
        );

        let response = self
            .http
            .post(self.endpoint(&params.voice_id))
            .query(&[("output_format", params.output_format.as_str())])
            .header("xi-api-key", &self.api_key)
            .header("Accept", "audio/mpeg")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::new(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!("ElevenLabs returned {}", status);
            return Err(ProviderError::new(format!(
                "status_code: {}, body: {}",
                status.as_u16(),
                error_body
            )));
        }

        let stream = response
            .bytes_stream()
            .map_ok(AudioChunk::Audio)
            .map_err(|e| ProviderError::new(e.to_string()));

        Ok(stream.boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tts::{collect_audio, MODEL_ID, OUTPUT_FORMAT};
    use axum::{
        extract::{Path, Query},
        http::{HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use std::collections::HashMap;

    async fn mock_tts(
        Path(voice_id): Path<String>,
        Query(query): Query<HashMap<String, String>>,
        headers: HeaderMap,
        Json(body): Json<serde_json::Value>,
    ) -> (StatusCode, Vec<u8>) {
        if headers.get("xi-api-key").map(|v| v.as_bytes()) != Some(b"test-key".as_slice()) {
            return (StatusCode::UNAUTHORIZED, b"invalid api key".to_vec());
        }
        if body["text"] == "quota" {
            return (
                StatusCode::TOO_MANY_REQUESTS,
                br#"{"detail":{"status":"quota_exceeded"}}"#.to_vec(),
            );
        }
        let echo = format!(
            "{}|{}|{}|{}",
            voice_id,
            query.get("output_format").cloned().unwrap_or_default(),
            body["model_id"].as_str().unwrap_or_default(),
            body["text"].as_str().unwrap_or_default()
        );
        (StatusCode::OK, echo.into_bytes())
    }

    async fn spawn_mock() -> String {
        let app = Router::new().route("/v1/text-to-speech/:voice_id", post(mock_tts));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    fn params(text: &str) -> SynthesisParams {
        SynthesisParams {
            text: text.to_string(),
            voice_id: "EXAVITQu4vr4xnSDxMaL".to_string(),
            model_id: MODEL_ID.to_string(),
            output_format: OUTPUT_FORMAT.to_string(),
        }
    }

    fn client(base_url: String, key: &str) -> ElevenLabsClient {
        ElevenLabsClient::new(key.to_string(), base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let c = client("https://api.elevenlabs.io/".to_string(), "k");
        assert_eq!(
            c.endpoint("abc"),
            "https://api.elevenlabs.io/v1/text-to-speech/abc"
        );
    }

    #[tokio::test]
    async fn test_synthesize_streams_audio() {
        let base = spawn_mock().await;
        let stream = client(base, "test-key")
            .synthesize(params("Hello"))
            .await
            .unwrap();
        let audio = collect_audio(stream).await.unwrap();
        assert_eq!(
            String::from_utf8(audio).unwrap(),
            "EXAVITQu4vr4xnSDxMaL|mp3_44100_128|eleven_multilingual_v2|Hello"
        );
    }

    #[tokio::test]
    async fn test_synthesize_reports_status_and_body() {
        let base = spawn_mock().await;
        let err = match client(base, "test-key").synthesize(params("quota")).await {
            Err(e) => e,
            Ok(_) => panic!("expected provider error"),
        };
        assert!(err.message.starts_with("status_code: 429"));
        assert!(err.is_quota_exceeded());
    }

    #[tokio::test]
    async fn test_synthesize_rejected_key() {
        let base = spawn_mock().await;
        let err = match client(base, "wrong").synthesize(params("Hello")).await {
            Err(e) => e,
            Ok(_) => panic!("expected provider error"),
        };
        assert_eq!(err.message, "status_code: 401, body: invalid api key");
        assert!(!err.is_quota_exceeded());
    }
}
