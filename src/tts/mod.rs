pub mod elevenlabs;
pub mod voice;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::{BoxStream, StreamExt};

pub use elevenlabs::ElevenLabsClient;
pub use voice::VoiceInfo;

/// Multilingual model used for every synthesis request.
pub const MODEL_ID: &str = "eleven_multilingual_v2";

/// MP3, 44.1kHz, 128kbps.
pub const OUTPUT_FORMAT: &str = "mp3_44100_128";

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Quota and rate limit failures are reported differently from other errors.
    pub fn is_quota_exceeded(&self) -> bool {
        let lower = self.message.to_lowercase();
        lower.contains("quota") || lower.contains("limit")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisParams {
    pub text: String,
    pub voice_id: String,
    pub model_id: String,
    pub output_format: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AudioChunk {
    Audio(Bytes),
    /// Anything the provider sends that is not audio, e.g. alignment metadata.
    #[allow(dead_code)]
    Other(String),
}

pub type AudioStream = BoxStream<'static, Result<AudioChunk, ProviderError>>;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, params: SynthesisParams) -> Result<AudioStream, ProviderError>;
}

/// Drain a provider stream into a single buffer, skipping non-audio chunks.
pub async fn collect_audio(mut stream: AudioStream) -> Result<Vec<u8>, ProviderError> {
    let mut audio = Vec::new();

    while let Some(chunk) = stream.next().await {
        match chunk? {
            AudioChunk::Audio(bytes) => audio.extend_from_slice(&bytes),
            AudioChunk::Other(_) => {}
        }
    }

    Ok(audio)
}
