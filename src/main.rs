use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod tts;

use api::routes::{create_router, AppState};
use config::Config;
use tts::{ElevenLabsClient, SpeechSynthesizer};

#[tokio::main]
async fn main() {
    // Pick up a local .env if present
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let addr = config.addr()?;

    tracing::info!("TTS Relay Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);

    // Synthesis stays disabled without a credential; listing still works
    let tts: Option<Arc<dyn SpeechSynthesizer>> = match &config.api_key {
        Some(key) => {
            tracing::info!("ElevenLabs endpoint: {}", config.base_url);
            let client = ElevenLabsClient::new(key.clone(), config.base_url.clone(), config.timeout)?;
            Some(Arc::new(client) as Arc<dyn SpeechSynthesizer>)
        }
        None => {
            tracing::warn!("ELEVENLABS_API_KEY not set, speech generation disabled");
            None
        }
    };

    let state = Arc::new(AppState { tts });
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
