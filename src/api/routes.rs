use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use crate::tts::SpeechSynthesizer;

pub struct AppState {
    /// Present only when the provider credential is configured.
    pub tts: Option<Arc<dyn SpeechSynthesizer>>,
}

fn cors(method: Method) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([method, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

fn tts_routes() -> Router<Arc<AppState>> {
    let voices = Router::new()
        .route("/voices", get(handlers::list_voices))
        .layer(cors(Method::GET));

    let generate = Router::new()
        .route("/generate", post(handlers::generate))
        .layer(DefaultBodyLimit::max(handlers::MAX_BODY_BYTES))
        .layer(cors(Method::POST));

    voices.merge(generate)
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(tts_routes())
        .nest("/api/tts", tts_routes())
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
