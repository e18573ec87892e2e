//! Transcript Chunker Service - Main Entry Point
//!
//! Splits lesson transcripts into sentence-aligned chunks over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use transcript_chunker::api::{self, AppState};
use transcript_chunker::pipeline::ProcessingPipeline;
use transcript_chunker::types::ServiceConfig;
use transcript_chunker::upstream::{GeminiCleaner, TranscriptClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "transcript_chunker=info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env();
    config.default_options.validate()?;

    info!("Starting Transcript Chunker Service v{}", env!("CARGO_PKG_VERSION"));
    info!(
        max_words = config.default_options.max_words,
        overlap_sentences = config.default_options.overlap_sentences,
        "Default chunking options"
    );

    // Initialize components
    let timeout = Duration::from_secs(config.upstream_timeout_secs);
    let mut pipeline = ProcessingPipeline::new(config.default_options);

    match &config.transcript_service_url {
        Some(url) => {
            info!(url = %url, "Transcript service configured");
            pipeline = pipeline.with_transcript_source(Arc::new(TranscriptClient::new(url, timeout)));
        }
        None => warn!("TRANSCRIPT_SERVICE_URL not set, YouTube sources are disabled"),
    }

    match &config.gemini_api_key {
        Some(key) => {
            info!(model = %config.gemini_model, "Gemini cleaning configured");
            pipeline = pipeline.with_cleaner(Arc::new(GeminiCleaner::new(
                &config.gemini_base_url,
                &config.gemini_model,
                key,
                timeout,
            )));
        }
        None => warn!("GEMINI_API_KEY not set, text cleaning is disabled"),
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(AppState { pipeline, config });
    let app = api::router(state);

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
