//! HTTP request handlers for the chunking service.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::error::ServiceError;
use crate::pipeline::ProcessingPipeline;
use crate::types::{
    ApiResponse, ChunkTextRequest, ChunkingOptions, ChunkingResponse, ChunkingSummary,
    CleanTextRequest, CleanedText, CleanerHealth, ExtractTranscriptRequest,
    ExtractTranscriptResponse, ProcessRequest, ProcessedContent, ServiceConfig,
};
use crate::upstream::youtube;

/// Application state shared across handlers.
pub struct AppState {
    pub pipeline: ProcessingPipeline,
    pub config: ServiceConfig,
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, ServiceError>;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Report whether the AI cleaner answers.
pub async fn cleaner_health(State(state): State<Arc<AppState>>) -> ApiResult<CleanerHealth> {
    let connected = state.pipeline.cleaner_connected().await?;
    Ok(Json(ApiResponse::ok(CleanerHealth { connected })))
}

/// Get the chunking options applied when a request sets none.
pub async fn default_options(State(state): State<Arc<AppState>>) -> Json<ApiResponse<ChunkingOptions>> {
    Json(ApiResponse::ok(state.config.default_options))
}

/// Split text into chunks.
pub async fn chunk_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChunkTextRequest>, JsonRejection>,
) -> ApiResult<ChunkingResponse> {
    let Json(request) = payload?;
    let text = request
        .text
        .ok_or_else(|| ServiceError::InvalidInput("Text is required".to_string()))?;

    let (chunks, statistics) = state.pipeline.chunk(&text, request.options.as_ref())?;
    info!(chunks = chunks.len(), "Served chunk request");

    Ok(Json(ApiResponse::ok(ChunkingResponse {
        chunks,
        metadata: ChunkingSummary::from(&statistics),
        statistics,
    })))
}

/// Clean text with the configured AI cleaner.
pub async fn clean_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CleanTextRequest>, JsonRejection>,
) -> ApiResult<CleanedText> {
    let Json(request) = payload?;
    let text = request
        .text
        .ok_or_else(|| ServiceError::InvalidInput("Text is required".to_string()))?;

    let cleaned = state.pipeline.clean(&text).await?;
    Ok(Json(ApiResponse::ok(cleaned)))
}

/// Fetch a YouTube transcript.
pub async fn extract_transcript(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ExtractTranscriptRequest>, JsonRejection>,
) -> ApiResult<ExtractTranscriptResponse> {
    let Json(request) = payload?;
    let url = request
        .url
        .ok_or_else(|| ServiceError::InvalidInput("A YouTube URL is required".to_string()))?;

    let transcript = state.pipeline.extract_transcript(&url).await?;
    let video_id = youtube::extract_video_id(&url).unwrap_or_default();
    let embed_url = youtube::embed_url(&url).unwrap_or_default();

    Ok(Json(ApiResponse::ok(ExtractTranscriptResponse {
        transcript,
        video_id,
        embed_url,
    })))
}

/// Run the full fetch → clean → chunk pipeline.
pub async fn process_full(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> ApiResult<ProcessedContent> {
    let Json(request) = payload?;
    let content = state.pipeline.process(request).await?;
    Ok(Json(ApiResponse::ok(content)))
}
