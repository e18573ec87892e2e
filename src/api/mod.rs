//! HTTP surface of the chunking service.

pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use handlers::AppState;

/// Build the service router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        .route("/health/cleaner", get(handlers::cleaner_health))
        // Processing
        .route("/process/options", get(handlers::default_options))
        .route("/process/chunk", post(handlers::chunk_text))
        .route("/process/clean", post(handlers::clean_text))
        .route("/process/full", post(handlers::process_full))
        // Transcripts
        .route("/youtube/extract", post(handlers::extract_transcript))
        // State
        .with_state(state)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::ProcessingPipeline;
    use crate::types::{ChunkingOptions, ServiceConfig, Transcript};
    use crate::upstream::TranscriptSource;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    struct StaticTranscripts;

    #[async_trait]
    impl TranscriptSource for StaticTranscripts {
        async fn fetch_transcript(&self, url: &str) -> anyhow::Result<Transcript> {
            Ok(Transcript {
                url: url.to_string(),
                transcript: "Hola a todos. Hoy hablamos de Rust.".to_string(),
                duration_seconds: Some(12),
                language: "es".to_string(),
            })
        }
    }

    fn app() -> Router {
        let config = ServiceConfig::default();
        let state = Arc::new(AppState {
            pipeline: ProcessingPipeline::new(config.default_options)
                .with_transcript_source(Arc::new(StaticTranscripts)),
            config,
        });
        router(state)
    }

    async fn read_json(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_raw(uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        read_json(app().oneshot(request).await.unwrap()).await
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        post_raw(uri, &body.to_string()).await
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        read_json(app().oneshot(request).await.unwrap()).await
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_chunk_endpoint() {
        let (status, body) = post_json(
            "/process/chunk",
            json!({ "text": "El Dr. Pérez llegó. Fue breve.", "options": { "maxWords": 3, "minWords": 1 } }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let chunks = body["data"]["chunks"].as_array().unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0]["text"], "El Dr. Pérez llegó.");
        assert_eq!(chunks[1]["text"], "El Dr. Pérez llegó. Fue breve.");
        assert_eq!(chunks[1]["hasOverlap"], true);
        assert_eq!(body["data"]["metadata"]["totalChunks"], 2);
        assert_eq!(body["data"]["statistics"]["qualityCounts"]["short"], 2);
    }

    #[tokio::test]
    async fn test_chunk_endpoint_rejects_blank_text() {
        let (status, body) = post_json("/process/chunk", json!({ "text": "   " })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Text is required");

        let (status, _) = post_json("/process/chunk", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_clean_without_cleaner_is_unavailable() {
        let (status, body) = post_json("/process/clean", json!({ "text": "hola" })).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "text cleaner is not configured");
    }

    #[tokio::test]
    async fn test_extract_rejects_invalid_url() {
        let (status, body) = post_json("/youtube/extract", json!({ "url": "https://vimeo.com/1" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_full_pipeline_text_source() {
        let (status, body) = post_json(
            "/process/full",
            json!({ "sourceType": "text", "sourceContent": "Hola. Adiós.", "useTextCleaning": false }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["metadata"]["totalChunks"], 1);
        assert_eq!(body["data"]["metadata"]["totalWords"], 2);
        assert!(body["data"].get("cleanedText").is_none());
    }

    #[tokio::test]
    async fn test_malformed_bodies_use_error_envelope() {
        let cases = [
            ("/process/chunk", r#"{"text":5}"#),
            ("/process/chunk", r#"{"text":"Hola.","options":{"maxWords":-1}}"#),
            ("/process/clean", r#"{"text":["a"]}"#),
            ("/youtube/extract", r#"{"url":true}"#),
            ("/process/full", r#"{"sourceType":"pdf","sourceContent":"Hola."}"#),
            ("/process/full", "not json"),
        ];

        for (uri, body) in cases {
            let (status, json) = post_raw(uri, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri} {body}");
            assert_eq!(json["success"], false, "{uri} {body}");
            assert!(json["error"].as_str().is_some_and(|e| !e.is_empty()), "{uri} {body}");
        }
    }

    #[tokio::test]
    async fn test_full_pipeline_defaults_to_text_source() {
        let (status, body) = post_json("/process/full", json!({ "sourceContent": "Hola. Adiós." })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["originalText"], "Hola. Adiós.");
        assert_eq!(body["data"]["metadata"]["totalWords"], 2);
    }

    #[tokio::test]
    async fn test_chunk_endpoint_caps_overlap() {
        let (status, body) = post_json(
            "/process/chunk",
            json!({ "text": "Hola. Adiós.", "options": { "overlapSentences": 50 } }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("overlapSentences"));
    }

    #[tokio::test]
    async fn test_default_options_endpoint() {
        let (status, body) = get_json("/process/options").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"],
            json!({ "minWords": 200, "maxWords": 600, "targetWords": 400, "overlapSentences": 1 })
        );
    }

    #[tokio::test]
    async fn test_extract_includes_embed_url() {
        let (status, body) = post_json(
            "/youtube/extract",
            json!({ "url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["videoId"], "dQw4w9WgXcQ");
        assert_eq!(body["data"]["embedUrl"], "https://www.youtube.com/embed/dQw4w9WgXcQ");
        assert_eq!(body["data"]["language"], "es");
        assert_eq!(body["data"]["transcript"], "Hola a todos. Hoy hablamos de Rust.");
    }

    #[tokio::test]
    async fn test_cleaner_health_without_cleaner() {
        let (status, body) = get_json("/health/cleaner").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["success"], false);
    }
}
