//! Source types and request/response definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Chunk, ChunkStatistics, PartialChunkingOptions};

/// Where the text of a processing request comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// `source_content` is a YouTube URL whose captions are fetched
    Youtube,
    /// `source_content` is the text itself
    Text,
}

impl Default for SourceType {
    fn default() -> Self {
        SourceType::Text
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceType::Youtube => write!(f, "youtube"),
            SourceType::Text => write!(f, "text"),
        }
    }
}

/// A fetched transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    /// URL the transcript was requested for
    pub url: String,

    /// Full transcript text
    pub transcript: String,

    /// Total duration covered by the captions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,

    /// Caption language ("es", or "auto" when the fallback track was used)
    pub language: String,
}

/// Result of an AI cleaning pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanedText {
    pub cleaned_text: String,
    pub original_word_count: usize,
    pub cleaned_word_count: usize,
    pub processing_time_ms: u64,
}

/// Request body for `POST /process/chunk`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChunkTextRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub options: Option<PartialChunkingOptions>,
}

/// Summary attached to a chunking response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkingSummary {
    pub total_words: usize,
    pub total_chunks: usize,
    pub average_words_per_chunk: usize,
}

impl From<&ChunkStatistics> for ChunkingSummary {
    fn from(stats: &ChunkStatistics) -> Self {
        Self {
            total_words: stats.total_words,
            total_chunks: stats.total_chunks,
            average_words_per_chunk: stats.average_words,
        }
    }
}

/// Response body for `POST /process/chunk`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingResponse {
    pub chunks: Vec<Chunk>,
    pub metadata: ChunkingSummary,
    pub statistics: ChunkStatistics,
}

/// Request body for `POST /process/clean`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CleanTextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Request body for `POST /youtube/extract`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractTranscriptRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Response body for `POST /youtube/extract`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractTranscriptResponse {
    #[serde(flatten)]
    pub transcript: Transcript,
    pub video_id: String,
    pub embed_url: String,
}

/// Response body for `GET /health/cleaner`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanerHealth {
    pub connected: bool,
}

/// Request for the full pipeline: fetch, optionally clean, chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    /// Defaults to plain text when omitted
    #[serde(default)]
    pub source_type: SourceType,

    /// URL or raw text depending on `source_type`
    #[serde(default)]
    pub source_content: String,

    #[serde(default)]
    pub use_text_cleaning: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<PartialChunkingOptions>,
}

/// Metadata describing a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingMetadata {
    pub total_words: usize,
    pub total_chunks: usize,
    pub average_words_per_chunk: usize,
    pub processing_time_ms: u64,
    pub processed_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned_word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaning_time_ms: Option<u64>,
}

/// Output of the full pipeline, ready to be stored by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedContent {
    pub original_text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned_text: Option<String>,

    pub chunks: Vec<Chunk>,

    pub metadata: ProcessingMetadata,
}

/// Uniform envelope for every HTTP response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_request_from_camel_case() {
        let request: ProcessRequest = serde_json::from_str(
            r#"{"sourceType":"youtube","sourceContent":"https://youtu.be/dQw4w9WgXcQ","useTextCleaning":true}"#,
        )
        .unwrap();

        assert_eq!(request.source_type, SourceType::Youtube);
        assert!(request.use_text_cleaning);
        assert!(request.title.is_none());
    }

    #[test]
    fn test_process_request_defaults_to_text() {
        let request: ProcessRequest =
            serde_json::from_str(r#"{"sourceContent":"Hola."}"#).unwrap();

        assert_eq!(request.source_type, SourceType::Text);
        assert!(!request.use_text_cleaning);
    }

    #[test]
    fn test_failure_envelope_omits_data() {
        let value = serde_json::to_value(ApiResponse::<()>::failure("Texto requerido")).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Texto requerido");
        assert!(value.get("data").is_none());
    }
}
