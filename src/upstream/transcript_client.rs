//! HTTP client for the transcript fetch service.

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::youtube::extract_video_id;
use super::TranscriptSource;
use crate::types::Transcript;

/// Preferred caption language.
const PREFERRED_LANGUAGE: &str = "es";

/// One timed caption segment as returned by the transcript service.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    /// Start time in seconds
    #[serde(default)]
    pub offset: f64,
    /// Segment length in seconds
    #[serde(default)]
    pub duration: f64,
}

/// Client for a service exposing `GET /transcripts/{video_id}[?lang=xx]`.
pub struct TranscriptClient {
    client: Client,
    base_url: String,
}

impl TranscriptClient {
    /// Create a new transcript client.
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn fetch_segments(
        &self,
        video_id: &str,
        language: Option<&str>,
    ) -> Result<Vec<TranscriptSegment>> {
        let url = format!("{}/transcripts/{}", self.base_url, video_id);
        let mut request = self.client.get(&url);
        if let Some(lang) = language {
            request = request.query(&[("lang", lang)]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("Transcript service returned {}: {}", status, text));
        }

        let segments: Vec<TranscriptSegment> = response.json().await?;
        if segments.is_empty() {
            return Err(anyhow!("Transcript service returned no segments"));
        }
        Ok(segments)
    }
}

#[async_trait]
impl TranscriptSource for TranscriptClient {
    async fn fetch_transcript(&self, url: &str) -> Result<Transcript> {
        let video_id =
            extract_video_id(url).ok_or_else(|| anyhow!("Invalid YouTube URL: {}", url))?;

        match self.fetch_segments(&video_id, Some(PREFERRED_LANGUAGE)).await {
            Ok(segments) => {
                info!(video_id = %video_id, segments = segments.len(), "Fetched Spanish captions");
                return Ok(assemble_transcript(url, &segments, PREFERRED_LANGUAGE));
            }
            Err(e) => {
                debug!(video_id = %video_id, error = %e, "No Spanish captions, trying any language");
            }
        }

        match self.fetch_segments(&video_id, None).await {
            Ok(segments) => {
                info!(video_id = %video_id, segments = segments.len(), "Fetched fallback captions");
                Ok(assemble_transcript(url, &segments, "auto"))
            }
            Err(e) => {
                warn!(video_id = %video_id, error = %e, "No captions available");
                Err(anyhow!(
                    "No captions found for this video; make sure it has subtitles available"
                ))
            }
        }
    }
}

/// Join caption segments into one transcript.
///
/// Whitespace is collapsed to single spaces. The duration is the latest
/// segment end, rounded to whole seconds, or zero without segments.
pub fn assemble_transcript(url: &str, segments: &[TranscriptSegment], language: &str) -> Transcript {
    let transcript = segments
        .iter()
        .flat_map(|s| s.text.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ");

    let duration = segments
        .iter()
        .map(|s| s.offset + s.duration)
        .fold(0.0_f64, f64::max);

    Transcript {
        url: url.to_string(),
        transcript,
        duration_seconds: Some(duration.round() as u64),
        language: language.to_string(),
    }
}
