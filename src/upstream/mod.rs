//! Upstream collaborators: transcript fetching and AI text cleaning.

mod gemini_client;
mod transcript_client;
pub mod youtube;

use anyhow::Result;
use async_trait::async_trait;

use crate::types::{CleanedText, Transcript};

pub use gemini_client::{within_tolerance, word_count_ratio, GeminiCleaner, WORD_COUNT_TOLERANCE};
pub use transcript_client::{assemble_transcript, TranscriptClient, TranscriptSegment};

/// Fetches the caption transcript for a video URL.
///
/// Fails when the video has no captions.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch_transcript(&self, url: &str) -> Result<Transcript>;
}

/// Improves punctuation and formatting of raw text without summarizing it.
///
/// May fail on quota or auth errors. The cleaned word count is expected,
/// not enforced, to stay within ±15% of the original.
#[async_trait]
pub trait TextCleaner: Send + Sync {
    async fn clean_text(&self, text: &str) -> Result<CleanedText>;

    /// Whether the cleaner currently answers requests.
    async fn check_connection(&self) -> bool {
        self.clean_text("ok").await.is_ok()
    }
}
