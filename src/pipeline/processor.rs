//! Pipeline that composes the upstream services with the chunker.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};

use crate::chunkers::SentenceChunker;
use crate::error::{Result, ServiceError};
use crate::types::{
    ChunkStatistics, Chunk, ChunkingOptions, CleanedText, PartialChunkingOptions,
    ProcessRequest, ProcessedContent, ProcessingMetadata, SourceType, Transcript,
};
use crate::upstream::{youtube, TextCleaner, TranscriptSource};

/// Runs fetch → clean → chunk for one request.
///
/// Collaborators are optional; a request that needs a missing one fails
/// with `ServiceError::NotConfigured`. Upstream failures are returned
/// immediately, nothing is retried.
pub struct ProcessingPipeline {
    chunker: SentenceChunker,
    default_options: ChunkingOptions,
    transcripts: Option<Arc<dyn TranscriptSource>>,
    cleaner: Option<Arc<dyn TextCleaner>>,
}

impl ProcessingPipeline {
    /// Create a pipeline with no upstream services.
    pub fn new(default_options: ChunkingOptions) -> Self {
        Self {
            chunker: SentenceChunker::new(),
            default_options,
            transcripts: None,
            cleaner: None,
        }
    }

    pub fn with_chunker(mut self, chunker: SentenceChunker) -> Self {
        self.chunker = chunker;
        self
    }

    pub fn with_transcript_source(mut self, source: Arc<dyn TranscriptSource>) -> Self {
        self.transcripts = Some(source);
        self
    }

    pub fn with_cleaner(mut self, cleaner: Arc<dyn TextCleaner>) -> Self {
        self.cleaner = Some(cleaner);
        self
    }

    pub fn default_options(&self) -> &ChunkingOptions {
        &self.default_options
    }

    /// Merge request overrides over the service defaults and validate them.
    pub fn resolve_options(&self, overrides: Option<&PartialChunkingOptions>) -> Result<ChunkingOptions> {
        let options = overrides
            .map(|o| o.merge_over(&self.default_options))
            .unwrap_or(self.default_options);
        options.validate()?;
        Ok(options)
    }

    /// Chunk caller-supplied text. Empty or whitespace-only text is rejected.
    pub fn chunk(
        &self,
        text: &str,
        overrides: Option<&PartialChunkingOptions>,
    ) -> Result<(Vec<Chunk>, ChunkStatistics)> {
        require_text(text, "Text is required")?;
        let options = self.resolve_options(overrides)?;

        let chunks = self.chunker.chunk(text, &options);
        let stats = ChunkStatistics::from_chunks(&chunks);
        info!(
            total_chunks = stats.total_chunks,
            total_words = stats.total_words,
            "Chunked request text"
        );
        Ok((chunks, stats))
    }

    /// Fetch the transcript for a YouTube URL.
    pub async fn extract_transcript(&self, url: &str) -> Result<Transcript> {
        require_text(url, "A YouTube URL is required")?;
        if !youtube::is_valid_youtube_url(url) {
            return Err(ServiceError::InvalidInput(format!("Invalid YouTube URL: {}", url.trim())));
        }

        let source = self
            .transcripts
            .as_ref()
            .ok_or(ServiceError::NotConfigured("transcript service"))?;

        let transcript = source
            .fetch_transcript(url.trim())
            .await
            .map_err(ServiceError::TranscriptUnavailable)?;

        if transcript.transcript.trim().is_empty() {
            return Err(ServiceError::TranscriptUnavailable(anyhow::anyhow!(
                "transcript for {} is empty",
                transcript.url
            )));
        }
        Ok(transcript)
    }

    /// Clean text through the configured cleaner.
    pub async fn clean(&self, text: &str) -> Result<CleanedText> {
        require_text(text, "Text is required")?;
        let cleaner = self
            .cleaner
            .as_ref()
            .ok_or(ServiceError::NotConfigured("text cleaner"))?;

        cleaner
            .clean_text(text)
            .await
            .map_err(ServiceError::CleaningFailed)
    }

    /// Ask the configured cleaner whether it is reachable.
    pub async fn cleaner_connected(&self) -> Result<bool> {
        let cleaner = self
            .cleaner
            .as_ref()
            .ok_or(ServiceError::NotConfigured("text cleaner"))?;

        let connected = cleaner.check_connection().await;
        if !connected {
            warn!("Text cleaner is unreachable");
        }
        Ok(connected)
    }

    /// Run the full pipeline for one request.
    pub async fn process(&self, request: ProcessRequest) -> Result<ProcessedContent> {
        let started = Instant::now();
        require_text(&request.source_content, "Content is required")?;
        let options = self.resolve_options(request.options.as_ref())?;

        info!(
            source_type = %request.source_type,
            use_text_cleaning = request.use_text_cleaning,
            "Processing content"
        );

        let (original_text, transcript) = match request.source_type {
            SourceType::Youtube => {
                let transcript = self.extract_transcript(&request.source_content).await?;
                (transcript.transcript.clone(), Some(transcript))
            }
            SourceType::Text => (request.source_content.clone(), None),
        };

        let cleaned = if request.use_text_cleaning {
            Some(self.clean(&original_text).await?)
        } else {
            None
        };

        let text_to_chunk = match &cleaned {
            Some(c) if !c.cleaned_text.trim().is_empty() => c.cleaned_text.as_str(),
            Some(_) => {
                warn!("Cleaner returned empty text, chunking the original");
                original_text.as_str()
            }
            None => original_text.as_str(),
        };

        let chunks = self.chunker.chunk(text_to_chunk, &options);
        let stats = ChunkStatistics::from_chunks(&chunks);
        let processing_time_ms = started.elapsed().as_millis() as u64;

        info!(
            total_chunks = stats.total_chunks,
            total_words = stats.total_words,
            processing_time_ms,
            "Processing complete"
        );

        let metadata = ProcessingMetadata {
            total_words: stats.total_words,
            total_chunks: stats.total_chunks,
            average_words_per_chunk: stats.average_words,
            processing_time_ms,
            processed_at: Utc::now(),
            title: request.title,
            url: transcript.as_ref().map(|t| t.url.clone()),
            duration_seconds: transcript.as_ref().and_then(|t| t.duration_seconds),
            language: transcript.map(|t| t.language),
            original_word_count: cleaned.as_ref().map(|c| c.original_word_count),
            cleaned_word_count: cleaned.as_ref().map(|c| c.cleaned_word_count),
            cleaning_time_ms: cleaned.as_ref().map(|c| c.processing_time_ms),
        };

        Ok(ProcessedContent {
            original_text,
            cleaned_text: cleaned.map(|c| c.cleaned_text),
            chunks,
            metadata,
        })
    }
}

fn require_text(text: &str, message: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(ServiceError::InvalidInput(message.to_string()));
    }
    Ok(())
}
