//! Configuration types for chunking and the service.

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::{
    DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS, DEFAULT_OVERLAP_SENTENCES, DEFAULT_PORT,
    DEFAULT_TARGET_WORDS, DEFAULT_UPSTREAM_TIMEOUT_SECS, MAX_OVERLAP_SENTENCES,
};

/// Word-count targets for a chunking run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkingOptions {
    /// Lower bound callers aim for
    pub min_words: usize,

    /// A chunk is closed before it would exceed this many words
    pub max_words: usize,

    /// Preferred chunk size
    pub target_words: usize,

    /// Sentences carried from the end of one chunk into the next
    pub overlap_sentences: usize,
}

impl Default for ChunkingOptions {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
            target_words: DEFAULT_TARGET_WORDS,
            overlap_sentences: DEFAULT_OVERLAP_SENTENCES,
        }
    }
}

impl ChunkingOptions {
    /// Create options with the given word ceiling.
    pub fn with_max_words(max_words: usize) -> Self {
        Self {
            max_words,
            ..Default::default()
        }
    }

    /// Set the overlap.
    pub fn with_overlap(mut self, overlap_sentences: usize) -> Self {
        self.overlap_sentences = overlap_sentences;
        self
    }

    /// Reject options the builder cannot honour meaningfully.
    ///
    /// An overlap of zero is allowed and disables overlap. Overlap is capped
    /// at `MAX_OVERLAP_SENTENCES`: when it reaches the chunk length every
    /// chunk re-carries all earlier sentences and output grows quadratically.
    /// Only the service boundary validates; the chunker itself accepts any value.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.max_words == 0 {
            return Err(ServiceError::InvalidInput(
                "maxWords must be greater than zero".to_string(),
            ));
        }
        if self.min_words > self.max_words {
            return Err(ServiceError::InvalidInput(format!(
                "minWords ({}) cannot exceed maxWords ({})",
                self.min_words, self.max_words
            )));
        }
        if self.overlap_sentences > MAX_OVERLAP_SENTENCES {
            return Err(ServiceError::InvalidInput(format!(
                "overlapSentences ({}) cannot exceed {}",
                self.overlap_sentences, MAX_OVERLAP_SENTENCES
            )));
        }
        Ok(())
    }
}

/// Caller-supplied overrides; unset fields fall back to a base set of options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialChunkingOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_words: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_words: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_words: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlap_sentences: Option<usize>,
}

impl PartialChunkingOptions {
    /// Overlay these overrides on `base`, field by field.
    pub fn merge_over(&self, base: &ChunkingOptions) -> ChunkingOptions {
        ChunkingOptions {
            min_words: self.min_words.unwrap_or(base.min_words),
            max_words: self.max_words.unwrap_or(base.max_words),
            target_words: self.target_words.unwrap_or(base.target_words),
            overlap_sentences: self.overlap_sentences.unwrap_or(base.overlap_sentences),
        }
    }

    /// Overlay these overrides on the built-in defaults.
    pub fn resolve(&self) -> ChunkingOptions {
        self.merge_over(&ChunkingOptions::default())
    }
}

impl From<ChunkingOptions> for PartialChunkingOptions {
    fn from(options: ChunkingOptions) -> Self {
        Self {
            min_words: Some(options.min_words),
            max_words: Some(options.max_words),
            target_words: Some(options.target_words),
            overlap_sentences: Some(options.overlap_sentences),
        }
    }
}

/// Global service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Port the HTTP server binds to
    pub port: u16,

    /// Options applied when a request does not override them
    pub default_options: ChunkingOptions,

    /// URL of the transcript fetch service
    pub transcript_service_url: Option<String>,

    /// API key for the Gemini cleaning model
    pub gemini_api_key: Option<String>,

    /// Gemini model name
    pub gemini_model: String,

    /// Base URL of the Gemini REST API
    pub gemini_base_url: String,

    /// Timeout for calls to upstream services
    pub upstream_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            default_options: ChunkingOptions::default(),
            transcript_service_url: None,
            gemini_api_key: None,
            gemini_model: "gemini-2.0-flash".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env_parse("PORT").unwrap_or(defaults.port),
            default_options: ChunkingOptions {
                min_words: env_parse("CHUNK_MIN_WORDS").unwrap_or(DEFAULT_MIN_WORDS),
                max_words: env_parse("CHUNK_MAX_WORDS").unwrap_or(DEFAULT_MAX_WORDS),
                target_words: env_parse("CHUNK_TARGET_WORDS").unwrap_or(DEFAULT_TARGET_WORDS),
                overlap_sentences: env_parse("CHUNK_OVERLAP_SENTENCES")
                    .unwrap_or(DEFAULT_OVERLAP_SENTENCES),
            },
            transcript_service_url: std::env::var("TRANSCRIPT_SERVICE_URL").ok(),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            gemini_model: std::env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: std::env::var("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            upstream_timeout_secs: env_parse("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or(defaults.upstream_timeout_secs),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}
