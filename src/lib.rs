//! Transcript Chunker Library
//!
//! Splits transcript text into overlapping, sentence-aligned chunks sized
//! for embedding, display or quiz generation, and wraps the chunker in a
//! small processing service (transcript fetch, AI cleaning, HTTP API).
//!
//! The chunking core is pure and synchronous:
//!
//! ```
//! use transcript_chunker::{chunk_text, chunk_statistics, PartialChunkingOptions};
//!
//! let chunks = chunk_text("El Dr. Pérez llegó. Fue breve.", &PartialChunkingOptions::default());
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunk_statistics(&chunks).total_words, 6);
//! ```

pub mod api;
pub mod chunkers;
pub mod error;
pub mod pipeline;
pub mod types;
pub mod upstream;

pub use chunkers::{count_words, normalize_text, QualityBands, SentenceChunker, SentenceSegmenter};
pub use error::ServiceError;
pub use pipeline::ProcessingPipeline;
pub use types::{
    Chunk, ChunkQuality, ChunkStatistics, ChunkingOptions, PartialChunkingOptions,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::chunkers::*;
    pub use crate::types::*;
    pub use crate::{chunk_statistics, chunk_text};
}

/// Default lower word target per chunk
pub const DEFAULT_MIN_WORDS: usize = 200;

/// Default word ceiling per chunk
pub const DEFAULT_MAX_WORDS: usize = 600;

/// Default preferred chunk size
pub const DEFAULT_TARGET_WORDS: usize = 400;

/// Default number of sentences repeated between chunks
pub const DEFAULT_OVERLAP_SENTENCES: usize = 1;

/// Largest overlap accepted from service callers
pub const MAX_OVERLAP_SENTENCES: usize = 5;

/// Smallest word count labelled ideal
pub const IDEAL_MIN_WORDS: usize = 300;

/// Largest word count labelled ideal
pub const IDEAL_MAX_WORDS: usize = 500;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3017;

/// Default timeout for upstream calls
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

/// Chunk `text`, overriding any subset of the default options.
///
/// Never fails; empty input yields no chunks.
pub fn chunk_text(text: &str, options: &PartialChunkingOptions) -> Vec<Chunk> {
    SentenceChunker::new().chunk(text, &options.resolve())
}

/// Summarize a chunk sequence.
pub fn chunk_statistics(chunks: &[Chunk]) -> ChunkStatistics {
    ChunkStatistics::from_chunks(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let chunks = chunk_text("", &PartialChunkingOptions::default());
        assert!(chunks.is_empty());

        let stats = chunk_statistics(&chunks);
        assert_eq!(stats.total_chunks, 0);
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.average_words, 0);
    }

    #[test]
    fn test_non_empty_input_yields_chunks() {
        for text in ["hola", "Una frase. Otra frase.", "sin puntuación\n\nni mayúsculas"] {
            let chunks = chunk_text(text, &PartialChunkingOptions::default());
            assert!(!chunks.is_empty(), "{text:?}");
            for (i, chunk) in chunks.iter().enumerate() {
                assert_eq!(chunk.position, i);
            }
        }
    }

    #[test]
    fn test_quality_matches_word_count() {
        let sentence = |n: usize| format!("Palabra{} {}.", n, "x ".repeat(49).trim());
        let text = (0..30).map(sentence).collect::<Vec<_>>().join(" ");
        let overrides = PartialChunkingOptions {
            max_words: Some(550),
            ..Default::default()
        };

        for chunk in chunk_text(&text, &overrides) {
            let expected = if chunk.word_count < 300 {
                ChunkQuality::Short
            } else if chunk.word_count > 500 {
                ChunkQuality::Long
            } else {
                ChunkQuality::Ideal
            };
            assert_eq!(chunk.quality, expected);
            assert_eq!(chunk.word_count, count_words(&chunk.text));
        }
    }
}
