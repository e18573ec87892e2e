//! Sentence-based chunker with sentence overlap between chunks.

use tracing::debug;

use super::base::{count_words, normalize_text};
use super::quality::QualityBands;
use super::segmenter::SentenceSegmenter;
use crate::types::{Chunk, ChunkingOptions, RawChunk};

/// Groups sentences into chunks that stay under a word ceiling.
///
/// Sentences are packed greedily in a single forward pass. When the next
/// sentence would push a chunk past `max_words`, the chunk is closed and
/// its last `overlap_sentences` sentences seed the next one. A sentence
/// longer than `max_words` is never split; it ends up in an oversized chunk.
#[derive(Debug, Clone, Default)]
pub struct SentenceChunker {
    segmenter: SentenceSegmenter,
    quality: QualityBands,
}

impl SentenceChunker {
    /// Create a chunker with the default abbreviations and quality bands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different segmenter, e.g. for another locale's abbreviations.
    pub fn with_segmenter(mut self, segmenter: SentenceSegmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Use different quality bands.
    pub fn with_quality_bands(mut self, quality: QualityBands) -> Self {
        self.quality = quality;
        self
    }

    pub fn segmenter(&self) -> &SentenceSegmenter {
        &self.segmenter
    }

    pub fn quality_bands(&self) -> QualityBands {
        self.quality
    }

    /// Chunk `text` with fully resolved options.
    ///
    /// Never fails: empty or whitespace-only text yields no chunks.
    pub fn chunk(&self, text: &str, options: &ChunkingOptions) -> Vec<Chunk> {
        let normalized = normalize_text(text);
        let sentences = self.segmenter.split(&normalized);
        let chunks: Vec<Chunk> = self
            .build_chunks(&sentences, options)
            .into_iter()
            .enumerate()
            .map(|(position, raw)| {
                let quality = self.quality.classify(raw.word_count);
                raw.finish(position, quality)
            })
            .collect();

        debug!(
            sentences = sentences.len(),
            chunks = chunks.len(),
            max_words = options.max_words,
            "Chunked text"
        );
        chunks
    }

    fn build_chunks(&self, sentences: &[String], options: &ChunkingOptions) -> Vec<RawChunk> {
        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut current_words = 0;
        let mut carried_over = false;

        for sentence in sentences {
            let sentence_words = count_words(sentence);

            if current_words + sentence_words > options.max_words && !current.is_empty() {
                chunks.push(RawChunk::new(current.join(" "), current_words, carried_over));

                let overlap_start = current.len().saturating_sub(options.overlap_sentences);
                let mut next = current.split_off(overlap_start);
                carried_over = !next.is_empty();

                next.push(sentence);
                current_words = next.iter().map(|s| count_words(s)).sum();
                current = next;
            } else {
                current.push(sentence);
                current_words += sentence_words;
            }
        }

        if !current.is_empty() {
            chunks.push(RawChunk::new(current.join(" "), current_words, carried_over));
        }

        chunks
    }
}
