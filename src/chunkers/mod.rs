//! Transcript chunking: normalization, sentence segmentation, packing.

mod base;
mod quality;
mod segmenter;
mod sentence_chunker;

pub use base::{count_words, normalize_text};
pub use quality::QualityBands;
pub use segmenter::{SentenceSegmenter, DEFAULT_ABBREVIATIONS};
pub use sentence_chunker::SentenceChunker;
