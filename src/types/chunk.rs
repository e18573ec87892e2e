//! Chunk type definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Quality label derived from a chunk's word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkQuality {
    /// Inside the ideal word band
    Ideal,
    /// Below the ideal band
    Short,
    /// Above the ideal band
    Long,
}

impl std::fmt::Display for ChunkQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChunkQuality::Ideal => write!(f, "ideal"),
            ChunkQuality::Short => write!(f, "short"),
            ChunkQuality::Long => write!(f, "long"),
        }
    }
}

/// A sentence-aligned segment of a transcript.
///
/// Chunks are produced once per chunking run and handed to the caller;
/// the chunker keeps no reference to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    /// Unique identifier for this chunk
    pub id: Uuid,

    /// Sentences of the chunk joined by single spaces
    pub text: String,

    /// Number of whitespace-separated words in `text`
    pub word_count: usize,

    /// Order of this chunk within its run (0-indexed)
    pub position: usize,

    /// Whether the chunk starts with sentences carried over from the previous one
    pub has_overlap: bool,

    /// Quality label for the word count
    pub quality: ChunkQuality,
}

impl Chunk {
    /// Get the length of the chunk text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the chunk is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Chunk as emitted by the builder, before position and quality are attached.
#[derive(Debug, Clone)]
pub(crate) struct RawChunk {
    pub id: Uuid,
    pub text: String,
    pub word_count: usize,
    pub has_overlap: bool,
}

impl RawChunk {
    pub fn new(text: String, word_count: usize, has_overlap: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            word_count,
            has_overlap,
        }
    }

    pub fn finish(self, position: usize, quality: ChunkQuality) -> Chunk {
        Chunk {
            id: self.id,
            text: self.text,
            word_count: self.word_count,
            position,
            has_overlap: self.has_overlap,
            quality,
        }
    }
}
