//! Core types for the chunking service.

mod chunk;
mod config;
mod source;
mod statistics;

pub use chunk::{Chunk, ChunkQuality};
pub(crate) use chunk::RawChunk;
pub use config::{ChunkingOptions, PartialChunkingOptions, ServiceConfig};
pub use source::{
    ApiResponse, ChunkTextRequest, ChunkingResponse, ChunkingSummary, CleanTextRequest,
    CleanedText, CleanerHealth, ExtractTranscriptRequest, ExtractTranscriptResponse,
    ProcessRequest, ProcessedContent, ProcessingMetadata, SourceType, Transcript,
};
pub use statistics::{ChunkStatistics, QualityBreakdown};
