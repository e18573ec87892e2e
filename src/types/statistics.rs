//! Aggregate statistics over a chunking run.

use serde::{Deserialize, Serialize};

use super::{Chunk, ChunkQuality};

/// Per-quality tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityBreakdown<T> {
    pub ideal: T,
    pub short: T,
    pub long: T,
}

/// Summary of a chunk sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkStatistics {
    pub total_chunks: usize,
    pub total_words: usize,
    /// Mean word count rounded to the nearest integer
    pub average_words: usize,
    pub quality_counts: QualityBreakdown<usize>,
    /// Share of each quality label, 0-100
    pub quality_percentage: QualityBreakdown<f64>,
}

impl ChunkStatistics {
    /// Summarize the given chunks. An empty slice yields all zeros.
    pub fn from_chunks(chunks: &[Chunk]) -> Self {
        let total_chunks = chunks.len();
        let total_words: usize = chunks.iter().map(|c| c.word_count).sum();

        let mut counts = QualityBreakdown::<usize>::default();
        for chunk in chunks {
            match chunk.quality {
                ChunkQuality::Ideal => counts.ideal += 1,
                ChunkQuality::Short => counts.short += 1,
                ChunkQuality::Long => counts.long += 1,
            }
        }

        let (average_words, percentage) = if total_chunks == 0 {
            (0, QualityBreakdown::default())
        } else {
            let share = |count: usize| count as f64 / total_chunks as f64 * 100.0;
            (
                (total_words as f64 / total_chunks as f64).round() as usize,
                QualityBreakdown {
                    ideal: share(counts.ideal),
                    short: share(counts.short),
                    long: share(counts.long),
                },
            )
        };

        Self {
            total_chunks,
            total_words,
            average_words,
            quality_counts: counts,
            quality_percentage: percentage,
        }
    }
}
