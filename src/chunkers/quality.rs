//! Word-count quality bands.

use serde::{Deserialize, Serialize};

use crate::types::ChunkQuality;
use crate::{IDEAL_MAX_WORDS, IDEAL_MIN_WORDS};

/// Inclusive word-count range considered ideal.
///
/// Fixed at 300-500 and deliberately not derived from `ChunkingOptions`:
/// a caller that moves `target_words` away from 400 still gets labels
/// relative to these bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityBands {
    pub ideal_min: usize,
    pub ideal_max: usize,
}

impl Default for QualityBands {
    fn default() -> Self {
        Self {
            ideal_min: IDEAL_MIN_WORDS,
            ideal_max: IDEAL_MAX_WORDS,
        }
    }
}

impl QualityBands {
    pub fn new(ideal_min: usize, ideal_max: usize) -> Self {
        Self {
            ideal_min,
            ideal_max,
        }
    }

    pub fn classify(&self, word_count: usize) -> ChunkQuality {
        if word_count < self.ideal_min {
            ChunkQuality::Short
        } else if word_count > self.ideal_max {
            ChunkQuality::Long
        } else {
            ChunkQuality::Ideal
        }
    }
}
