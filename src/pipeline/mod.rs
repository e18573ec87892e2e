//! Full processing pipeline: source text, optional cleaning, chunking.

mod processor;

pub use processor::ProcessingPipeline;
