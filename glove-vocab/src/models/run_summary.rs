// src/models/run_summary.rs
use crate::models::Truncation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total_tokens: u64,
    pub unique_words: usize,
    pub truncation: Truncation,
    pub vocab_size: usize,
}
