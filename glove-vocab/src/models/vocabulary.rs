// src/models/vocabulary.rs
use crate::models::Entry;

/// The unsorted vocabulary snapshot taken from the frequency table.
#[derive(Debug)]
pub struct Vocabulary {
    pub entries: Vec<Entry>,
    /// Tokens observed during the counting pass.
    pub total_tokens: u64,
}

impl Vocabulary {
    #[inline]
    #[must_use]
    pub fn unique_words(&self) -> usize {
        self.entries.len()
    }
}
