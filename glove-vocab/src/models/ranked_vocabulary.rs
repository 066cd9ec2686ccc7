// src/models/ranked_vocabulary.rs
use crate::models::Entry;

/// Which configured limit cut the vocabulary short, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    None,
    /// Cut to `max_vocab` entries.
    Size(usize),
    /// Stopped at the first entry below `min_count`.
    MinCount(u64),
}

/// Sorted entries plus how many of them survive the cutoffs.
#[derive(Debug)]
pub struct RankedVocabulary {
    pub entries: Vec<Entry>,
    pub retained: usize,
    pub truncation: Truncation,
}

impl RankedVocabulary {
    /// The entries that will be emitted, in final order.
    #[inline]
    #[must_use]
    pub fn retained(&self) -> &[Entry] {
        self.entries.get(..self.retained).unwrap_or(self.entries.as_slice())
    }
}
