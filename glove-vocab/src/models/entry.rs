// src/models/entry.rs
use std::fmt;

/// A distinct word and the number of times it occurred in the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: Vec<u8>,
    pub count: u64,
}

impl Entry {
    #[inline]
    #[must_use]
    pub const fn new(word: Vec<u8>, count: u64) -> Self {
        Self { word, count }
    }
}

/// Renders `word count` with the word decoded lossily. Emission writes raw bytes instead.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", String::from_utf8_lossy(&self.word), self.count)
    }
}
