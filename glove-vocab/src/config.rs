// src/config.rs
use crate::errors::VocabError;
use serde::Deserialize;

pub mod loader;

pub use loader::load_settings;

/// Longest token kept, in bytes. Matches a 1000-byte buffer with a terminator.
pub const DEFAULT_MAX_TOKEN_BYTES: usize = 999;

/// Immutable settings handed to the counting pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// 0, 1, or 2
    pub verbose: u8,
    /// Upper bound on vocabulary size; 0 means no limit.
    pub max_vocab: usize,
    /// Words occurring fewer times than this are discarded.
    pub min_count: u64,
    pub max_token_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verbose: 2,
            max_vocab: 0,
            min_count: 1,
            max_token_bytes: DEFAULT_MAX_TOKEN_BYTES,
        }
    }
}

impl Settings {
    /// Checks that every field is within its documented range.
    ///
    /// # Errors
    ///
    /// Returns `VocabError::Configuration` if:
    /// * `verbose` is greater than 2
    /// * `min_count` is 0
    /// * `max_token_bytes` is 0
    pub fn validate(&self) -> Result<(), VocabError> {
        if self.verbose > 2 {
            return Err(VocabError::Configuration(format!(
                "verbose must be 0, 1, or 2 (got {})",
                self.verbose
            )));
        }
        if self.min_count == 0 {
            return Err(VocabError::Configuration(String::from(
                "min_count must be at least 1",
            )));
        }
        if self.max_token_bytes == 0 {
            return Err(VocabError::Configuration(String::from(
                "max_token_bytes must be at least 1",
            )));
        }
        Ok(())
    }
}
