// src/core/counter.rs
use crate::config::Settings;
use crate::core::table::FrequencyTable;
use crate::core::tokenizer::Tokenizer;
use crate::errors::{RESERVED_TOKEN, VocabError};
use log::{debug, info};
use std::io::BufRead;

/// Progress is logged every this many tokens at verbosity 2.
pub const PROGRESS_INTERVAL: u64 = 100_000;

/// Whether a progress line is due after `tokens` tokens.
#[must_use]
pub const fn progress_due(tokens: u64, verbose: u8) -> bool {
    verbose > 1 && tokens > 0 && tokens.is_multiple_of(PROGRESS_INTERVAL)
}

/// Runs the single counting pass over `reader`.
///
/// # Returns
///
/// * `Ok((FrequencyTable, u64))` - The filled table and the number of tokens observed
///
/// # Errors
///
/// This function may return an error if:
/// * Reading the corpus fails
/// * The reserved `<unk>` token appears in the corpus
pub fn count_tokens<R: BufRead>(
    reader: R,
    settings: &Settings,
) -> Result<(FrequencyTable, u64), VocabError> {
    count_tokens_into(reader, settings, FrequencyTable::new())
}

/// Like [`count_tokens`], but fills a caller-supplied table.
///
/// # Errors
///
/// Same as [`count_tokens`].
pub fn count_tokens_into<R: BufRead>(
    reader: R,
    settings: &Settings,
    mut table: FrequencyTable,
) -> Result<(FrequencyTable, u64), VocabError> {
    let mut tokenizer = Tokenizer::new(reader, settings.max_token_bytes);
    let mut tokens: u64 = 0;

    for word in tokenizer.by_ref() {
        let word = word?;
        if word == RESERVED_TOKEN.as_bytes() {
            return Err(VocabError::ReservedToken {
                position: tokens.saturating_add(1),
            });
        }
        table.observe(&word);
        tokens = tokens.saturating_add(1);
        if progress_due(tokens, settings.verbose) {
            info!("{tokens} tokens.");
        }
    }

    if settings.verbose > 1 {
        info!("Processed {tokens} tokens.");
    }
    debug!(
        "{} documents, longest bucket chain {} of {} buckets",
        tokenizer.documents(),
        table.longest_chain(),
        table.bucket_count()
    );

    Ok((table, tokens))
}
