//! Frequency-ranked vocabulary extraction, the first stage of a GloVe-style
//! word embedding pipeline.
//!
//! The corpus is read once: the [tokenizer](crate::core::tokenizer) splits it
//! into words, the [table](crate::core::table) counts them,
//! [vocabulary](crate::core::vocabulary) moves the counts into a flat list, the
//! [ranker](crate::core::ranker) sorts and truncates it and the
//! [emitter](crate::core::emitter) writes `word count` lines.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod utils;

use anyhow::{Context as _, Result};
use log::info;
use std::io::{BufRead, Write};

pub use cli::{Args, run};
pub use config::Settings;
pub use errors::VocabError;
pub use models::{Entry, RankedVocabulary, RunSummary, Truncation};

use crate::core::counter::count_tokens;
use crate::core::emitter::{emit, report};
use crate::core::ranker::rank;
use crate::core::vocabulary::migrate;

/// Counts every word in `reader` and writes the ranked vocabulary to `writer`.
///
/// Nothing is written if the corpus contains the reserved `<unk>` token.
///
/// # Errors
///
/// This function may return an error if:
/// * `settings` fails validation
/// * Reading the corpus or writing the vocabulary fails
/// * The corpus contains the reserved token (`VocabError::ReservedToken`)
pub fn build_vocabulary<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    settings: &Settings,
) -> Result<RunSummary> {
    settings.validate()?;

    info!("BUILDING VOCABULARY");
    let (table, total_tokens) = count_tokens(reader, settings)?;

    let vocabulary = migrate(table, total_tokens);
    let unique_words = vocabulary.unique_words();

    let ranked = rank(vocabulary.entries, settings.max_vocab, settings.min_count);
    emit(writer, &ranked).context("Failed to write vocabulary")?;

    let summary = RunSummary {
        total_tokens,
        unique_words,
        truncation: ranked.truncation,
        vocab_size: ranked.retained,
    };
    report(&summary, settings.verbose);
    Ok(summary)
}
