// src/core/emitter.rs
use crate::models::{RankedVocabulary, RunSummary, Truncation};
use log::info;
use std::io::{self, BufWriter, Write};

/// Writes each retained entry as `word count`, one per line, in ranked order.
///
/// Words are written as their raw bytes.
///
/// # Errors
///
/// Returns any error raised while writing or flushing `writer`.
pub fn emit<W: Write>(writer: W, ranked: &RankedVocabulary) -> io::Result<()> {
    let mut out = BufWriter::new(writer);
    for entry in ranked.retained() {
        out.write_all(&entry.word)?;
        writeln!(out, " {}", entry.count)?;
    }
    out.flush()
}

/// Diagnostic lines for a finished run, filtered by verbosity.
///
/// The unique word count needs verbosity 2, truncation notices need 1, and the
/// final size is always included.
#[must_use]
pub fn summary_lines(summary: &RunSummary, verbose: u8) -> Vec<String> {
    let mut lines = Vec::new();
    if verbose > 1 {
        lines.push(format!("Counted {} unique words.", summary.unique_words));
    }
    if verbose > 0 {
        match summary.truncation {
            Truncation::MinCount(min_count) => {
                lines.push(format!("Truncating vocabulary at min count {min_count}."));
            }
            Truncation::Size(max_vocab) => {
                lines.push(format!("Truncating vocabulary at size {max_vocab}."));
            }
            Truncation::None => {}
        }
    }
    lines.push(format!("Using vocabulary of size {}.", summary.vocab_size));
    lines
}

/// Logs the summary lines for `summary`.
pub fn report(summary: &RunSummary, verbose: u8) {
    for line in summary_lines(summary, verbose) {
        info!("{line}");
    }
}
