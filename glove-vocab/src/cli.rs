// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::build_vocabulary;
use crate::config::{Settings, load_settings};
use crate::models::RunSummary;
use crate::utils::{open_input, open_output};

/// Simple tool to extract unigram counts
#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Example usage:\n  glove-vocab --verbose 2 --max-vocab 100000 --min-count 10 < corpus.txt > vocab.txt"
)]
pub struct Args {
    /// Set verbosity: 0, 1, or 2 (default)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub verbose: Option<u8>,

    /// Upper bound on vocabulary size, i.e. keep the N most frequent words.
    /// The minimum frequency words are randomly sampled so as to obtain an
    /// even distribution over the alphabet
    #[arg(short, long, value_name = "N")]
    pub max_vocab: Option<usize>,

    /// Lower limit such that words which occur fewer than N times are discarded
    #[arg(short = 'c', long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub min_count: Option<u64>,

    /// Longest token kept, in bytes. Longer tokens are clipped
    #[arg(long, value_name = "BYTES")]
    pub max_token_bytes: Option<usize>,

    /// TOML file with default settings (flags take precedence)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read the corpus from FILE instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the vocabulary to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Layers defaults, the config file and command-line flags, in that order.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The config file cannot be read or parsed
    /// * The resulting settings are out of range
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => load_settings(path)?,
            None => Settings::default(),
        };

        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(max_vocab) = self.max_vocab {
            settings.max_vocab = max_vocab;
        }
        if let Some(min_count) = self.min_count {
            settings.min_count = min_count;
        }
        if let Some(max_token_bytes) = self.max_token_bytes {
            settings.max_token_bytes = max_token_bytes;
        }

        settings.validate()?;
        Ok(settings)
    }
}

/// Resolves settings from `args` and runs the whole pipeline.
///
/// # Errors
///
/// Returns an error if settings are invalid, the input or output cannot be
/// opened, the corpus contains the reserved token, or writing fails.
pub fn run(args: &Args) -> Result<RunSummary> {
    let settings = args.settings()?;
    run_with(args, &settings)
}

/// Runs the pipeline with already-resolved settings.
///
/// # Errors
///
/// Same as [`run`], minus settings resolution.
pub fn run_with(args: &Args, settings: &Settings) -> Result<RunSummary> {
    let reader = open_input(args.input.as_deref())?;
    let writer = open_output(args.output.as_deref())?;
    build_vocabulary(reader, writer, settings)
}
