// tests/integration_tests/common.rs
use anyhow::Result;
use glove_vocab::{RunSummary, Settings, build_vocabulary};
use std::collections::HashMap;

/// Settings with logging quiet and the given limits.
pub fn settings(max_vocab: usize, min_count: u64) -> Settings {
    Settings {
        verbose: 0,
        max_vocab,
        min_count,
        ..Settings::default()
    }
}

/// Runs the pipeline over `corpus` and returns the raw output and summary.
pub fn run_on(corpus: &[u8], settings: &Settings) -> Result<(Vec<u8>, RunSummary)> {
    let mut out = Vec::new();
    let summary = build_vocabulary(corpus, &mut out, settings)?;
    Ok((out, summary))
}

/// Parses emitted `word count` lines.
pub fn parse_lines(out: &[u8]) -> Vec<(String, u64)> {
    String::from_utf8_lossy(out)
        .lines()
        .filter_map(|line| {
            let (word, count) = line.rsplit_once(' ')?;
            Some((word.to_owned(), count.parse().ok()?))
        })
        .collect()
}

/// Counts whitespace-separated words the obvious way.
pub fn naive_counts(corpus: &str) -> HashMap<String, u64> {
    let mut counts = HashMap::new();
    for word in corpus.split([' ', '\t', '\n']).filter(|w| !w.is_empty()) {
        *counts.entry(word.to_owned()).or_insert(0) += 1;
    }
    counts
}

/// Deterministic Zipf-ish corpus: a few words dominate, many appear once or twice.
pub fn skewed_corpus(tokens: usize) -> String {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    let mut words = Vec::with_capacity(tokens);
    for i in 0..tokens {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let r = (state >> 33) % 1000;
        let rank = 1000 / (r + 1);
        words.push(format!("w{rank}"));
        if i % 17 == 16 {
            words.push(String::from("\n"));
        }
    }
    words.join(" ")
}
