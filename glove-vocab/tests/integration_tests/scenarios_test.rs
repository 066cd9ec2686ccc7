// tests/integration_tests/scenarios_test.rs
use super::common::{run_on, settings};
use anyhow::Result;
use glove_vocab::Truncation;

const CORPUS: &[u8] = b"a b a c b a";

#[test]
fn test_full_vocabulary() -> Result<()> {
    let (out, summary) = run_on(CORPUS, &settings(0, 1))?;

    assert_eq!(out, b"a 3\nb 2\nc 1\n");
    assert_eq!(summary.total_tokens, 6);
    assert_eq!(summary.unique_words, 3);
    assert_eq!(summary.vocab_size, 3, "Every distinct word is kept");
    assert_eq!(summary.truncation, Truncation::None);
    Ok(())
}

#[test]
fn test_min_count_three() -> Result<()> {
    let (out, summary) = run_on(CORPUS, &settings(0, 3))?;

    assert_eq!(out, b"a 3\n", "Stops before b 2 since 2 < 3");
    assert_eq!(summary.truncation, Truncation::MinCount(3));
    assert_eq!(summary.vocab_size, 1);
    Ok(())
}

#[test]
fn test_max_vocab_two() -> Result<()> {
    let (out, summary) = run_on(CORPUS, &settings(2, 1))?;

    assert_eq!(out, b"a 3\nb 2\n", "c has the lowest count");
    assert_eq!(summary.truncation, Truncation::Size(2));
    Ok(())
}

#[test]
fn test_empty_corpus() -> Result<()> {
    let (out, summary) = run_on(b"", &settings(0, 1))?;

    assert!(out.is_empty());
    assert_eq!(summary.total_tokens, 0);
    assert_eq!(summary.vocab_size, 0);
    Ok(())
}

#[test]
fn test_whitespace_only_corpus() -> Result<()> {
    let (out, summary) = run_on(b" \t\r\n\n  \n", &settings(0, 1))?;

    assert!(out.is_empty(), "Blank lines hold no tokens");
    assert_eq!(summary.unique_words, 0);
    Ok(())
}

#[test]
fn test_ties_broken_alphabetically() -> Result<()> {
    let (out, _) = run_on(b"pear fig apple fig pear apple kiwi", &settings(0, 1))?;

    assert_eq!(out, b"apple 2\nfig 2\npear 2\nkiwi 1\n");
    Ok(())
}
