// tests/integration_tests/tokenizing_test.rs
use super::common::{run_on, settings};
use anyhow::Result;
use glove_vocab::Settings;

#[test]
fn test_documents_do_not_split_counts() -> Result<()> {
    let (out, summary) = run_on(b"x y\ny x\r\n\n\nx\n", &settings(0, 1))?;

    assert_eq!(out, b"x 3\ny 2\n");
    assert_eq!(summary.total_tokens, 5);
    Ok(())
}

#[test]
fn test_utf8_words_kept_verbatim() -> Result<()> {
    let (out, _) = run_on("café naïve café 東京".as_bytes(), &settings(0, 1))?;

    assert_eq!(out, "café 2\nnaïve 1\n東京 1\n".as_bytes());
    Ok(())
}

#[test]
fn test_long_tokens_clipped_safely() -> Result<()> {
    let config = Settings {
        max_token_bytes: 5,
        ..settings(0, 1)
    };
    // the two-byte char straddles the limit in both tokens
    let (out, _) = run_on("abcdé abcdè abcdef".as_bytes(), &config)?;

    assert_eq!(out, b"abcd 2\nabcde 1\n");
    Ok(())
}

#[test]
fn test_invalid_utf8_passes_through() -> Result<()> {
    let (out, _) = run_on(b"\xFF\xFE ok \xFF\xFE", &settings(0, 1))?;

    assert_eq!(out, b"\xFF\xFE 2\nok 1\n");
    Ok(())
}
