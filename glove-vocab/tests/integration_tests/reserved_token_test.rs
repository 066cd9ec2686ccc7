// tests/integration_tests/reserved_token_test.rs
use super::common::{run_on, settings};
use glove_vocab::VocabError;

#[test]
fn test_reserved_token_fails_run() {
    let err = run_on(b"the cat\nsat on <unk> mat\n", &settings(0, 1))
        .expect_err("<unk> in the corpus should fail the run");

    assert!(
        matches!(
            err.downcast_ref::<VocabError>(),
            Some(VocabError::ReservedToken { position: 5 })
        ),
        "Should be a reserved token error, got: {err}"
    );
}

#[test]
fn test_reserved_token_produces_no_output() {
    let mut out = Vec::new();
    let result = glove_vocab::build_vocabulary(&b"a b\n<unk>\n"[..], &mut out, &settings(0, 1));

    assert!(result.is_err());
    assert!(out.is_empty(), "Nothing is written when the run fails");
}

#[test]
fn test_reserved_token_with_carriage_return() {
    // \r is dropped, so this is still the bare token
    let result = run_on(b"x <unk>\r\n", &settings(0, 1));
    assert!(result.is_err());
}

#[test]
fn test_embedded_placeholder_is_allowed() {
    let result = run_on(b"<unk>> <raw_unk> <un k>", &settings(0, 1));
    assert!(result.is_ok(), "Only the exact token is reserved");
}
