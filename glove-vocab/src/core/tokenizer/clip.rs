// src/core/tokenizer/clip.rs

/// Cuts `bytes` to at most `max_len` bytes without leaving a partial UTF-8
/// sequence at the end.
///
/// The back-off only runs when the result is exactly `max_len` long and ends in a
/// non-ASCII byte. It drops a trailing lead byte, or an incomplete 3- or 4-byte
/// sequence, but never erases the whole token. Input is assumed to be mostly
/// well-formed UTF-8; malformed sequences are clipped best-effort and other
/// encodings such as ISO-8859-1 lose at most the last few bytes.
///
/// # Examples
///
/// ```
/// use glove_vocab::core::tokenizer::clip;
///
/// assert_eq!(clip("abcé".as_bytes(), 4), b"abc");
/// assert_eq!(clip(b"abc", 10), b"abc");
/// ```
#[must_use]
pub fn clip(bytes: &[u8], max_len: usize) -> &[u8] {
    let kept = bytes.get(..max_len).unwrap_or(bytes);
    let len = kept.len();
    if len == 0 || len < max_len {
        return kept;
    }

    let at = |back: usize| kept.get(len.wrapping_sub(back)).copied().unwrap_or(0);

    if at(1) & 0x80 != 0x80 {
        return kept;
    }

    let cut = if at(1) & 0xC0 == 0xC0 {
        // lead byte with nothing after it
        if len > 1 { len - 1 } else { len }
    } else if len > 2 && at(2) & 0xE0 == 0xE0 {
        len - 2
    } else if len > 3 && at(3) & 0xF8 == 0xF0 {
        len - 3
    } else {
        len
    };

    kept.get(..cut).unwrap_or(kept)
}
