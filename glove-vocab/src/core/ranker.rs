// src/core/ranker.rs
use crate::models::{Entry, RankedVocabulary, Truncation};
use std::cmp::Ordering;

/// Descending by count. Equal counts compare equal, leaving their order arbitrary.
#[must_use]
pub fn by_count(a: &Entry, b: &Entry) -> Ordering {
    b.count.cmp(&a.count)
}

/// Descending by count, ties broken by ascending byte-wise word order.
#[must_use]
pub fn by_count_then_word(a: &Entry, b: &Entry) -> Ordering {
    by_count(a, b).then_with(|| a.word.cmp(&b.word))
}

/// Sorts and truncates the vocabulary.
///
/// When `max_vocab` is set and smaller than the vocabulary, everything is first
/// sorted by count alone and cut to `max_vocab`. Words tied at the cutoff count
/// are left in no particular order by that pass, so the cut samples across the
/// alphabet rather than keeping the alphabetically early ones. The survivors are
/// then sorted by count then word, and the scan stops at the first entry whose
/// count is below `min_count`.
///
/// # Arguments
///
/// * `entries` - Every distinct word with its count
/// * `max_vocab` - Upper bound on entries kept; 0 means no limit
/// * `min_count` - Smallest count kept; 0 or 1 keeps everything
///
/// # Returns
///
/// The sorted entries, the number retained, and which limit (if any) applied
#[must_use]
pub fn rank(mut entries: Vec<Entry>, max_vocab: usize, min_count: u64) -> RankedVocabulary {
    let unique = entries.len();

    let size_cut = max_vocab > 0 && max_vocab < unique;
    if size_cut {
        entries.sort_unstable_by(by_count);
        entries.truncate(max_vocab);
    }

    entries.sort_by(by_count_then_word);

    let retained = entries
        .iter()
        .position(|entry| entry.count < min_count)
        .unwrap_or(entries.len());

    let truncation = if retained < entries.len() {
        Truncation::MinCount(min_count)
    } else if size_cut {
        Truncation::Size(max_vocab)
    } else {
        Truncation::None
    };

    RankedVocabulary {
        entries,
        retained,
        truncation,
    }
}
