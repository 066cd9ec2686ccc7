// src/core/vocabulary.rs
use crate::core::table::FrequencyTable;
use crate::models::{Entry, Vocabulary};

/// Starting capacity of the migrated vocabulary.
pub const INITIAL_CAPACITY: usize = 12_500;
/// Fixed number of slots added each time the vocabulary fills up.
pub const GROWTH_INCREMENT: usize = 2_500;

/// Moves every record out of `table` into a flat vocabulary.
///
/// Buckets are walked in index order and each chain keeps its internal order.
/// Words are moved, not copied. The table is consumed.
#[must_use]
pub fn migrate(table: FrequencyTable, total_tokens: u64) -> Vocabulary {
    let mut entries: Vec<Entry> = Vec::with_capacity(INITIAL_CAPACITY);

    for record in table.into_records() {
        if entries.len() == entries.capacity() {
            entries.reserve_exact(GROWTH_INCREMENT);
        }
        entries.push(record);
    }

    Vocabulary {
        entries,
        total_tokens,
    }
}
