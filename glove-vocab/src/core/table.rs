// src/core/table.rs
use crate::models::Entry;

/// Bucket count used by [`FrequencyTable::new`]. Fixed for the table's lifetime.
pub const DEFAULT_BUCKETS: usize = 1 << 20;

const SEED: u32 = 1_159_241;

/// Shift-add-xor string hash, from Hugh Williams' move-to-front hashing work.
///
/// Bytes are sign-extended the way a signed C `char` would be, so words with
/// non-ASCII bytes land in the same buckets as the classic `vocab_count` tool.
#[must_use]
pub fn bitwise_hash(word: &[u8], buckets: usize) -> usize {
    let mut h = SEED;
    for &byte in word {
        // sign-extend
        let c = i32::from(byte as i8) as u32;
        h ^= (h << 5).wrapping_add(c).wrapping_add(h >> 2);
    }
    (h & 0x7fff_ffff) as usize % buckets.max(1)
}

/// Chained hash table of word counts with move-to-front on access.
///
/// A repeat hit is unlinked and reinserted at the head of its bucket, so the few
/// very frequent words of natural text stay at the front of short chains. New
/// words go to the tail. The table never rehashes.
#[derive(Debug)]
pub struct FrequencyTable {
    buckets: Vec<Vec<Entry>>,
    unique: usize,
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// Creates a table with `buckets` chains (at least one).
    #[must_use]
    pub fn with_buckets(buckets: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); buckets.max(1)],
            unique: 0,
        }
    }

    /// Counts one occurrence of `word`, inserting it with count 1 if absent.
    pub fn observe(&mut self, word: &[u8]) {
        let index = bitwise_hash(word, self.buckets.len());
        let bucket = &mut self.buckets[index];

        match bucket.iter().position(|record| record.word == word) {
            Some(pos) => {
                let chain = &mut bucket[..=pos];
                chain[pos].count = chain[pos].count.saturating_add(1);
                // move to front on access
                chain.rotate_right(1);
            }
            None => {
                // new records are not moved to front
                bucket.push(Entry::new(word.to_vec(), 1));
                self.unique = self.unique.saturating_add(1);
            }
        }
    }

    /// Looks up a count without reordering the bucket.
    #[must_use]
    pub fn count(&self, word: &[u8]) -> Option<u64> {
        self.buckets[bitwise_hash(word, self.buckets.len())]
            .iter()
            .find(|record| record.word == word)
            .map(|record| record.count)
    }

    /// Number of distinct words.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.unique
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.unique == 0
    }

    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the longest collision chain.
    #[must_use]
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Consumes the table, yielding records bucket by bucket in chain order.
    pub fn into_records(self) -> impl Iterator<Item = Entry> {
        self.buckets.into_iter().flatten()
    }
}
