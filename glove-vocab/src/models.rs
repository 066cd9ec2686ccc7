// src/models.rs
mod entry;
mod ranked_vocabulary;
mod run_summary;
mod vocabulary;

pub use entry::Entry;
pub use ranked_vocabulary::{RankedVocabulary, Truncation};
pub use run_summary::RunSummary;
pub use vocabulary::Vocabulary;
