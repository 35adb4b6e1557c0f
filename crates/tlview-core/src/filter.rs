//! Search filter over timeline records
//!
//! The search term is lower-cased once. `Title`, `MediaName` and `Category`
//! are lower-cased before comparison; `Episode` and `CreateDate` are
//! compared exactly as received. That asymmetry is part of the contract:
//! an upper-case episode code can never be found by a term containing
//! letters.

use crate::types::TimelineRecord;

/// Normalize raw input into the form the matcher compares against.
pub fn normalize_term(term: &str) -> String {
    term.to_lowercase()
}

/// Whether `record` matches an already-normalized term.
pub fn matches_normalized(record: &TimelineRecord, term: &str) -> bool {
    record.title.to_lowercase().contains(term)
        || record.episode.contains(term)
        || record.media_name.to_lowercase().contains(term)
        || record.create_date.contains(term)
        || record.category.to_lowercase().contains(term)
}

/// Whether `record` matches a raw search term.
pub fn matches(record: &TimelineRecord, term: &str) -> bool {
    matches_normalized(record, &normalize_term(term))
}

/// Indices into `all` of the records matching `term`, in input order.
pub fn filter_indices(all: &[TimelineRecord], term: &str) -> Vec<usize> {
    let term = normalize_term(term);
    all.iter()
        .enumerate()
        .filter(|(_, record)| matches_normalized(record, &term))
        .map(|(idx, _)| idx)
        .collect()
}
