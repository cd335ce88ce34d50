//! Source id de-duplication

use std::collections::HashSet;

/// Result of [`dedupe`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deduped {
    /// First occurrence of every id, in first-seen order
    pub unique: Vec<String>,
    /// Every second-and-later occurrence, in the order it was seen
    pub duplicates: Vec<String>,
}

/// Split source ids into first occurrences and repeats
///
/// Matching is exact: no case folding or URL normalization.
pub fn dedupe<I, S>(source_ids: I) -> Deduped
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut deduped = Deduped::default();

    for id in source_ids {
        let id = id.into();
        if seen.insert(id.clone()) {
            deduped.unique.push(id);
        } else {
            deduped.duplicates.push(id);
        }
    }

    deduped
}
