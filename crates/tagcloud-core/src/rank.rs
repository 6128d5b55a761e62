//! Selecting the most frequent words.
//!
//! Ranking happens in two passes over the same entry type:
//!
//! 1. every entry is ordered by count, highest first, with ties broken by
//!    word ascending so the cutoff at position `n` is deterministic;
//! 2. the first `n` entries are re-sorted alphabetically for presentation.
//!
//! Words compare by Unicode code point (Rust's `str` ordering). Words coming
//! out of [`FrequencyMap`] are already lowercase.

use serde::{Deserialize, Serialize};

use crate::error::{CloudError, CloudResult};
use crate::frequency::FrequencyMap;

/// A word and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// The lowercased word.
    pub word: String,
    /// Number of occurrences in the input.
    pub count: usize,
}

impl RankedEntry {
    /// Create an entry.
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Order every entry of `map` by count descending, then word ascending.
pub fn by_frequency(map: FrequencyMap) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = map
        .into_iter()
        .map(|(word, count)| RankedEntry { word, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    entries
}

/// Select the `n` most frequent words and return them alphabetically.
///
/// Returns `min(n, map.len())` entries; asking for more words than exist is
/// not an error.
#[tracing::instrument(skip(map), fields(distinct = map.len()))]
pub fn rank(map: FrequencyMap, n: usize) -> Vec<RankedEntry> {
    let mut selected = by_frequency(map);
    selected.truncate(n);
    selected.sort_by(|a, b| a.word.cmp(&b.word));
    tracing::debug!(selected = selected.len(), "ranked words");
    selected
}

/// Parse the requested word count.
///
/// Rejects non-numeric text and negative numbers. Zero is accepted and
/// yields an empty cloud.
pub fn parse_count(raw: &str) -> CloudResult<usize> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| {
        CloudError::InvalidConfiguration(format!(
            "word count must be a non-negative integer, got {trimmed:?}"
        ))
    })?;
    usize::try_from(value).map_err(|_| {
        CloudError::InvalidConfiguration(format!("word count cannot be negative, got {value}"))
    })
}
