//! Word frequency counting.

use std::collections::HashMap;
use std::collections::hash_map;

use crate::tokenizer::{SeparatorSet, tokenize};

/// Mapping from lowercased word to the number of times it occurs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<String, usize>,
}

impl FrequencyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every word in `lines`.
    #[tracing::instrument(skip_all)]
    pub fn from_lines<I, S>(lines: I, separators: &SeparatorSet) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        let mut line_count = 0usize;
        for line in lines {
            map.add_line(line.as_ref(), separators);
            line_count += 1;
        }
        tracing::debug!(
            lines = line_count,
            distinct = map.len(),
            total = map.total_words(),
            "counted words"
        );
        map
    }

    /// Tokenize one line and count its words. Separator runs are skipped.
    pub fn add_line(&mut self, line: &str, separators: &SeparatorSet) {
        for token in tokenize(line, separators).filter(|t| t.is_word()) {
            *self.counts.entry(token.text.to_lowercase()).or_insert(0) += 1;
        }
    }

    /// Occurrences of `word`, which must already be lowercase.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no words were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total_words(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over `(word, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }
}

impl IntoIterator for FrequencyMap {
    type Item = (String, usize);
    type IntoIter = hash_map::IntoIter<String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
