//! Splitting lines into word and separator runs.
//!
//! A line is partitioned into maximal runs of characters that share the same
//! classification: either every character is in the [`SeparatorSet`] or none
//! is. Concatenating the runs of a line, in order, gives back the line.

use std::collections::HashSet;

/// Characters that delimit words unless configuration overrides them.
pub const DEFAULT_SEPARATORS: &str = " \t\n\r,.<>/?;:\"'{}[]_-+=~`!@#$%^&*()|";

/// Immutable set of characters treated as word separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: HashSet<char>,
}

impl SeparatorSet {
    /// Build a separator set from every character in `chars`.
    ///
    /// Duplicates are ignored.
    pub fn new(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    /// Whether `ch` separates words.
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Number of distinct separator characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the set has no separators at all.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of non-separator characters.
    Word,
    /// A run of separator characters.
    Separator,
}

/// A maximal run of same-classified characters within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The run's text, borrowed from the line.
    pub text: &'a str,
    /// Whether the run is a word or separators.
    pub kind: TokenKind,
}

impl Token<'_> {
    /// Returns `true` for word tokens.
    pub const fn is_word(&self) -> bool {
        matches!(self.kind, TokenKind::Word)
    }
}

/// Return the run starting at byte offset `start`.
///
/// The run extends while each character has the same separator membership as
/// the character at `start`. Returns an empty string when `start` is at or
/// past the end of `text`, or does not fall on a character boundary.
pub fn next_element<'a>(text: &'a str, start: usize, separators: &SeparatorSet) -> &'a str {
    let Some(rest) = text.get(start..) else {
        return "";
    };
    let Some(first) = rest.chars().next() else {
        return "";
    };

    let is_separator = separators.contains(first);
    let end = rest
        .char_indices()
        .find(|&(_, ch)| separators.contains(ch) != is_separator)
        .map_or(rest.len(), |(idx, _)| idx);

    &rest[..end]
}

/// Iterate over the tokens of `line` from left to right.
pub fn tokenize<'a, 's>(line: &'a str, separators: &'s SeparatorSet) -> Tokens<'a, 's> {
    Tokens {
        line,
        position: 0,
        separators,
    }
}

/// Iterator returned by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a, 's> {
    line: &'a str,
    position: usize,
    separators: &'s SeparatorSet,
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = next_element(self.line, self.position, self.separators);
        let first = text.chars().next()?;
        self.position += text.len();

        let kind = if self.separators.contains(first) {
            TokenKind::Separator
        } else {
            TokenKind::Word
        };
        Some(Token { text, kind })
    }
}
