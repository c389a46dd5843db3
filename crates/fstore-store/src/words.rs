//! Whitespace tokenization and word-frequency ranking.
//!
//! A token is a maximal run of non-separator characters, where separators are
//! Unicode whitespace plus the ASCII file, group, record and unit separators
//! (U+001C to U+001F). File bytes are decoded as UTF-8 with invalid sequences
//! replaced, so binary files still tokenize instead of failing the whole query.

use std::borrow::Cow;
use std::collections::HashMap;

use fstore_types::{SortOrder, WordFrequency};

/// Decode file content for tokenization.
pub fn decode(data: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(data)
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Iterate over the whitespace-separated tokens of `text`.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|t| !t.is_empty())
}

/// Number of tokens in a file's content.
pub fn count_words(data: &[u8]) -> u64 {
    tokens(&decode(data)).count() as u64
}

/// Running per-token occurrence counts across many files.
#[derive(Debug, Default, Clone)]
pub struct WordCounter {
    counts: HashMap<String, u64>,
    total: u64,
}

impl WordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of `text`.
    pub fn add_text(&mut self, text: &str) {
        for token in tokens(text) {
            self.total += 1;
            match self.counts.get_mut(token) {
                Some(n) => *n += 1,
                None => {
                    self.counts.insert(token.to_string(), 1);
                }
            }
        }
    }

    /// Count every token of a file's raw content.
    pub fn add_bytes(&mut self, data: &[u8]) {
        self.add_text(&decode(data));
    }

    /// Total tokens seen, including repeats.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct tokens seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Every token, most frequent first. Equal counts are ordered by token.
    pub fn ranking(&self) -> Vec<WordFrequency> {
        let mut ranked: Vec<WordFrequency> = self
            .counts
            .iter()
            .map(|(token, count)| WordFrequency::new(token.clone(), *count))
            .collect();
        ranked.sort_by(|a, b| b.count().cmp(&a.count()).then_with(|| a.token().cmp(b.token())));
        ranked
    }

    /// The top `limit` entries of the ranking in the requested order.
    ///
    /// `Asc` reverses the complete descending ranking before truncating, so it
    /// returns the `limit` least frequent tokens, least frequent first.
    pub fn frequent_words(&self, limit: usize, order: SortOrder) -> Vec<WordFrequency> {
        let mut ranked = self.ranking();
        if order == SortOrder::Asc {
            ranked.reverse();
        }
        ranked.truncate(limit);
        ranked
    }
}
