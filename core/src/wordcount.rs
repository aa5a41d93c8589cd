use serde::Deserialize;
use tracing::debug;

use crate::util::fast_map::{FastHashMap, fast_hash_map_new};

/// Order in which tallied words are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordOrder {
    /// Order of first appearance in the input.
    #[default]
    FirstSeen,
    /// Byte-wise ascending by word.
    Alpha,
    /// Descending by count; ties keep first-seen order.
    Count,
}

/// Word → count, remembering first-seen order.
#[derive(Debug, Default)]
pub struct WordTally<'a> {
    index: FastHashMap<&'a str, usize>,
    entries: Vec<(&'a str, u64)>,
}

impl<'a> WordTally<'a> {
    pub fn new() -> Self {
        Self {
            index: fast_hash_map_new(),
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, word: &'a str) {
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(word, self.entries.len());
                self.entries.push((word, 1));
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_ordered(self, order: WordOrder) -> Vec<(&'a str, u64)> {
        let mut entries = self.entries;
        match order {
            WordOrder::FirstSeen => {}
            WordOrder::Alpha => entries.sort_unstable_by(|a, b| a.0.cmp(b.0)),
            // stable sort keeps first-seen order among equal counts
            WordOrder::Count => entries.sort_by(|a, b| b.1.cmp(&a.1)),
        }
        entries
    }
}

/// Tally whitespace-delimited tokens.
pub fn count_words(text: &str) -> WordTally<'_> {
    let mut tally = WordTally::new();
    for word in text.split_whitespace() {
        tally.add(word);
    }
    debug!(distinct = tally.len(), "tallied words");
    tally
}
