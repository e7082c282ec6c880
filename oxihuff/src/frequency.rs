//! Symbol frequency counting.
//!
//! A [`FrequencyTable`] remembers the order in which symbols were first
//! seen. That order is what the container header stores, and the tree
//! builder breaks ties by it, so keeping it stable is what lets the decoder
//! rebuild the exact tree used by the encoder.

use std::collections::HashMap;

/// Mapping from symbol to occurrence count, in first-insertion order.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FrequencyTable {
    /// Entries in insertion order.
    entries: Vec<(char, u64)>,
    /// Symbol to entry index.
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<char, usize>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `symbol`.
    pub fn add(&mut self, symbol: char) {
        self.add_count(symbol, 1);
    }

    /// Count `count` more occurrences of `symbol`.
    ///
    /// A symbol seen for the first time is appended to the end of the table.
    pub fn add_count(&mut self, symbol: char, count: u64) {
        match self.index.get(&symbol) {
            Some(&i) => self.entries[i].1 = self.entries[i].1.saturating_add(count),
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, count));
            }
        }
    }

    /// Get the count for `symbol`, if present.
    pub fn get(&self, symbol: char) -> Option<u64> {
        self.index.get(&symbol).map(|&i| self.entries[i].1)
    }

    /// Check whether `symbol` has an entry.
    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted message.
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, &(_, count)| acc.saturating_add(count))
    }

    /// Iterate over `(symbol, count)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Iterate over symbols in insertion order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|&(symbol, _)| symbol)
    }
}

impl PartialEq for FrequencyTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for FrequencyTable {}

impl FromIterator<(char, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (char, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (symbol, count) in iter {
            table.add_count(symbol, count);
        }
        table
    }
}

/// Count how often each symbol occurs in `message`.
///
/// Symbols appear in the table in the order of their first occurrence.
/// An empty message yields an empty table.
pub fn count_frequencies(message: &str) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for symbol in message.chars() {
        table.add(symbol);
    }
    table
}
