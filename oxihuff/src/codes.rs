//! Code table generation.
//!
//! Codes are read off the tree root-to-leaf: a left edge appends `0`, a
//! right edge appends `1`. Only leaves receive codes, which is what makes
//! the table prefix-free.

use crate::tree::HuffmanNode;
use std::collections::HashMap;
use std::fmt;

/// A variable-length bit string, first bit first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    /// Create an empty code.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a code from a string of `0` and `1` characters.
    ///
    /// Returns `None` if any other character is present.
    pub fn parse(text: &str) -> Option<Self> {
        text.chars()
            .map(|c| match c {
                '0' => Some(false),
                '1' => Some(true),
                _ => None,
            })
            .collect::<Option<Vec<bool>>>()
            .map(|bits| Self { bits })
    }

    /// The bits of this code.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check whether this is the zero-length code.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Check whether `self` is a prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }

    fn with_bit(&self, bit: bool) -> Self {
        let mut bits = Vec::with_capacity(self.bits.len() + 1);
        bits.extend_from_slice(&self.bits);
        bits.push(bit);
        Self { bits }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Code {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Mapping from symbol to code, in depth-first (left before right) order.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CodeTable {
    entries: Vec<(char, Code)>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<char, usize>,
}

impl CodeTable {
    /// Look up the code of `symbol`.
    pub fn get(&self, symbol: char) -> Option<&Code> {
        self.index.get(&symbol).map(|&i| &self.entries[i].1)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(symbol, code)` pairs in tree order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Code)> + '_ {
        self.entries.iter().map(|(symbol, code)| (*symbol, code))
    }

    /// Length of the longest code.
    pub fn max_len(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, code)| code.len())
            .max()
            .unwrap_or(0)
    }

    /// Check that no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&Code> = self.entries.iter().map(|(_, code)| code).collect();
        // After sorting, a prefix always sorts directly before some code it prefixes
        codes.sort_by(|a, b| a.bits.cmp(&b.bits));
        codes.windows(2).all(|pair| !pair[0].is_prefix_of(pair[1]))
    }

    fn insert(&mut self, symbol: char, code: Code) {
        self.index.insert(symbol, self.entries.len());
        self.entries.push((symbol, code));
    }
}

impl PartialEq for CodeTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for CodeTable {}

/// Derive the code table from a tree.
///
/// A tree that is a single leaf assigns that symbol the empty code.
pub fn generate_codes(root: &HuffmanNode) -> CodeTable {
    fn walk(node: &HuffmanNode, prefix: Code, table: &mut CodeTable) {
        match node {
            HuffmanNode::Leaf { symbol, .. } => table.insert(*symbol, prefix),
            HuffmanNode::Internal { left, right, .. } => {
                walk(left, prefix.with_bit(false), table);
                walk(right, prefix.with_bit(true), table);
            }
        }
    }

    let mut table = CodeTable::default();
    walk(root, Code::new(), &mut table);
    log::trace!(
        "generated {} codes, longest {} bits",
        table.len(),
        table.max_len()
    );
    table
}
