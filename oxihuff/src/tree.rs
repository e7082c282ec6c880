//! Huffman tree construction.
//!
//! The tree is rebuilt from the stored frequency table on every
//! decompression, so construction must be fully deterministic: given the
//! same entries in the same order, [`build_tree`] always returns the same
//! shape.
//!
//! # Tie-breaking
//!
//! Pending nodes are ordered by `(weight, sequence)`. Leaves get sequence
//! numbers in table order; every merged node gets the next number after
//! all existing ones. Popping the two smallest entries therefore behaves
//! exactly like stable-sorting the working list by weight, taking the two
//! front nodes and appending their parent at the end, without re-sorting
//! on every step.

use crate::frequency::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A node of a Huffman tree.
///
/// A node is either a leaf carrying a symbol, or an internal node with
/// exactly two children. One-child nodes cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum HuffmanNode {
    /// Symbol-bearing leaf.
    Leaf {
        /// The symbol.
        symbol: char,
        /// Occurrence count of the symbol.
        weight: u64,
    },
    /// Internal node whose weight is the sum of its children.
    Internal {
        /// Combined weight of both subtrees.
        weight: u64,
        /// Subtree reached by a `0` bit.
        left: Box<HuffmanNode>,
        /// Subtree reached by a `1` bit.
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Create a leaf.
    pub fn leaf(symbol: char, weight: u64) -> Self {
        HuffmanNode::Leaf { symbol, weight }
    }

    /// Create an internal node over two subtrees.
    pub fn internal(left: HuffmanNode, right: HuffmanNode) -> Self {
        HuffmanNode::Internal {
            weight: left.weight().saturating_add(right.weight()),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Weight (frequency) of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } | HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    /// Symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<char> {
        match self {
            HuffmanNode::Leaf { symbol, .. } => Some(*symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }

    /// Check whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Left and right children of an internal node.
    pub fn children(&self) -> Option<(&HuffmanNode, &HuffmanNode)> {
        match self {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { left, right, .. } => Some((&**left, &**right)),
        }
    }

    /// Follow one edge: `false` goes left, `true` goes right.
    pub fn child(&self, bit: bool) -> Option<&HuffmanNode> {
        self.children()
            .map(|(left, right)| if bit { right } else { left })
    }

    /// Number of leaves (distinct symbols) in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Working-set entry, ordered so that `BinaryHeap` pops the lightest,
/// oldest node first.
#[derive(Debug)]
struct Pending {
    weight: u64,
    sequence: usize,
    node: HuffmanNode,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.sequence == other.sequence
    }
}

impl Eq for Pending {}

/// Build a Huffman tree from a frequency table.
///
/// Returns `None` for an empty table. A table with a single entry yields a
/// lone leaf. Otherwise the two lightest nodes are merged repeatedly, the
/// first one popped becoming the left child.
pub fn build_tree(frequencies: &FrequencyTable) -> Option<HuffmanNode> {
    let mut heap: BinaryHeap<Pending> = frequencies
        .iter()
        .enumerate()
        .map(|(sequence, (symbol, weight))| Pending {
            weight,
            sequence,
            node: HuffmanNode::leaf(symbol, weight),
        })
        .collect();

    let mut next_sequence = heap.len();

    while heap.len() > 1 {
        let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
            break;
        };

        let node = HuffmanNode::internal(left.node, right.node);
        heap.push(Pending {
            weight: node.weight(),
            sequence: next_sequence,
            node,
        });
        next_sequence += 1;
    }

    let root = heap.pop().map(|pending| pending.node);
    if let Some(ref root) = root {
        log::trace!(
            "built Huffman tree: {} leaves, depth {}, weight {}",
            root.leaf_count(),
            root.depth(),
            root.weight()
        );
    }
    root
}
