//! Property-based tests for the codec invariants.

use oxihuff::{
    FrequencyTable, HuffmanNode, build_tree, compress_to_vec, count_frequencies,
    decompress_from_slice, encode, encode_message, generate_codes, pack, unpack,
};
use proptest::prelude::*;

/// Printable ASCII plus the usual whitespace.
fn ascii_message() -> impl Strategy<Value = String> {
    "[ -~\t\r\n]{0,300}"
}

/// Small alphabets make equal weights, and therefore tie-breaking, common.
fn skewed_message() -> impl Strategy<Value = String> {
    "[abc]{0,64}"
}

fn frequency_table() -> impl Strategy<Value = FrequencyTable> {
    prop::collection::vec((any::<char>(), 1u64..500), 0..64)
        .prop_map(|entries| entries.into_iter().collect::<FrequencyTable>())
}

/// Few symbols and few distinct weights, so equal weights are the rule.
fn tied_frequency_table() -> impl Strategy<Value = FrequencyTable> {
    prop::collection::vec((prop::char::range('a', 'h'), 1u64..4), 0..16)
        .prop_map(|entries| entries.into_iter().collect::<FrequencyTable>())
}

/// Straightforward construction: stable-sort the working list by weight,
/// merge the front two, append the parent, repeat.
fn sorted_list_tree(freqs: &FrequencyTable) -> Option<HuffmanNode> {
    let mut nodes: Vec<HuffmanNode> = freqs
        .iter()
        .map(|(symbol, weight)| HuffmanNode::leaf(symbol, weight))
        .collect();
    while nodes.len() > 1 {
        nodes.sort_by_key(HuffmanNode::weight);
        let left = nodes.remove(0);
        let right = nodes.remove(0);
        nodes.push(HuffmanNode::internal(left, right));
    }
    nodes.pop()
}

fn leaf_depths(node: &HuffmanNode, depth: usize, out: &mut Vec<(char, usize)>) {
    match node.children() {
        None => out.push((node.symbol().unwrap_or_default(), depth)),
        Some((left, right)) => {
            leaf_depths(left, depth + 1, out);
            leaf_depths(right, depth + 1, out);
        }
    }
}

proptest! {
    #[test]
    fn prop_roundtrip(message in ascii_message()) {
        let (bytes, _) = compress_to_vec(&message).unwrap();
        prop_assert_eq!(decompress_from_slice(&bytes).unwrap(), message);
    }

    #[test]
    fn prop_roundtrip_small_alphabet(message in skewed_message()) {
        let (bytes, _) = compress_to_vec(&message).unwrap();
        prop_assert_eq!(decompress_from_slice(&bytes).unwrap(), message);
    }

    #[test]
    fn prop_codes_are_prefix_free(message in ascii_message()) {
        let encoded = encode_message(&message).unwrap();
        let codes: Vec<_> = encoded.codes.iter().collect();
        for (i, (a, code_a)) in codes.iter().enumerate() {
            for (b, code_b) in codes.iter().skip(i + 1) {
                prop_assert!(
                    !code_a.is_prefix_of(code_b) && !code_b.is_prefix_of(code_a),
                    "{:?}={} and {:?}={} overlap", a, code_a, b, code_b
                );
            }
        }
        prop_assert!(encoded.codes.is_prefix_free());
    }

    #[test]
    fn prop_tree_is_deterministic(freqs in frequency_table()) {
        let first = build_tree(&freqs);
        let second = build_tree(&freqs);
        prop_assert_eq!(&first, &second);
        if let (Some(first), Some(second)) = (first, second) {
            prop_assert_eq!(generate_codes(&first), generate_codes(&second));
        }
    }

    #[test]
    fn prop_tree_matches_sorted_list_merge(freqs in tied_frequency_table()) {
        prop_assert_eq!(build_tree(&freqs), sorted_list_tree(&freqs));
    }

    #[test]
    fn prop_tree_shape(freqs in frequency_table()) {
        match build_tree(&freqs) {
            None => prop_assert!(freqs.is_empty()),
            Some(root) => {
                prop_assert_eq!(root.leaf_count(), freqs.len());
                prop_assert_eq!(root.weight(), freqs.total());

                // Every leaf's code length equals its depth
                let codes = generate_codes(&root);
                let mut depths = Vec::new();
                leaf_depths(&root, 0, &mut depths);
                for (symbol, depth) in depths {
                    prop_assert_eq!(codes.get(symbol).map(|code| code.len()), Some(depth));
                }
            }
        }
    }

    #[test]
    fn prop_padding_bound(message in ascii_message()) {
        let encoded = encode_message(&message).unwrap();
        let (bytes, padding) = pack(&encoded.bits);
        prop_assert!(padding <= 7);
        prop_assert_eq!(bytes.len(), encoded.bits.len().div_ceil(8));
        prop_assert_eq!(unpack(&bytes, padding).unwrap(), encoded.bits);
    }

    #[test]
    fn prop_bit_length_matches_frequencies(message in ascii_message()) {
        let freqs = count_frequencies(&message);
        if let Some(root) = build_tree(&freqs) {
            let codes = generate_codes(&root);
            let bits = encode(&message, &codes).unwrap();
            let expected: u64 = freqs
                .iter()
                .map(|(symbol, count)| count * codes.get(symbol).map_or(0, |c| c.len() as u64))
                .sum();
            prop_assert_eq!(bits.len() as u64, expected);
        }
    }

    #[test]
    fn prop_header_size(message in ascii_message()) {
        let encoded = encode_message(&message).unwrap();
        let (bytes, _) = compress_to_vec(&message).unwrap();
        let expected = 4 + encoded.frequencies.len() * 3 + 1 + encoded.bit_len().div_ceil(8);
        prop_assert_eq!(bytes.len(), expected);
    }
}
