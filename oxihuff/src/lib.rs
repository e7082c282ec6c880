//! # OxiHuff
//!
//! Pure Rust Huffman compression of text messages into a small,
//! self-describing binary container.
//!
//! The pipeline is classical Huffman coding:
//!
//! 1. [`count_frequencies`] counts every symbol of the message
//! 2. [`build_tree`] merges the two lightest nodes until one root remains,
//!    breaking ties deterministically by table order
//! 3. [`generate_codes`] reads a prefix-free code for each symbol off the tree
//! 4. [`encode`] and [`pack`] turn the message into MSB-first bytes
//! 5. [`Container`] stores the frequencies, the padding and the payload
//!
//! Decompression reads the container, rebuilds the very same tree from the
//! stored frequencies, [`unpack`]s the payload and [`decode`]s it by
//! walking the tree.
//!
//! ## Example
//!
//! ```rust
//! use oxihuff::{compress_to_vec, decompress_from_slice};
//!
//! let message = "abracadabra";
//! let (bytes, codes) = compress_to_vec(message).unwrap();
//!
//! // 'a' is the most frequent symbol and gets the shortest code
//! assert_eq!(codes.get('a').unwrap().len(), 1);
//! assert!(codes.is_prefix_free());
//!
//! assert_eq!(decompress_from_slice(&bytes).unwrap(), message);
//! ```
//!
//! ## Files
//!
//! ```rust,no_run
//! let codes = oxihuff::compress("hello huffman", "message.bin")?;
//! for (symbol, code) in codes.iter() {
//!     println!("{:?}: {}", symbol, code);
//! }
//!
//! let message = oxihuff::decompress("message.bin")?;
//! assert_eq!(message, "hello huffman");
//!
//! let inspection = oxihuff::inspect("message.bin")?;
//! assert_eq!(inspection.frequencies.get('l'), Some(2));
//! # Ok::<(), oxihuff::OxiHuffError>(())
//! ```
//!
//! ## Limits
//!
//! Each header entry reserves one byte for the symbol and two for its
//! count, so by default messages are limited to ASCII symbols
//! ([`HuffConfig::LATIN1`] widens this to U+00FF) and to 65535 occurrences
//! of any one symbol. Messages outside these limits are rejected with
//! [`OxiHuffError::SymbolWidth`] or [`OxiHuffError::FrequencyOverflow`]
//! before anything is written.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod codes;
pub mod config;
pub mod container;
pub mod decode;
pub mod encode;
pub mod frequency;
pub mod tree;

// Re-exports
pub use codec::{EncodedMessage, HuffmanCodec, Inspection};
pub use codes::{Code, CodeTable, generate_codes};
pub use config::{Alphabet, HuffConfig, TrailingBits};
pub use container::{Container, read_container, write_container};
pub use decode::{decode, decode_with_policy, unpack};
pub use encode::{bit_string, encode, pack};
pub use frequency::{FrequencyTable, count_frequencies};
pub use oxihuff_core::{OxiHuffError, Result};
pub use tree::{HuffmanNode, build_tree};

use std::path::Path;

/// Compress `message` and write the container to `path`.
///
/// Returns the code table for display.
///
/// # Example
///
/// ```rust,no_run
/// let codes = oxihuff::compress("aaab", "out.bin").unwrap();
/// assert_eq!(codes.len(), 2);
/// ```
pub fn compress(message: &str, path: impl AsRef<Path>) -> Result<CodeTable> {
    HuffmanCodec::default().compress(message, path)
}

/// Read the container at `path` and return the original message.
///
/// # Errors
///
/// - [`OxiHuffError::FileNotFound`] if `path` does not exist
/// - [`OxiHuffError::CorruptHeader`] if the header is inconsistent
/// - [`OxiHuffError::MalformedStream`] if the payload cannot be decoded
pub fn decompress(path: impl AsRef<Path>) -> Result<String> {
    HuffmanCodec::default().decompress(path)
}

/// Read the frequency table and rebuilt tree of the container at `path`.
///
/// The file is only read.
pub fn inspect(path: impl AsRef<Path>) -> Result<Inspection> {
    HuffmanCodec::default().inspect(path)
}

/// Compress `message` into container bytes.
///
/// # Example
///
/// ```rust
/// let (bytes, _) = oxihuff::compress_to_vec("").unwrap();
/// assert_eq!(bytes, vec![0, 0, 0, 0, 0]);
/// ```
pub fn compress_to_vec(message: &str) -> Result<(Vec<u8>, CodeTable)> {
    HuffmanCodec::default().compress_to_vec(message)
}

/// Decompress container bytes.
pub fn decompress_from_slice(data: &[u8]) -> Result<String> {
    HuffmanCodec::default().decompress_from_slice(data)
}

/// Inspect container bytes.
pub fn inspect_slice(data: &[u8]) -> Result<Inspection> {
    HuffmanCodec::default().inspect_slice(data)
}

/// Run the in-memory compression pipeline without building a container.
///
/// # Example
///
/// ```rust
/// let encoded = oxihuff::encode_message("abcc").unwrap();
/// assert_eq!(encoded.bit_string(), "101100");
/// ```
pub fn encode_message(message: &str) -> Result<EncodedMessage> {
    HuffmanCodec::default().encode_message(message)
}
