//! End-to-end compression and decompression.
//!
//! ```text
//! compress:   message → frequencies → tree → codes → bits → pack → container
//! decompress: container → frequencies → tree ─┐
//!                       → payload → unpack ───┴→ tree walk → message
//! ```
//!
//! Every call builds its own tree and tables; nothing is cached between
//! calls.

use crate::codes::{CodeTable, generate_codes};
use crate::config::{HuffConfig, TrailingBits};
use crate::container::{Container, read_all};
use crate::decode::{decode_with_policy, unpack};
use crate::encode::{bit_string, encode, pack};
use crate::frequency::{FrequencyTable, count_frequencies};
use crate::tree::{HuffmanNode, build_tree};
use oxihuff_core::error::{OxiHuffError, Result};
use std::fs;
use std::path::Path;

/// A message run through the compression pipeline, before it is written
/// to a container.
#[derive(Debug, Clone)]
pub struct EncodedMessage {
    /// Symbol frequencies in first-occurrence order.
    pub frequencies: FrequencyTable,
    /// Tree built from the frequencies (`None` for an empty message).
    pub tree: Option<HuffmanNode>,
    /// Code of every symbol.
    pub codes: CodeTable,
    /// The encoded message, one entry per bit.
    pub bits: Vec<bool>,
}

impl EncodedMessage {
    /// The encoded message as a string of `0` and `1` characters.
    pub fn bit_string(&self) -> String {
        bit_string(&self.bits)
    }

    /// Number of encoded bits, excluding padding.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Pack the bits and wrap them with the frequency table.
    pub fn to_container(&self) -> Container {
        let (payload, padding) = pack(&self.bits);
        Container::new(self.frequencies.clone(), payload, padding)
    }
}

/// Read-only view of a container for rendering collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Inspection {
    /// Frequencies in header order.
    pub frequencies: FrequencyTable,
    /// Tree rebuilt from the frequencies (`None` for an empty container).
    pub tree: Option<HuffmanNode>,
    /// Padding bits in the last payload byte.
    pub padding: u8,
    /// Payload size in bytes.
    pub payload_len: usize,
}

impl Inspection {
    fn from_container(container: Container) -> Self {
        let tree = build_tree(&container.frequencies);
        Self {
            frequencies: container.frequencies,
            tree,
            padding: container.padding,
            payload_len: container.payload.len(),
        }
    }

    /// Code table derived from the rebuilt tree.
    pub fn codes(&self) -> CodeTable {
        self.tree.as_ref().map(generate_codes).unwrap_or_default()
    }

    /// Number of meaningful payload bits.
    pub fn bit_len(&self) -> u64 {
        (self.payload_len as u64 * 8).saturating_sub(u64::from(self.padding))
    }
}

/// Huffman compressor/decompressor bound to a configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec {
    config: HuffConfig,
}

impl HuffmanCodec {
    /// Create a codec with the given configuration.
    pub fn new(config: HuffConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &HuffConfig {
        &self.config
    }

    /// Run the in-memory part of compression: count, build, assign codes
    /// and encode.
    ///
    /// # Errors
    ///
    /// `SymbolWidth` if a symbol is outside the configured alphabet.
    pub fn encode_message(&self, message: &str) -> Result<EncodedMessage> {
        if let Some((position, symbol)) = message
            .chars()
            .enumerate()
            .find(|&(_, symbol)| !self.config.alphabet.contains(symbol))
        {
            return Err(OxiHuffError::symbol_width(symbol, position));
        }

        let frequencies = count_frequencies(message);
        let tree = build_tree(&frequencies);
        let codes = tree.as_ref().map(generate_codes).unwrap_or_default();
        let bits = encode(message, &codes)?;

        Ok(EncodedMessage {
            frequencies,
            tree,
            codes,
            bits,
        })
    }

    /// Compress `message` into container bytes.
    ///
    /// Returns the bytes and the code table used.
    pub fn compress_to_vec(&self, message: &str) -> Result<(Vec<u8>, CodeTable)> {
        let encoded = self.encode_message(message)?;
        let container = encoded.to_container();
        let bytes = container.to_bytes(self.config.alphabet)?;

        log::debug!(
            "compressed {} symbols ({} distinct) into {} bits, padding {}, container {} bytes",
            encoded.frequencies.total(),
            encoded.frequencies.len(),
            encoded.bit_len(),
            container.padding,
            bytes.len()
        );

        Ok((bytes, encoded.codes))
    }

    /// Compress `message` and write the container to `path`.
    ///
    /// Nothing is written unless the whole container could be built.
    pub fn compress(&self, message: &str, path: impl AsRef<Path>) -> Result<CodeTable> {
        let (bytes, codes) = self.compress_to_vec(message)?;
        fs::write(path.as_ref(), bytes)?;
        Ok(codes)
    }

    /// Decode an already parsed container.
    pub fn decode_container(&self, container: &Container) -> Result<String> {
        let bits = unpack(&container.payload, container.padding)?;

        let message = match build_tree(&container.frequencies) {
            Some(root) => decode_with_policy(&bits, &root, self.config.trailing_bits)?,
            None => {
                if !bits.is_empty() && self.config.trailing_bits == TrailingBits::Reject {
                    return Err(OxiHuffError::malformed_stream(
                        0,
                        format!("{} payload bits but no symbols in the header", bits.len()),
                    ));
                }
                String::new()
            }
        };

        let decoded = message.chars().count() as u64;
        if self.config.verify_counts {
            let expected = container.frequencies.total();
            if decoded != expected {
                return Err(OxiHuffError::malformed_stream(
                    bits.len() as u64,
                    format!(
                        "decoded {} symbols but the header accounts for {}",
                        decoded, expected
                    ),
                ));
            }
        }

        log::debug!("decompressed {} bits into {} symbols", bits.len(), decoded);

        Ok(message)
    }

    /// Decompress container bytes.
    pub fn decompress_from_slice(&self, data: &[u8]) -> Result<String> {
        let container = Container::from_bytes(data, self.config.alphabet)?;
        self.decode_container(&container)
    }

    /// Read and decompress the container at `path`.
    ///
    /// # Errors
    ///
    /// `FileNotFound` for a missing path, `CorruptHeader` for an
    /// inconsistent header, `MalformedStream` for an undecodable payload.
    pub fn decompress(&self, path: impl AsRef<Path>) -> Result<String> {
        let data = read_all(path.as_ref())?;
        self.decompress_from_slice(&data)
    }

    /// Parse container bytes and rebuild the tree without decoding.
    pub fn inspect_slice(&self, data: &[u8]) -> Result<Inspection> {
        let container = Container::from_bytes(data, self.config.alphabet)?;
        Ok(Inspection::from_container(container))
    }

    /// Read the container at `path` and rebuild the tree without decoding.
    pub fn inspect(&self, path: impl AsRef<Path>) -> Result<Inspection> {
        let data = read_all(path.as_ref())?;
        self.inspect_slice(&data)
    }
}
