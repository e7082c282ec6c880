//! Bit unpacking and tree-walk decoding.

use crate::config::TrailingBits;
use crate::tree::HuffmanNode;
use oxihuff_core::bitstream::MsbBitReader;
use oxihuff_core::error::{OxiHuffError, Result};

/// Expand bytes to bits (most significant first) and drop the last
/// `padding` bits.
pub fn unpack(payload: &[u8], padding: u8) -> Result<Vec<bool>> {
    Ok(MsbBitReader::with_padding(payload, padding)?.collect())
}

/// Decode a bit sequence by walking `root`, rejecting leftover bits.
///
/// See [`decode_with_policy`].
pub fn decode(bits: &[bool], root: &HuffmanNode) -> Result<String> {
    decode_with_policy(bits, root, TrailingBits::Reject)
}

/// Decode a bit sequence by walking `root`.
///
/// Each bit selects a child (`0` left, `1` right); reaching a leaf emits its
/// symbol and restarts at the root.
///
/// A root that is itself a leaf has the empty code, so no bit can select
/// it. Such a stream carries no bits at all and decodes to the symbol
/// repeated `weight` times.
///
/// # Errors
///
/// `MalformedStream` if the bits end in the middle of a code, or if a
/// single-leaf tree is given a non-empty stream, unless `trailing` is
/// [`TrailingBits::Discard`].
pub fn decode_with_policy(
    bits: &[bool],
    root: &HuffmanNode,
    trailing: TrailingBits,
) -> Result<String> {
    if let HuffmanNode::Leaf { symbol, weight } = root {
        if !bits.is_empty() && trailing == TrailingBits::Reject {
            return Err(OxiHuffError::malformed_stream(
                0,
                format!(
                    "single-symbol stream must carry no bits, found {}",
                    bits.len()
                ),
            ));
        }
        let count = usize::try_from(*weight).map_err(|_| {
            OxiHuffError::malformed_stream(0, format!("repeat count {} is too large", weight))
        })?;
        return Ok(std::iter::repeat_n(*symbol, count).collect());
    }

    let mut message = String::new();
    let mut node = root;
    let mut code_start = 0usize;

    for (position, &bit) in bits.iter().enumerate() {
        let Some(next) = node.child(bit) else {
            return Err(OxiHuffError::malformed_stream(
                position as u64,
                "walk reached a node without children",
            ));
        };

        match next.symbol() {
            Some(symbol) => {
                message.push(symbol);
                node = root;
                code_start = position + 1;
            }
            None => node = next,
        }
    }

    if code_start < bits.len() {
        let leftover = bits.len() - code_start;
        match trailing {
            TrailingBits::Reject => {
                return Err(OxiHuffError::malformed_stream(
                    code_start as u64,
                    format!("{} trailing bits do not form a complete code", leftover),
                ));
            }
            TrailingBits::Discard => {
                log::debug!("discarding {} trailing bits", leftover);
            }
        }
    }

    Ok(message)
}
