//! Message encoding and bit packing.

use crate::codes::CodeTable;
use oxihuff_core::bitstream::MsbBitWriter;
use oxihuff_core::error::{OxiHuffError, Result};

/// Replace every symbol of `message` with its code.
///
/// # Errors
///
/// `UnknownSymbol` if a symbol has no entry in `codes`. This cannot
/// happen when the table was derived from the same message.
pub fn encode(message: &str, codes: &CodeTable) -> Result<Vec<bool>> {
    let mut bits = Vec::with_capacity(message.len() * codes.max_len().max(1));
    for (position, symbol) in message.chars().enumerate() {
        let code = codes
            .get(symbol)
            .ok_or_else(|| OxiHuffError::unknown_symbol(symbol, position))?;
        bits.extend_from_slice(code.bits());
    }
    Ok(bits)
}

/// Pack bits into bytes, most significant bit first.
///
/// The last byte is completed with zero bits; the returned padding (0-7)
/// is the number of filler bits.
pub fn pack(bits: &[bool]) -> (Vec<u8>, u8) {
    let mut writer = MsbBitWriter::with_capacity(bits.len().div_ceil(8));
    for &bit in bits {
        writer.write_bit(bit);
    }
    writer.finish()
}

/// Render bits as a string of `0` and `1` characters.
pub fn bit_string(bits: &[bool]) -> String {
    bits.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}
