//! MSB-first bit-level I/O.
//!
//! Huffman codes are packed most significant bit first: the first code bit
//! of a message lands in bit 7 of the first payload byte. The final byte is
//! completed with zero bits and the number of filler bits (the *padding*)
//! is reported separately, because filler zeros are indistinguishable from
//! real `0` code bits.
//!
//! # Example
//!
//! ```
//! use oxihuff_core::bitstream::{MsbBitReader, MsbBitWriter};
//!
//! let mut writer = MsbBitWriter::new();
//! writer.write_bits(0b1100, 4).unwrap();
//! writer.write_bit(true);
//! let (bytes, padding) = writer.finish();
//! assert_eq!(bytes, vec![0b1100_1000]);
//! assert_eq!(padding, 3);
//!
//! let mut reader = MsbBitReader::with_padding(&bytes, padding).unwrap();
//! assert_eq!(reader.remaining(), 5);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! assert_eq!(reader.read_bit(), Some(true));
//! assert!(reader.is_empty());
//! ```

use crate::error::{OxiHuffError, Result};

/// MSB-first bit writer backed by a growable byte buffer.
#[derive(Debug, Default)]
pub struct MsbBitWriter {
    /// Completed bytes.
    output: Vec<u8>,
    /// Bit buffer (MSB-first, low `bits_in_buffer` bits are valid).
    buffer: u64,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits written, excluding padding.
    total_bits_written: u64,
}

impl MsbBitWriter {
    /// Create a new, empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer whose output buffer can hold `bytes` without
    /// reallocating.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            output: Vec::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Get the total number of bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Move complete bytes from the bit buffer to the output.
    #[inline]
    fn flush_bytes(&mut self) {
        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.output.push(byte);
            self.bits_in_buffer -= 8;
        }
        self.buffer &= (1u64 << self.bits_in_buffer) - 1;
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.buffer = (self.buffer << 1) | u64::from(bit);
        self.bits_in_buffer += 1;
        self.total_bits_written += 1;

        if self.bits_in_buffer >= 8 {
            self.flush_bytes();
        }
    }

    /// Write the low `count` bits of `value`, most significant first.
    ///
    /// # Arguments
    ///
    /// * `value` - The bits to write (right-aligned)
    /// * `count` - Number of bits to write (1-32)
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        if count == 0 || count > 32 {
            return Err(OxiHuffError::InvalidBitCount(count));
        }

        let mask = (1u64 << count) - 1;
        self.buffer = (self.buffer << count) | (u64::from(value) & mask);
        self.bits_in_buffer += count;
        self.total_bits_written += u64::from(count);

        self.flush_bytes();
        Ok(())
    }

    /// Pad the final partial byte with zeros and return the packed bytes
    /// together with the number of padding bits (0-7).
    pub fn finish(mut self) -> (Vec<u8>, u8) {
        let padding = (8 - self.bits_in_buffer % 8) % 8;
        if padding > 0 {
            self.buffer <<= padding;
            self.bits_in_buffer += padding;
            self.flush_bytes();
        }
        (self.output, padding)
    }
}

/// MSB-first bit reader over a byte slice.
///
/// The reader knows the exact number of meaningful bits, so trailing
/// padding is never handed out as data.
#[derive(Debug, Clone)]
pub struct MsbBitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Index of the next bit to read.
    bit_pos: u64,
    /// Number of meaningful bits in `data`.
    bit_len: u64,
}

impl<'a> MsbBitReader<'a> {
    /// Create a reader over every bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_pos: 0,
            bit_len: data.len() as u64 * 8,
        }
    }

    /// Create a reader that ignores the last `padding` bits of `data`.
    ///
    /// Fails if `padding` is larger than 7 or larger than the data itself.
    pub fn with_padding(data: &'a [u8], padding: u8) -> Result<Self> {
        let total = data.len() as u64 * 8;
        if padding > 7 || u64::from(padding) > total {
            return Err(OxiHuffError::malformed_stream(
                total,
                format!(
                    "padding of {} bits is invalid for a {}-byte payload",
                    padding,
                    data.len()
                ),
            ));
        }

        Ok(Self {
            data,
            bit_pos: 0,
            bit_len: total - u64::from(padding),
        })
    }

    /// Get the index of the next bit to be read.
    pub fn bit_position(&self) -> u64 {
        self.bit_pos
    }

    /// Get the number of meaningful bits not yet read.
    pub fn remaining(&self) -> u64 {
        self.bit_len - self.bit_pos
    }

    /// Check whether every meaningful bit has been consumed.
    pub fn is_empty(&self) -> bool {
        self.bit_pos >= self.bit_len
    }

    /// Read a single bit, or `None` at the end of the stream.
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.is_empty() {
            return None;
        }

        let byte = self.data[(self.bit_pos / 8) as usize];
        let shift = 7 - (self.bit_pos % 8) as u8;
        self.bit_pos += 1;
        Some((byte >> shift) & 1 == 1)
    }

    /// Read `count` bits (1-32) as a right-aligned value.
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        if count == 0 || count > 32 {
            return Err(OxiHuffError::InvalidBitCount(count));
        }
        if self.remaining() < u64::from(count) {
            return Err(OxiHuffError::malformed_stream(
                self.bit_pos,
                format!(
                    "requested {} bits but only {} remain",
                    count,
                    self.remaining()
                ),
            ));
        }

        let mut value = 0u32;
        for _ in 0..count {
            // Bounds were checked above
            let bit = self.read_bit().unwrap_or(false);
            value = (value << 1) | u32::from(bit);
        }
        Ok(value)
    }
}

impl Iterator for MsbBitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.read_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}
