//! Container format.
//!
//! A container is a single self-describing blob. All integers are
//! big-endian:
//!
//! ```text
//! [4 bytes]  entry count N
//! N times:
//!   [1 byte]  symbol
//!   [2 bytes] frequency
//! [1 byte]   padding bits in the last payload byte (0-7)
//! [...]      payload
//! ```
//!
//! There is no magic number, version or checksum. The tree and codes are
//! never stored; the decoder rebuilds them from the frequency entries,
//! which are kept in table order.

use crate::config::Alphabet;
use crate::frequency::FrequencyTable;
use oxihuff_core::error::{OxiHuffError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Size of the entry count field.
pub const ENTRY_COUNT_SIZE: usize = 4;

/// Size of one `(symbol, frequency)` entry.
pub const ENTRY_SIZE: usize = 3;

/// Size of the padding field.
pub const PADDING_SIZE: usize = 1;

/// Largest frequency the two-byte field can hold.
pub const MAX_FREQUENCY: u64 = u16::MAX as u64;

/// Largest valid padding value.
pub const MAX_PADDING: u8 = 7;

/// In-memory form of a container file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// Symbol frequencies in header order.
    pub frequencies: FrequencyTable,
    /// Number of zero bits appended to the last payload byte.
    pub padding: u8,
    /// Packed code bits.
    pub payload: Vec<u8>,
}

impl Container {
    /// Create a container from its parts.
    pub fn new(frequencies: FrequencyTable, payload: Vec<u8>, padding: u8) -> Self {
        Self {
            frequencies,
            padding,
            payload,
        }
    }

    /// Size in bytes of the serialized container.
    pub fn encoded_len(&self) -> usize {
        self.header_len() + self.payload.len()
    }

    /// Check that every field fits the on-disk layout.
    fn validate(&self, alphabet: Alphabet) -> Result<()> {
        for (position, (symbol, count)) in self.frequencies.iter().enumerate() {
            if !alphabet.contains(symbol) {
                return Err(OxiHuffError::symbol_width(symbol, position));
            }
            if count == 0 {
                return Err(OxiHuffError::corrupt_header(
                    (ENTRY_COUNT_SIZE + position * ENTRY_SIZE + 1) as u64,
                    format!("symbol {:?} has a zero frequency", symbol),
                ));
            }
            if count > MAX_FREQUENCY {
                return Err(OxiHuffError::frequency_overflow(symbol, count));
            }
        }

        if u32::try_from(self.frequencies.len()).is_err() {
            return Err(OxiHuffError::corrupt_header(
                0,
                format!("{} entries exceed the 4-byte count", self.frequencies.len()),
            ));
        }

        if self.padding > MAX_PADDING || (self.payload.is_empty() && self.padding != 0) {
            return Err(OxiHuffError::corrupt_header(
                self.header_len() as u64 - 1,
                format!(
                    "padding {} is invalid for a {}-byte payload",
                    self.padding,
                    self.payload.len()
                ),
            ));
        }

        Ok(())
    }

    fn header_len(&self) -> usize {
        ENTRY_COUNT_SIZE + self.frequencies.len() * ENTRY_SIZE + PADDING_SIZE
    }

    /// Serialize to a writer.
    ///
    /// Everything is validated before the first byte is written.
    pub fn write_to<W: Write>(&self, writer: &mut W, alphabet: Alphabet) -> Result<()> {
        self.validate(alphabet)?;

        writer.write_all(&(self.frequencies.len() as u32).to_be_bytes())?;
        for (symbol, count) in self.frequencies.iter() {
            // Both fit: checked by validate()
            let byte = alphabet.encode(symbol).unwrap_or_default();
            writer.write_all(&[byte])?;
            writer.write_all(&(count as u16).to_be_bytes())?;
        }
        writer.write_all(&[self.padding])?;
        writer.write_all(&self.payload)?;
        Ok(())
    }

    /// Serialize to a byte vector.
    pub fn to_bytes(&self, alphabet: Alphabet) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut out, alphabet)?;
        Ok(out)
    }

    /// Parse a container from bytes.
    ///
    /// # Errors
    ///
    /// `CorruptHeader` if the entry table runs past the end of the data,
    /// a symbol byte is outside `alphabet`, a frequency is zero, a symbol
    /// repeats, or the padding is out of range.
    pub fn from_bytes(data: &[u8], alphabet: Alphabet) -> Result<Self> {
        let Some(count_bytes) = data.first_chunk::<ENTRY_COUNT_SIZE>() else {
            return Err(OxiHuffError::corrupt_header(
                0,
                format!(
                    "need {} bytes for the entry count, found {}",
                    ENTRY_COUNT_SIZE,
                    data.len()
                ),
            ));
        };
        let count = u32::from_be_bytes(*count_bytes) as u64;

        let header_len = (ENTRY_COUNT_SIZE + PADDING_SIZE) as u64 + count * ENTRY_SIZE as u64;
        if (data.len() as u64) < header_len {
            return Err(OxiHuffError::corrupt_header(
                ENTRY_COUNT_SIZE as u64,
                format!(
                    "{} entries need a {}-byte header, but the file has {} bytes",
                    count,
                    header_len,
                    data.len()
                ),
            ));
        }
        let header_len = header_len as usize;

        let mut frequencies = FrequencyTable::new();
        let entries = &data[ENTRY_COUNT_SIZE..header_len - PADDING_SIZE];
        for (i, entry) in entries.chunks_exact(ENTRY_SIZE).enumerate() {
            let offset = (ENTRY_COUNT_SIZE + i * ENTRY_SIZE) as u64;
            let symbol = alphabet.decode(entry[0]).ok_or_else(|| {
                OxiHuffError::corrupt_header(
                    offset,
                    format!(
                        "symbol byte {:#04x} is outside the {:?} alphabet",
                        entry[0], alphabet
                    ),
                )
            })?;
            let frequency = u16::from_be_bytes([entry[1], entry[2]]);

            if frequency == 0 {
                return Err(OxiHuffError::corrupt_header(
                    offset + 1,
                    format!("symbol {:?} has a zero frequency", symbol),
                ));
            }
            if frequencies.contains(symbol) {
                return Err(OxiHuffError::corrupt_header(
                    offset,
                    format!("symbol {:?} appears twice", symbol),
                ));
            }
            frequencies.add_count(symbol, u64::from(frequency));
        }

        let padding = data[header_len - PADDING_SIZE];
        let payload = data[header_len..].to_vec();

        if padding > MAX_PADDING || (payload.is_empty() && padding != 0) {
            return Err(OxiHuffError::corrupt_header(
                (header_len - PADDING_SIZE) as u64,
                format!(
                    "padding {} is invalid for a {}-byte payload",
                    padding,
                    payload.len()
                ),
            ));
        }

        Ok(Self {
            frequencies,
            padding,
            payload,
        })
    }

    /// Write the container to `path` in a single write.
    pub fn write_file(&self, path: impl AsRef<Path>, alphabet: Alphabet) -> Result<()> {
        let bytes = self.to_bytes(alphabet)?;
        fs::write(path.as_ref(), bytes)?;
        Ok(())
    }

    /// Read a container from `path` in a single read.
    ///
    /// # Errors
    ///
    /// `FileNotFound` if `path` does not exist, otherwise as
    /// [`Container::from_bytes`].
    pub fn read_file(path: impl AsRef<Path>, alphabet: Alphabet) -> Result<Self> {
        let data = read_all(path.as_ref())?;
        Self::from_bytes(&data, alphabet)
    }
}

/// Read a whole file, reporting a missing file as `FileNotFound`.
pub(crate) fn read_all(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => OxiHuffError::file_not_found(path),
        _ => OxiHuffError::Io(e),
    })
}

/// Write a container file.
///
/// Uses the default (ASCII) alphabet.
pub fn write_container(
    path: impl AsRef<Path>,
    frequencies: &FrequencyTable,
    payload: &[u8],
    padding: u8,
) -> Result<()> {
    Container::new(frequencies.clone(), payload.to_vec(), padding)
        .write_file(path, Alphabet::default())
}

/// Read a container file into `(frequencies, payload, padding)`.
///
/// Uses the default (ASCII) alphabet.
pub fn read_container(path: impl AsRef<Path>) -> Result<(FrequencyTable, Vec<u8>, u8)> {
    let container = Container::read_file(path, Alphabet::default())?;
    Ok((container.frequencies, container.payload, container.padding))
}
