//! Error types for OxiHuff operations.
//!
//! Every failure of the codec surfaces as a distinct [`OxiHuffError`]
//! variant so callers (and presentation layers) can match on the kind
//! instead of parsing messages.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for OxiHuff operations.
#[derive(Debug, Error)]
pub enum OxiHuffError {
    /// I/O error from the underlying file system.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The container file does not exist.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// A message symbol has no entry in the code table.
    #[error("Unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol {
        /// The symbol without a code.
        symbol: char,
        /// Character index within the message.
        position: usize,
    },

    /// A symbol does not fit the one-byte symbol slot of the header.
    #[error("Symbol {symbol:?} (U+{:04X}) at position {position} does not fit in one header byte", code_point(.symbol))]
    SymbolWidth {
        /// The offending symbol.
        symbol: char,
        /// Character index within the message.
        position: usize,
    },

    /// A symbol occurs more often than the two-byte frequency field allows.
    #[error("Frequency of {symbol:?} is {count}, exceeding the 65535 limit of the header")]
    FrequencyOverflow {
        /// The symbol whose count overflowed.
        symbol: char,
        /// Actual occurrence count.
        count: u64,
    },

    /// The container header is inconsistent with the file contents.
    #[error("Corrupt header at offset {offset}: {message}")]
    CorruptHeader {
        /// Byte offset where the problem was detected.
        offset: u64,
        /// Description of the problem.
        message: String,
    },

    /// The packed bit stream cannot be decoded with the rebuilt tree.
    #[error("Malformed stream at bit {bit_position}: {message}")]
    MalformedStream {
        /// Bit position where decoding failed.
        bit_position: u64,
        /// Description of the problem.
        message: String,
    },

    /// A bit count outside the supported range was requested.
    #[error("Invalid bit count: {0} (must be 1-32)")]
    InvalidBitCount(u8),
}

fn code_point(symbol: &char) -> u32 {
    u32::from(*symbol)
}

/// Result type alias for OxiHuff operations.
pub type Result<T> = std::result::Result<T, OxiHuffError>;

impl OxiHuffError {
    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an unknown symbol error.
    pub fn unknown_symbol(symbol: char, position: usize) -> Self {
        Self::UnknownSymbol { symbol, position }
    }

    /// Create a symbol width error.
    pub fn symbol_width(symbol: char, position: usize) -> Self {
        Self::SymbolWidth { symbol, position }
    }

    /// Create a frequency overflow error.
    pub fn frequency_overflow(symbol: char, count: u64) -> Self {
        Self::FrequencyOverflow { symbol, count }
    }

    /// Create a corrupt header error.
    pub fn corrupt_header(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptHeader {
            offset,
            message: message.into(),
        }
    }

    /// Create a malformed stream error.
    pub fn malformed_stream(bit_position: u64, message: impl Into<String>) -> Self {
        Self::MalformedStream {
            bit_position,
            message: message.into(),
        }
    }
}
