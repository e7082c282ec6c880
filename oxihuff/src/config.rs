//! Codec configuration.

/// How message symbols map to the single byte reserved for them in the
/// container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// Symbols whose UTF-8 encoding is exactly one byte (U+0000..=U+007F).
    #[default]
    Ascii,
    /// Symbols whose code point fits in a byte (U+0000..=U+00FF).
    /// The header byte is the code point itself.
    Latin1,
}

impl Alphabet {
    /// Map a symbol to its header byte, or `None` if it does not fit.
    pub fn encode(self, symbol: char) -> Option<u8> {
        match self {
            Alphabet::Ascii if symbol.is_ascii() => Some(symbol as u8),
            Alphabet::Latin1 => u8::try_from(u32::from(symbol)).ok(),
            Alphabet::Ascii => None,
        }
    }

    /// Map a header byte back to its symbol, or `None` if the byte is not
    /// part of this alphabet.
    pub fn decode(self, byte: u8) -> Option<char> {
        match self {
            Alphabet::Ascii if byte.is_ascii() => Some(char::from(byte)),
            Alphabet::Ascii => None,
            Alphabet::Latin1 => Some(char::from(byte)),
        }
    }

    /// Check whether `symbol` can be stored in a container.
    pub fn contains(self, symbol: char) -> bool {
        self.encode(symbol).is_some()
    }
}

/// What to do with bits left over after the last complete code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingBits {
    /// Fail with a malformed stream error.
    #[default]
    Reject,
    /// Silently drop them.
    Discard,
}

/// Huffman codec configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuffConfig {
    /// Symbol to header byte mapping.
    pub alphabet: Alphabet,
    /// Handling of bits that do not complete a code.
    pub trailing_bits: TrailingBits,
    /// Whether decompression checks that the number of decoded symbols
    /// equals the sum of the header frequencies.
    pub verify_counts: bool,
}

impl HuffConfig {
    /// Strict ASCII configuration (the default).
    ///
    /// - One-byte UTF-8 symbols only
    /// - Leftover bits are an error
    /// - Decoded length must match the header
    pub const STRICT: Self = Self {
        alphabet: Alphabet::Ascii,
        trailing_bits: TrailingBits::Reject,
        verify_counts: true,
    };

    /// Strict configuration accepting the full Latin-1 range.
    pub const LATIN1: Self = Self {
        alphabet: Alphabet::Latin1,
        trailing_bits: TrailingBits::Reject,
        verify_counts: true,
    };

    /// Lenient configuration that tolerates stray bits and skips the
    /// length check.
    pub const LENIENT: Self = Self {
        alphabet: Alphabet::Ascii,
        trailing_bits: TrailingBits::Discard,
        verify_counts: false,
    };

    /// Create a new strict configuration for the given alphabet.
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            ..Self::STRICT
        }
    }

    /// Set the alphabet.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Set the trailing bit policy.
    pub fn with_trailing_bits(mut self, trailing_bits: TrailingBits) -> Self {
        self.trailing_bits = trailing_bits;
        self
    }

    /// Enable or disable decoded length verification.
    pub fn with_count_verification(mut self, verify_counts: bool) -> Self {
        self.verify_counts = verify_counts;
        self
    }
}

impl Default for HuffConfig {
    fn default() -> Self {
        Self::STRICT
    }
}
