//! File-based round-trip tests.
//!
//! These tests go through the public file API the way a front end would:
//! compress to a path, then decompress or inspect that path.

use oxihuff::{
    Alphabet, FrequencyTable, HuffConfig, HuffmanCodec, OxiHuffError, compress, decompress,
    inspect, read_container, write_container,
};
use tempfile::TempDir;

fn workspace() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_file_roundtrip_text() {
    let dir = workspace();
    let path = dir.path().join("fox.bin");
    let message = "The quick brown fox jumps over the lazy dog.";

    let codes = compress(message, &path).expect("compress failed");
    assert!(codes.is_prefix_free());

    let decoded = decompress(&path).expect("decompress failed");
    assert_eq!(decoded, message);
}

#[test]
fn test_file_roundtrip_multiline() {
    let dir = workspace();
    let path = dir.path().join("poem.bin");
    let message = "Roses are red,\nViolets are blue,\n\tHuffman is greedy\r\nAnd optimal too.\n";

    compress(message, &path).expect("compress failed");
    assert_eq!(decompress(&path).expect("decompress failed"), message);
}

#[test]
fn test_file_roundtrip_long_message() {
    let dir = workspace();
    let path = dir.path().join("lorem.bin");
    let message = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(200);

    compress(&message, &path).expect("compress failed");
    let size = std::fs::metadata(&path).expect("metadata failed").len();
    assert!(size < message.len() as u64, "text should shrink, got {} bytes", size);

    assert_eq!(decompress(&path).expect("decompress failed"), message);
}

#[test]
fn test_overwrite_existing_file() {
    let dir = workspace();
    let path = dir.path().join("reused.bin");

    compress("first message", &path).expect("compress failed");
    compress("second", &path).expect("compress failed");
    assert_eq!(decompress(&path).expect("decompress failed"), "second");
}

#[test]
fn test_latin1_file_roundtrip() {
    let dir = workspace();
    let path = dir.path().join("latin1.bin");
    let codec = HuffmanCodec::new(HuffConfig::new(Alphabet::Latin1));
    let message = "Año nuevo, vida nueva. ¡Olé!";

    codec.compress(message, &path).expect("compress failed");
    assert_eq!(codec.decompress(&path).expect("decompress failed"), message);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scenario_single_symbol() {
    let dir = workspace();
    let path = dir.path().join("aaaa.bin");

    let codes = compress("aaaa", &path).expect("compress failed");
    assert_eq!(codes.len(), 1);
    assert_eq!(codes.get('a').map(|code| code.len()), Some(0));

    let (frequencies, payload, padding) = read_container(&path).expect("read failed");
    assert_eq!(frequencies.get('a'), Some(4));
    assert!(payload.is_empty());
    assert_eq!(padding, 0);

    let inspection = inspect(&path).expect("inspect failed");
    assert!(inspection.tree.as_ref().is_some_and(|tree| tree.is_leaf()));

    assert_eq!(decompress(&path).expect("decompress failed"), "aaaa");
}

#[test]
fn test_scenario_three_equal_symbols() {
    let dir = workspace();
    let path = dir.path().join("abc.bin");

    let codes = compress("abc", &path).expect("compress failed");
    assert!(codes.is_prefix_free());

    // Ties resolve in table order: c takes the short branch
    assert_eq!(codes.get('c').map(ToString::to_string).as_deref(), Some("0"));
    assert_eq!(codes.get('a').map(ToString::to_string).as_deref(), Some("10"));
    assert_eq!(codes.get('b').map(ToString::to_string).as_deref(), Some("11"));

    assert_eq!(decompress(&path).expect("decompress failed"), "abc");
}

#[test]
fn test_scenario_empty_message() {
    let dir = workspace();
    let path = dir.path().join("empty.bin");

    let codes = compress("", &path).expect("compress failed");
    assert!(codes.is_empty());
    assert_eq!(std::fs::read(&path).expect("read failed"), vec![0, 0, 0, 0, 0]);

    let (frequencies, payload, padding) = read_container(&path).expect("read failed");
    assert!(frequencies.is_empty());
    assert!(payload.is_empty());
    assert_eq!(padding, 0);

    assert_eq!(decompress(&path).expect("decompress failed"), "");
}

#[test]
fn test_scenario_truncated_header() {
    let dir = workspace();
    let path = dir.path().join("truncated.bin");

    compress("hello world", &path).expect("compress failed");
    let bytes = std::fs::read(&path).expect("read failed");
    // Keep the entry count but cut the entry table in half
    std::fs::write(&path, &bytes[..4 + 6]).expect("write failed");

    let err = decompress(&path).unwrap_err();
    assert!(
        matches!(err, OxiHuffError::CorruptHeader { .. }),
        "unexpected error: {err}"
    );
    assert!(matches!(inspect(&path), Err(OxiHuffError::CorruptHeader { .. })));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_file() {
    let dir = workspace();
    let path = dir.path().join("does-not-exist.bin");

    assert!(matches!(decompress(&path), Err(OxiHuffError::FileNotFound { .. })));
    assert!(matches!(inspect(&path), Err(OxiHuffError::FileNotFound { .. })));
    assert!(matches!(read_container(&path), Err(OxiHuffError::FileNotFound { .. })));
}

#[test]
fn test_unwritable_destination() {
    let dir = workspace();
    let path = dir.path().join("no-such-dir").join("out.bin");

    assert!(matches!(compress("abc", &path), Err(OxiHuffError::Io(_))));
}

#[test]
fn test_rejected_message_writes_nothing() {
    let dir = workspace();
    let wide = dir.path().join("wide.bin");
    let heavy = dir.path().join("heavy.bin");

    let err = compress("naïve", &wide).unwrap_err();
    assert!(matches!(err, OxiHuffError::SymbolWidth { symbol: 'ï', position: 2 }));
    assert!(!wide.exists());

    let err = compress(&"x".repeat(70_000), &heavy).unwrap_err();
    assert!(matches!(
        err,
        OxiHuffError::FrequencyOverflow { symbol: 'x', count: 70_000 }
    ));
    assert!(!heavy.exists());
}

#[test]
fn test_zero_frequency_table_writes_nothing() {
    let dir = workspace();
    let path = dir.path().join("zero.bin");
    let freqs: FrequencyTable = [('a', 0), ('b', 1)].into_iter().collect();

    let err = write_container(&path, &freqs, &[0x00], 7).unwrap_err();
    assert!(matches!(err, OxiHuffError::CorruptHeader { .. }));
    assert!(!path.exists());
}

#[test]
fn test_written_container_reads_back() {
    let dir = workspace();
    let path = dir.path().join("table.bin");
    let freqs: FrequencyTable = [('a', 1), ('b', 1)].into_iter().collect();

    write_container(&path, &freqs, &[0b0100_0000], 6).expect("write failed");
    let (read, payload, padding) = read_container(&path).expect("read failed");
    assert_eq!(read, freqs);
    assert_eq!(payload, vec![0b0100_0000]);
    assert_eq!(padding, 6);
    assert_eq!(decompress(&path).expect("decompress failed"), "ab");
}

#[test]
fn test_max_frequency_roundtrip() {
    let dir = workspace();
    let path = dir.path().join("max.bin");
    let message = format!("{}{}", "x".repeat(65_535), "y");

    compress(&message, &path).expect("compress failed");
    assert_eq!(decompress(&path).expect("decompress failed"), message);
}
