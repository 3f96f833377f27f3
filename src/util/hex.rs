//! # Hex Encoding/Decoding Utilities
//!
//! Hex helpers used for frame visualization, the CLI decode path and
//! golden-frame test data. Backed by the `hex` crate.
//!
//! ## Usage
//!
//! ```rust
//! use powerlink_rs::util::hex::{encode_hex, decode_hex};
//!
//! let data = [0x88, 0xAB, 0x01, 0xFF];
//! let hex_str = encode_hex(&data);
//! assert_eq!(hex_str, "88ab01ff");
//!
//! let decoded = decode_hex(&hex_str).unwrap();
//! assert_eq!(decoded, data);
//! ```

use thiserror::Error;

/// Errors that can occur during hex operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexError {
    #[error("Odd number of hex characters: {0}")]
    OddLength(usize),

    #[error("Empty hex string")]
    EmptyString,

    #[error("Hex decoding error: {0}")]
    DecodeError(String),
}

/// Encode bytes to lowercase hex string
pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode hex string to bytes
///
/// Accepts both uppercase and lowercase hex characters.
/// Whitespace is automatically stripped.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, HexError> {
    if hex_str.is_empty() {
        return Err(HexError::EmptyString);
    }

    let cleaned: String = hex_str.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.len() % 2 != 0 {
        return Err(HexError::OddLength(cleaned.len()));
    }

    hex::decode(&cleaned).map_err(|e| HexError::DecodeError(e.to_string()))
}

/// Parse hex string that may contain spaces or other separators
///
/// More lenient than `decode_hex`, strips all non-hex characters. This is
/// what the CLI accepts, so captures pasted from Wireshark ("88:ab:01")
/// decode without cleanup.
pub fn parse_hex_lenient(input: &str) -> Result<Vec<u8>, HexError> {
    let hex_chars: String = input.chars().filter(|c| c.is_ascii_hexdigit()).collect();

    if hex_chars.is_empty() {
        return Err(HexError::EmptyString);
    }

    if hex_chars.len() % 2 != 0 {
        return Err(HexError::OddLength(hex_chars.len()));
    }

    hex::decode(&hex_chars).map_err(|e| HexError::DecodeError(e.to_string()))
}

/// Format hex data for compact display (useful for logs)
///
/// Formats data as "88 ab 01 ff" with spaces between bytes.
pub fn format_hex_compact(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pretty-print hex data with offsets, useful for payload dumps
///
/// Renders `bytes_per_line` octets per row with a leading offset column,
/// similar to hexdump but without the ASCII gutter.
pub fn pretty_hex(data: &[u8], bytes_per_line: usize) -> String {
    if data.is_empty() {
        return String::new();
    }

    let mut result = String::new();

    for (i, chunk) in data.chunks(bytes_per_line).enumerate() {
        if i > 0 {
            result.push('\n');
        }
        result.push_str(&format!("{:04x}: ", i * bytes_per_line));
        result.push_str(&format_hex_compact(chunk));
    }

    result
}

/// Helper for creating test data from hex strings
///
/// Panics on invalid hex (intended for test code only).
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    decode_hex(hex).expect("Invalid hex in test data")
}
