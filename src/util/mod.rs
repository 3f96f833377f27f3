//! # Utility Modules
//!
//! Common utility functions used throughout the powerlink-rs crate:
//! explicit byte-order field access and hex encoding/decoding.

pub mod byteorder;
pub mod hex;

// Re-export commonly used types and functions
pub use byteorder::{read_be16, read_le16, read_le32, read_le64};
pub use byteorder::{write_be16, write_le16, write_le32, write_le64};
pub use hex::{decode_hex, encode_hex, format_hex_compact, hex_to_bytes, HexError};
