//! # powerlink-rs - A Rust Crate for the POWERLINK Basic Frame Format
//!
//! The powerlink-rs crate provides encoding and decoding of the POWERLINK
//! Basic Frame Format (EPSG DS 301), the frame family exchanged by the
//! managing node and controlled nodes of a real-time industrial Ethernet
//! fieldbus.
//!
//! ## Features
//!
//! - Parse and pack the cyclic frame types: SoC, PReq and PRes
//! - Carry SoA and ASnd bodies opaquely until their layouts are wired up
//! - Classify message type tags, including non-POWERLINK and unknown tags
//! - Explicit per-field byte-order handling (little-endian fields, big-endian
//!   EtherType), no structs overlaid on network bytes
//! - Typed flag-bit definitions for the SoC/PReq/PRes flag octets
//! - Support for logging and error handling
//!
//! ## Usage
//!
//! To use the powerlink-rs crate in your Rust project, add the following to
//! your Cargo.toml file:
//!
//! ```toml
//! [dependencies]
//! powerlink-rs = "0.1.0"
//! ```
//!
//! Then, in your Rust code, you can import the necessary modules and functions:
//!
//! ```rust
//! use powerlink_rs::{
//!     parse_frame, pack_frame, PlkFrame, FrameData, MessageType,
//!     PlkError, init_logger, log_info,
//! };
//! ```

pub mod constants;
pub mod error;
pub mod frame;
pub mod logging;
pub mod util;

pub use crate::error::PlkError;
pub use crate::logging::{init_logger, log_info};

// Core frame types
pub use frame::{pack_frame, parse_frame, PlkFrame};
pub use frame::{AsndFrame, FrameData, MessageType, NetTime, PreqFrame, PresFrame, SoaFrame, SocFrame};
pub use frame::{PreqFlags, PresFlags, SocFlags};
