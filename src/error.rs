//! # POWERLINK Error Handling
//!
//! This module defines the PlkError enum, which represents the different error
//! types that can occur in the powerlink-rs crate.

use crate::frame::message_type::MessageType;
use thiserror::Error;

/// Represents the different error types that can occur in the POWERLINK crate.
///
/// Errors are returned synchronously; the codec never retries. Recovery
/// policy (drop the frame, request retransmission, escalate) belongs to the
/// caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlkError {
    /// Indicates a buffer shorter than the decoded variant requires.
    #[error("Truncated buffer: required {required} octets, {available} available")]
    TruncatedBuffer { required: usize, available: usize },

    /// Indicates a message type tag outside the defined set. Non-fatal:
    /// signals the caller to drop or log the frame.
    #[error("Unknown message type: 0x{0:02X}")]
    UnknownMessageType(u8),

    /// Indicates a recognized message type whose body is not part of the
    /// Basic Frame Format (NonPowerlink, Amni, AInv).
    #[error("Message type {0:?} carries no basic frame body")]
    UnsupportedMessageType(MessageType),

    /// Indicates a declared payload size exceeding the reserved capacity.
    #[error("Payload size out of range: {size} exceeds {capacity} octet capacity")]
    SizeOutOfRange { size: usize, capacity: usize },
}
