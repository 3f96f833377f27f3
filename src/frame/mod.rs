//! The frame module contains the components responsible for the POWERLINK
//! Basic Frame Format: message type classification, body codecs, flag-byte
//! definitions and the envelope codec.

pub mod body;
pub mod codec;
pub mod flags;
pub mod message_type;

pub use body::{AsndFrame, FrameData, NetTime, PreqFrame, PresFrame, SoaFrame, SocFrame};
pub use codec::{pack_frame, parse_frame, PlkFrame};
pub use flags::{PreqFlags, PresFlags, SocFlags};
pub use message_type::MessageType;
