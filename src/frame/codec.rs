//! # POWERLINK Frame Codec
//!
//! This module decodes and encodes complete POWERLINK Basic Frame Format
//! buffers: the 17-octet envelope (Ethernet addressing, EtherType, message
//! type tag, node IDs) followed by the body selected by the tag.
//!
//! Both directions are pure one-shot transforms over caller-owned buffers:
//! no state is kept across calls, nothing is retained or aliased, and calls
//! may run concurrently on independent buffers without coordination. The
//! Ethernet CRC32 trailer is the transport layer's concern and is neither
//! expected on decode nor produced on encode.
//!
//! ## Usage
//!
//! Parsing a frame from a byte slice:
//! ```rust
//! use powerlink_rs::frame::{parse_frame, FrameData};
//!
//! let bytes: &[u8] = &[
//!     0x01, 0x11, 0x1E, 0x00, 0x00, 0x01, // dst MAC (SoC multicast)
//!     0x00, 0x60, 0x65, 0x01, 0x02, 0x03, // src MAC
//!     0x88, 0xAB, // EtherType
//!     0x01, // SoC
//!     0xFF, 0xF0, // broadcast, from the MN
//!     0x00, 0x00, 0x00, // reserved, flag1, flag2
//!     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // netTime
//!     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // relativeTime
//! ];
//! let frame = parse_frame(bytes).unwrap();
//! assert!(matches!(frame.data, FrameData::Soc(_)));
//! ```

use crate::constants::{
    PLK_FRAME_HEADER_SIZE, PLK_FRAME_OFFSET_DATA, PLK_FRAME_OFFSET_DST_MAC,
    PLK_FRAME_OFFSET_DST_NODE_ID, PLK_FRAME_OFFSET_ETHER_TYPE, PLK_FRAME_OFFSET_MSG_TYPE,
    PLK_FRAME_OFFSET_SRC_MAC, PLK_FRAME_OFFSET_SRC_NODE_ID,
};
use crate::error::PlkError;
use crate::frame::body::{AsndFrame, FrameData, PreqFrame, PresFrame, SoaFrame, SocFrame};
use crate::frame::message_type::MessageType;
use crate::util::byteorder::{read_be16, write_be16};
use log::{debug, warn};

/// A POWERLINK frame: the Basic Frame Format envelope plus its message body.
///
/// The message type tag lives in [`FrameData`]'s active variant; it is never
/// stored a second time, so a frame cannot carry a tag that contradicts its
/// body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlkFrame {
    /// MAC address of the addressed nodes
    pub dst_mac: [u8; 6],
    /// MAC address of the transmitting node
    pub src_mac: [u8; 6],
    /// Ethernet message type, big endian on the wire
    pub ether_type: u16,
    /// POWERLINK node ID of the addressed nodes
    pub dst_node_id: u8,
    /// POWERLINK node ID of the transmitting node
    pub src_node_id: u8,
    /// Message body, tagged by message type
    pub data: FrameData,
}

impl PlkFrame {
    /// The message type tagging this frame's body.
    pub fn message_type(&self) -> MessageType {
        self.data.message_type()
    }

    /// Encoded frame length: envelope plus body.
    pub fn total_len(&self) -> usize {
        PLK_FRAME_HEADER_SIZE + self.data.body_len()
    }
}

/// Parses a POWERLINK frame from a byte slice.
///
/// Fails with `TruncatedBuffer` when fewer than 17 octets are present,
/// before any tag handling. Tags outside the defined set fail with
/// `UnknownMessageType` and recognized tags without a Basic Frame Format
/// body (NonPowerlink, AMNI, AInv) with `UnsupportedMessageType`; neither
/// attempts body dispatch. Body codec failures propagate unchanged.
pub fn parse_frame(buf: &[u8]) -> Result<PlkFrame, PlkError> {
    if buf.len() < PLK_FRAME_HEADER_SIZE {
        return Err(PlkError::TruncatedBuffer {
            required: PLK_FRAME_HEADER_SIZE,
            available: buf.len(),
        });
    }

    let tag = buf[PLK_FRAME_OFFSET_MSG_TYPE];
    let data = match MessageType::from_byte(tag) {
        MessageType::Soc => FrameData::Soc(SocFrame::decode(buf, PLK_FRAME_OFFSET_DATA)?.0),
        MessageType::Preq => FrameData::Preq(PreqFrame::decode(buf, PLK_FRAME_OFFSET_DATA)?.0),
        MessageType::Pres => FrameData::Pres(PresFrame::decode(buf, PLK_FRAME_OFFSET_DATA)?.0),
        MessageType::Soa => FrameData::Soa(SoaFrame::decode(buf, PLK_FRAME_OFFSET_DATA)?.0),
        MessageType::Asnd => FrameData::Asnd(AsndFrame::decode(buf, PLK_FRAME_OFFSET_DATA)?.0),
        MessageType::Unknown(value) => {
            warn!("unknown message type 0x{value:02X}, frame not dispatched");
            return Err(PlkError::UnknownMessageType(value));
        }
        other => {
            debug!("message type {other:?} carries no basic frame body");
            return Err(PlkError::UnsupportedMessageType(other));
        }
    };

    let mut dst_mac = [0u8; 6];
    dst_mac.copy_from_slice(&buf[PLK_FRAME_OFFSET_DST_MAC..PLK_FRAME_OFFSET_DST_MAC + 6]);
    let mut src_mac = [0u8; 6];
    src_mac.copy_from_slice(&buf[PLK_FRAME_OFFSET_SRC_MAC..PLK_FRAME_OFFSET_SRC_MAC + 6]);

    let frame = PlkFrame {
        dst_mac,
        src_mac,
        ether_type: read_be16(buf, PLK_FRAME_OFFSET_ETHER_TYPE),
        dst_node_id: buf[PLK_FRAME_OFFSET_DST_NODE_ID],
        src_node_id: buf[PLK_FRAME_OFFSET_SRC_NODE_ID],
        data,
    };
    debug!(
        "parsed {:?} frame, node {} -> {}",
        frame.message_type(),
        frame.src_node_id,
        frame.dst_node_id
    );
    Ok(frame)
}

/// Packs a POWERLINK frame into a byte vector.
///
/// The result is exactly `frame.total_len()` octets: 17 envelope octets plus
/// the body (19 for SoC, 263 for PReq/PRes regardless of `size`, the raw
/// length for SoA/ASnd).
pub fn pack_frame(frame: &PlkFrame) -> Vec<u8> {
    let mut buf = vec![0u8; frame.total_len()];

    buf[PLK_FRAME_OFFSET_DST_MAC..PLK_FRAME_OFFSET_DST_MAC + 6].copy_from_slice(&frame.dst_mac);
    buf[PLK_FRAME_OFFSET_SRC_MAC..PLK_FRAME_OFFSET_SRC_MAC + 6].copy_from_slice(&frame.src_mac);
    write_be16(&mut buf, PLK_FRAME_OFFSET_ETHER_TYPE, frame.ether_type);
    buf[PLK_FRAME_OFFSET_MSG_TYPE] = frame.message_type().to_byte();
    buf[PLK_FRAME_OFFSET_DST_NODE_ID] = frame.dst_node_id;
    buf[PLK_FRAME_OFFSET_SRC_NODE_ID] = frame.src_node_id;
    frame.data.encode(&mut buf, PLK_FRAME_OFFSET_DATA);

    buf
}
