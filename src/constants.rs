//! POWERLINK Protocol Constants
//!
//! This module defines constants used in the POWERLINK Basic Frame Format
//! implementation, based on the EPSG DS 301 standard.

/// EtherType assigned to POWERLINK frames (network byte order on the wire)
pub const C_DLL_ETHERTYPE_EPL: u16 = 0x88AB;

// ----------------------------------------------------------------------------
// Basic Frame Format envelope layout (EPSG DS 301 chapter 4.6.1.1)
// ----------------------------------------------------------------------------

/// Offset of the destination MAC address (6 octets, raw order)
pub const PLK_FRAME_OFFSET_DST_MAC: usize = 0;

/// Offset of the source MAC address (6 octets, raw order)
pub const PLK_FRAME_OFFSET_SRC_MAC: usize = 6;

/// Offset of the EtherType (2 octets, big endian)
pub const PLK_FRAME_OFFSET_ETHER_TYPE: usize = 12;

/// Offset of the message type tag (1 octet)
pub const PLK_FRAME_OFFSET_MSG_TYPE: usize = 14;

/// Offset of the destination node ID (1 octet)
pub const PLK_FRAME_OFFSET_DST_NODE_ID: usize = 15;

/// Offset of the source node ID (1 octet)
pub const PLK_FRAME_OFFSET_SRC_NODE_ID: usize = 16;

/// Offset of the message body
pub const PLK_FRAME_OFFSET_DATA: usize = 17;

/// Envelope size up to and including the source node ID
pub const PLK_FRAME_HEADER_SIZE: usize = 17;

/// Payload capacity reserved in PReq and PRes frames
pub const PDO_PAYLOAD_CAPACITY: usize = 256;

// ----------------------------------------------------------------------------
// Node ID constants
// ----------------------------------------------------------------------------

/// Invalid node ID
pub const C_ADR_INVALID: u8 = 0x00;

/// Default node ID of the managing node
pub const C_ADR_MN_DEF_NODE_ID: u8 = 0xF0;

/// Broadcast node ID
pub const C_ADR_BROADCAST: u8 = 0xFF;
