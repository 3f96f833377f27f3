//! # POWERLINK Message Bodies
//!
//! One body codec per message type of the Basic Frame Format. Each codec
//! reads and writes its fields at explicit offsets relative to the start of
//! the body (envelope offset 17); no struct is ever overlaid on network
//! bytes, so layout is independent of platform alignment and endianness.
//!
//! Body layouts per EPSG DS 301 chapter 4.6.1.1:
//!
//! | Body | Offset 0 | 1 | 2 | 3 | 4 | 5..7 | 7.. |
//! |---|---|---|---|---|---|---|---|
//! | SoC | reserved | flag1 | flag2 | netTime (8, LE) | | relativeTime (8, LE) | |
//! | PReq | reserved | flag1 | flag2 | pdoVersion | reserved | size (LE) | payload[256] |
//! | PRes | nmtStatus | flag1 | flag2 | pdoVersion | reserved | size (LE) | payload[256] |
//!
//! SoA and ASnd bodies are not defined by this layer and are carried as
//! opaque byte containers; see [`SoaFrame`].

use crate::constants::PDO_PAYLOAD_CAPACITY;
use crate::error::PlkError;
use crate::frame::flags::{pr_from_flag2, rs_from_flag2, PreqFlags, PresFlags, SocFlags};
use crate::frame::message_type::MessageType;
use crate::util::byteorder::{read_le16, read_le32, read_le64, write_le16, write_le32, write_le64};
use crate::util::hex::format_hex_compact;
use std::fmt;

/// Network time distributed by the MN in SoC frames.
///
/// Optional at the protocol level: the MN populates it only when configured
/// to distribute the cycle starting time. Carried verbatim either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetTime {
    /// Seconds part, little-endian on the wire
    pub sec: u32,
    /// Nanoseconds part, little-endian on the wire
    pub nsec: u32,
}

/// Start of Cycle (SoC) frame body.
///
/// Sent by the MN via Ethernet multicast at the beginning of every cycle;
/// its send and receive times are the timing basis for all nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SocFrame {
    /// Reserved octet
    pub reserved1: u8,
    /// MC and PS flag bits, see [`SocFlags`]
    pub flag1: u8,
    /// Reserved octet
    pub flag2: u8,
    /// Optional starting time of the cycle
    pub net_time: NetTime,
    /// Relative time in microseconds, incremented by the cycle time each
    /// cycle; 0 while the NMT state machine is initialising
    pub relative_time: u64,
}

impl SocFrame {
    /// Fixed body size: 1 + 1 + 1 + 8 + 8 octets
    pub const BODY_SIZE: usize = 19;

    /// Decodes an SoC body at `offset`, returning the value and the number
    /// of octets consumed.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), PlkError> {
        let available = buf.len().saturating_sub(offset);
        if available < Self::BODY_SIZE {
            return Err(PlkError::TruncatedBuffer {
                required: Self::BODY_SIZE,
                available,
            });
        }

        let body = SocFrame {
            reserved1: buf[offset],
            flag1: buf[offset + 1],
            flag2: buf[offset + 2],
            net_time: NetTime {
                sec: read_le32(buf, offset + 3),
                nsec: read_le32(buf, offset + 7),
            },
            relative_time: read_le64(buf, offset + 11),
        };
        Ok((body, Self::BODY_SIZE))
    }

    /// Encodes this body at `offset`, returning the number of octets written.
    ///
    /// The caller supplies a buffer with at least [`Self::BODY_SIZE`] octets
    /// remaining at `offset`.
    pub fn encode(&self, buf: &mut [u8], offset: usize) -> usize {
        buf[offset] = self.reserved1;
        buf[offset + 1] = self.flag1;
        buf[offset + 2] = self.flag2;
        write_le32(buf, offset + 3, self.net_time.sec);
        write_le32(buf, offset + 7, self.net_time.nsec);
        write_le64(buf, offset + 11, self.relative_time);
        Self::BODY_SIZE
    }

    /// Typed view of the flag1 octet.
    pub fn flags(&self) -> SocFlags {
        SocFlags::from_bits_truncate(self.flag1)
    }
}

/// Poll Request (PReq) frame body.
///
/// Transmitted cyclically by the MN to one CN via Ethernet unicast.
#[derive(Clone)]
pub struct PreqFrame {
    /// Reserved octet
    pub reserved1: u8,
    /// MS, EA and RD flag bits, see [`PreqFlags`]
    pub flag1: u8,
    /// Reserved octet
    pub flag2: u8,
    /// PDO version of the payload
    pub pdo_version: u8,
    /// Reserved octet
    pub reserved2: u8,
    /// Number of meaningful payload octets, at most [`PDO_PAYLOAD_CAPACITY`]
    pub size: u16,
    /// Payload storage; only the first `size` octets are data
    pub payload: [u8; PDO_PAYLOAD_CAPACITY],
}

/// Poll Response (PRes) frame body.
///
/// Transmitted cyclically via Ethernet multicast in answer to a PReq.
#[derive(Clone)]
pub struct PresFrame {
    /// NMT state of the responding node
    pub nmt_status: u8,
    /// MS, EN and RD flag bits, see [`PresFlags`]
    pub flag1: u8,
    /// PR and RS fields, see [`pr_from_flag2`] and [`rs_from_flag2`]
    pub flag2: u8,
    /// PDO version of the payload
    pub pdo_version: u8,
    /// Reserved octet
    pub reserved2: u8,
    /// Number of meaningful payload octets, at most [`PDO_PAYLOAD_CAPACITY`]
    pub size: u16,
    /// Payload storage; only the first `size` octets are data
    pub payload: [u8; PDO_PAYLOAD_CAPACITY],
}

/// Fixed prefix of a PReq/PRes body: 5 octets plus the 2-octet size field
const POLL_PREFIX_SIZE: usize = 7;

/// Encoded PReq/PRes body size: prefix plus the full reserved capacity
const POLL_BODY_SIZE: usize = POLL_PREFIX_SIZE + PDO_PAYLOAD_CAPACITY;

/// Reads the size field of a poll body and validates it against capacity.
fn read_poll_size(buf: &[u8], offset: usize) -> Result<u16, PlkError> {
    let size = read_le16(buf, offset + 5);
    if size as usize > PDO_PAYLOAD_CAPACITY {
        return Err(PlkError::SizeOutOfRange {
            size: size as usize,
            capacity: PDO_PAYLOAD_CAPACITY,
        });
    }
    Ok(size)
}

/// Copies the meaningful payload octets of a poll body into fixed storage.
///
/// Octets beyond `size` are left zero regardless of what the input buffer
/// holds there; they are not data.
fn read_poll_payload(
    buf: &[u8],
    offset: usize,
    size: u16,
) -> Result<[u8; PDO_PAYLOAD_CAPACITY], PlkError> {
    let available = buf.len().saturating_sub(offset);
    let required = POLL_PREFIX_SIZE + size as usize;
    if available < required {
        return Err(PlkError::TruncatedBuffer { required, available });
    }

    let mut payload = [0u8; PDO_PAYLOAD_CAPACITY];
    let start = offset + POLL_PREFIX_SIZE;
    payload[..size as usize].copy_from_slice(&buf[start..start + size as usize]);
    Ok(payload)
}

impl PreqFrame {
    /// Fixed prefix size before the payload region
    pub const PREFIX_SIZE: usize = POLL_PREFIX_SIZE;

    /// Encoded body size; the payload capacity is always reserved
    pub const BODY_SIZE: usize = POLL_BODY_SIZE;

    /// Builds a PReq body around the given payload, zero-filling the rest of
    /// the capacity. Fails with `SizeOutOfRange` for payloads over
    /// [`PDO_PAYLOAD_CAPACITY`] octets.
    pub fn with_payload(payload: &[u8]) -> Result<Self, PlkError> {
        if payload.len() > PDO_PAYLOAD_CAPACITY {
            return Err(PlkError::SizeOutOfRange {
                size: payload.len(),
                capacity: PDO_PAYLOAD_CAPACITY,
            });
        }

        let mut body = Self::default();
        body.size = payload.len() as u16;
        body.payload[..payload.len()].copy_from_slice(payload);
        Ok(body)
    }

    /// Decodes a PReq body at `offset`, returning the value and the number
    /// of octets consumed.
    ///
    /// Requires the fixed prefix plus `size` payload octets; capacity octets
    /// beyond `size` need not be present in the input.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), PlkError> {
        let available = buf.len().saturating_sub(offset);
        if available < Self::PREFIX_SIZE {
            return Err(PlkError::TruncatedBuffer {
                required: Self::PREFIX_SIZE,
                available,
            });
        }

        let size = read_poll_size(buf, offset)?;
        let payload = read_poll_payload(buf, offset, size)?;

        let body = PreqFrame {
            reserved1: buf[offset],
            flag1: buf[offset + 1],
            flag2: buf[offset + 2],
            pdo_version: buf[offset + 3],
            reserved2: buf[offset + 4],
            size,
            payload,
        };
        Ok((body, Self::PREFIX_SIZE + size as usize))
    }

    /// Encodes this body at `offset`, returning the number of octets written.
    ///
    /// The full payload capacity is written regardless of `size`, matching
    /// the wire format's fixed allocation. The caller supplies a buffer with
    /// at least [`Self::BODY_SIZE`] octets remaining at `offset`.
    pub fn encode(&self, buf: &mut [u8], offset: usize) -> usize {
        buf[offset] = self.reserved1;
        buf[offset + 1] = self.flag1;
        buf[offset + 2] = self.flag2;
        buf[offset + 3] = self.pdo_version;
        buf[offset + 4] = self.reserved2;
        write_le16(buf, offset + 5, self.size);
        buf[offset + Self::PREFIX_SIZE..offset + Self::BODY_SIZE].copy_from_slice(&self.payload);
        Self::BODY_SIZE
    }

    /// The meaningful portion of the payload: exactly `size` octets.
    pub fn payload(&self) -> &[u8] {
        &self.payload[..self.size as usize]
    }

    /// Typed view of the flag1 octet.
    pub fn flags(&self) -> PreqFlags {
        PreqFlags::from_bits_truncate(self.flag1)
    }
}

impl PresFrame {
    /// Fixed prefix size before the payload region
    pub const PREFIX_SIZE: usize = POLL_PREFIX_SIZE;

    /// Encoded body size; the payload capacity is always reserved
    pub const BODY_SIZE: usize = POLL_BODY_SIZE;

    /// Builds a PRes body around the given payload, zero-filling the rest of
    /// the capacity. Fails with `SizeOutOfRange` for payloads over
    /// [`PDO_PAYLOAD_CAPACITY`] octets.
    pub fn with_payload(payload: &[u8]) -> Result<Self, PlkError> {
        if payload.len() > PDO_PAYLOAD_CAPACITY {
            return Err(PlkError::SizeOutOfRange {
                size: payload.len(),
                capacity: PDO_PAYLOAD_CAPACITY,
            });
        }

        let mut body = Self::default();
        body.size = payload.len() as u16;
        body.payload[..payload.len()].copy_from_slice(payload);
        Ok(body)
    }

    /// Decodes a PRes body at `offset`, returning the value and the number
    /// of octets consumed.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), PlkError> {
        let available = buf.len().saturating_sub(offset);
        if available < Self::PREFIX_SIZE {
            return Err(PlkError::TruncatedBuffer {
                required: Self::PREFIX_SIZE,
                available,
            });
        }

        let size = read_poll_size(buf, offset)?;
        let payload = read_poll_payload(buf, offset, size)?;

        let body = PresFrame {
            nmt_status: buf[offset],
            flag1: buf[offset + 1],
            flag2: buf[offset + 2],
            pdo_version: buf[offset + 3],
            reserved2: buf[offset + 4],
            size,
            payload,
        };
        Ok((body, Self::PREFIX_SIZE + size as usize))
    }

    /// Encodes this body at `offset`, returning the number of octets written.
    ///
    /// The full payload capacity is written regardless of `size`. The caller
    /// supplies a buffer with at least [`Self::BODY_SIZE`] octets remaining
    /// at `offset`.
    pub fn encode(&self, buf: &mut [u8], offset: usize) -> usize {
        buf[offset] = self.nmt_status;
        buf[offset + 1] = self.flag1;
        buf[offset + 2] = self.flag2;
        buf[offset + 3] = self.pdo_version;
        buf[offset + 4] = self.reserved2;
        write_le16(buf, offset + 5, self.size);
        buf[offset + Self::PREFIX_SIZE..offset + Self::BODY_SIZE].copy_from_slice(&self.payload);
        Self::BODY_SIZE
    }

    /// The meaningful portion of the payload: exactly `size` octets.
    pub fn payload(&self) -> &[u8] {
        &self.payload[..self.size as usize]
    }

    /// Typed view of the flag1 octet.
    pub fn flags(&self) -> PresFlags {
        PresFlags::from_bits_truncate(self.flag1)
    }

    /// The Priority (PR) field of the flag2 octet.
    pub fn priority(&self) -> u8 {
        pr_from_flag2(self.flag2)
    }

    /// The RequestToSend (RS) field of the flag2 octet.
    pub fn request_to_send(&self) -> u8 {
        rs_from_flag2(self.flag2)
    }
}

impl Default for PreqFrame {
    fn default() -> Self {
        PreqFrame {
            reserved1: 0,
            flag1: 0,
            flag2: 0,
            pdo_version: 0,
            reserved2: 0,
            size: 0,
            payload: [0u8; PDO_PAYLOAD_CAPACITY],
        }
    }
}

impl Default for PresFrame {
    fn default() -> Self {
        PresFrame {
            nmt_status: 0,
            flag1: 0,
            flag2: 0,
            pdo_version: 0,
            reserved2: 0,
            size: 0,
            payload: [0u8; PDO_PAYLOAD_CAPACITY],
        }
    }
}

// Payload octets beyond `size` are not data, so equality ignores them.

impl PartialEq for PreqFrame {
    fn eq(&self, other: &Self) -> bool {
        self.reserved1 == other.reserved1
            && self.flag1 == other.flag1
            && self.flag2 == other.flag2
            && self.pdo_version == other.pdo_version
            && self.reserved2 == other.reserved2
            && self.size == other.size
            && self.payload() == other.payload()
    }
}

impl Eq for PreqFrame {}

impl PartialEq for PresFrame {
    fn eq(&self, other: &Self) -> bool {
        self.nmt_status == other.nmt_status
            && self.flag1 == other.flag1
            && self.flag2 == other.flag2
            && self.pdo_version == other.pdo_version
            && self.reserved2 == other.reserved2
            && self.size == other.size
            && self.payload() == other.payload()
    }
}

impl Eq for PresFrame {}

impl fmt::Debug for PreqFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreqFrame")
            .field("flag1", &format_args!("0x{:02X}", self.flag1))
            .field("flag2", &format_args!("0x{:02X}", self.flag2))
            .field("pdo_version", &self.pdo_version)
            .field("size", &self.size)
            .field("payload", &format_hex_compact(self.payload()))
            .finish()
    }
}

impl fmt::Debug for PresFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresFrame")
            .field("nmt_status", &format_args!("0x{:02X}", self.nmt_status))
            .field("flag1", &format_args!("0x{:02X}", self.flag1))
            .field("flag2", &format_args!("0x{:02X}", self.flag2))
            .field("pdo_version", &self.pdo_version)
            .field("size", &self.size)
            .field("payload", &format_hex_compact(self.payload()))
            .finish()
    }
}

/// Start of Asynchronous cycle (SoA) frame body.
///
/// The SoA field layout is not part of this layer; the body is carried as
/// an opaque octet container that round-trips unmodified. A structured
/// codec is an extension point pending the full protocol specification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoaFrame {
    /// Undecoded body octets, verbatim
    pub raw: Vec<u8>,
}

/// Asynchronous Send (ASnd) frame body.
///
/// Opaque, like [`SoaFrame`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AsndFrame {
    /// Undecoded body octets, verbatim
    pub raw: Vec<u8>,
}

impl SoaFrame {
    /// Captures all remaining octets at `offset` verbatim. Total: an empty
    /// remainder yields an empty body.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), PlkError> {
        let raw = buf[offset..].to_vec();
        let consumed = raw.len();
        Ok((SoaFrame { raw }, consumed))
    }

    /// Writes the captured octets back at `offset`, returning the count.
    pub fn encode(&self, buf: &mut [u8], offset: usize) -> usize {
        buf[offset..offset + self.raw.len()].copy_from_slice(&self.raw);
        self.raw.len()
    }
}

impl AsndFrame {
    /// Captures all remaining octets at `offset` verbatim.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), PlkError> {
        let raw = buf[offset..].to_vec();
        let consumed = raw.len();
        Ok((AsndFrame { raw }, consumed))
    }

    /// Writes the captured octets back at `offset`, returning the count.
    pub fn encode(&self, buf: &mut [u8], offset: usize) -> usize {
        buf[offset..offset + self.raw.len()].copy_from_slice(&self.raw);
        self.raw.len()
    }
}

/// Frame body, tagged by message type.
///
/// One variant per message type that carries a Basic Frame Format body; no
/// storage is shared between variants. The wire tag is derived from the
/// active variant, never stored separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameData {
    /// Start of Cycle body (multicast)
    Soc(SocFrame),
    /// Poll Request body (unicast)
    Preq(PreqFrame),
    /// Poll Response body (multicast)
    Pres(PresFrame),
    /// Start of Asynchronous cycle body (multicast, opaque)
    Soa(SoaFrame),
    /// Asynchronous Send body (multicast, opaque)
    Asnd(AsndFrame),
}

impl FrameData {
    /// The message type tagging this body.
    pub fn message_type(&self) -> MessageType {
        match self {
            FrameData::Soc(_) => MessageType::Soc,
            FrameData::Preq(_) => MessageType::Preq,
            FrameData::Pres(_) => MessageType::Pres,
            FrameData::Soa(_) => MessageType::Soa,
            FrameData::Asnd(_) => MessageType::Asnd,
        }
    }

    /// Encoded body length in octets.
    pub fn body_len(&self) -> usize {
        match self {
            FrameData::Soc(_) => SocFrame::BODY_SIZE,
            FrameData::Preq(_) => PreqFrame::BODY_SIZE,
            FrameData::Pres(_) => PresFrame::BODY_SIZE,
            FrameData::Soa(body) => body.raw.len(),
            FrameData::Asnd(body) => body.raw.len(),
        }
    }

    /// Encodes this body at `offset`, returning the number of octets written.
    pub fn encode(&self, buf: &mut [u8], offset: usize) -> usize {
        match self {
            FrameData::Soc(body) => body.encode(buf, offset),
            FrameData::Preq(body) => body.encode(buf, offset),
            FrameData::Pres(body) => body.encode(buf, offset),
            FrameData::Soa(body) => body.encode(buf, offset),
            FrameData::Asnd(body) => body.encode(buf, offset),
        }
    }
}
