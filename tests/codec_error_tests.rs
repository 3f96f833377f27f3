//! Error-path tests for the frame codec: truncated buffers, unknown and
//! unsupported message type tags, and out-of-range payload sizes.

use powerlink_rs::constants::{PLK_FRAME_HEADER_SIZE, PLK_FRAME_OFFSET_MSG_TYPE};
use powerlink_rs::frame::{parse_frame, MessageType};
use powerlink_rs::PlkError;

/// Builds a minimal envelope with the given message type tag and body.
fn envelope_with(tag: u8, body: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0u8; PLK_FRAME_HEADER_SIZE];
    bytes[12] = 0x88;
    bytes[13] = 0xAB;
    bytes[PLK_FRAME_OFFSET_MSG_TYPE] = tag;
    bytes.extend_from_slice(body);
    bytes
}

/// Tests that any buffer shorter than the 17-octet envelope fails with
/// `TruncatedBuffer`, before any tag handling.
#[test]
fn test_short_buffer_is_truncated() {
    for len in [0usize, 1, 13, 16] {
        let bytes = vec![0u8; len];
        assert_eq!(
            parse_frame(&bytes),
            Err(PlkError::TruncatedBuffer { required: PLK_FRAME_HEADER_SIZE, available: len }),
            "buffer of {len} octets"
        );
    }
}

/// Tests that a 16-octet buffer fails as truncated even when the tag octet
/// itself is present and valid.
#[test]
fn test_short_buffer_beats_tag_handling() {
    let mut bytes = vec![0u8; 16];
    bytes[PLK_FRAME_OFFSET_MSG_TYPE] = 0x01; // SoC
    assert_eq!(
        parse_frame(&bytes),
        Err(PlkError::TruncatedBuffer { required: PLK_FRAME_HEADER_SIZE, available: 16 })
    );
}

/// Tests that every tag value outside the defined set is rejected as
/// `UnknownMessageType` without body dispatch.
#[test]
fn test_unknown_tags_are_rejected() {
    let unknown_tags =
        std::iter::once(0x02u8).chain(0x08..=0x0C).chain(0x0E..=0xFF);
    for tag in unknown_tags {
        assert_eq!(MessageType::from_byte(tag), MessageType::Unknown(tag));
        // No body present: classification must fail before body dispatch
        // could notice the missing octets.
        let bytes = envelope_with(tag, &[]);
        assert_eq!(parse_frame(&bytes), Err(PlkError::UnknownMessageType(tag)));
    }
}

/// Tests that recognized tags without a Basic Frame Format body are
/// rejected as unsupported rather than misparsed.
#[test]
fn test_bodyless_tags_are_unsupported() {
    for (tag, message_type) in [
        (0x00, MessageType::NonPowerlink),
        (0x07, MessageType::Amni),
        (0x0D, MessageType::AInv),
    ] {
        let bytes = envelope_with(tag, &[0u8; 32]);
        assert_eq!(
            parse_frame(&bytes),
            Err(PlkError::UnsupportedMessageType(message_type))
        );
    }
}

/// Tests that an SoC frame with an incomplete body fails as truncated.
#[test]
fn test_soc_truncated_body() {
    let bytes = envelope_with(0x01, &[0u8; 10]);
    assert_eq!(
        parse_frame(&bytes),
        Err(PlkError::TruncatedBuffer { required: 19, available: 10 })
    );
}

/// Tests that a PReq body shorter than its fixed prefix fails as truncated.
#[test]
fn test_preq_truncated_prefix() {
    let bytes = envelope_with(0x03, &[0u8; 5]);
    assert_eq!(
        parse_frame(&bytes),
        Err(PlkError::TruncatedBuffer { required: 7, available: 5 })
    );
}

/// Tests that a PReq declaring more payload than the buffer carries fails
/// as truncated.
#[test]
fn test_preq_truncated_payload() {
    // size = 10, but only 5 payload octets follow the prefix
    let body = [0x00, 0x00, 0x00, 0x00, 0x00, 0x0A, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05];
    let bytes = envelope_with(0x03, &body);
    assert_eq!(
        parse_frame(&bytes),
        Err(PlkError::TruncatedBuffer { required: 17, available: 12 })
    );
}

/// Tests that a declared size beyond the 256-octet capacity fails with
/// `SizeOutOfRange` even when the buffer itself is long enough.
#[test]
fn test_size_out_of_range() {
    for (tag, size) in [(0x03u8, 257u16), (0x04, 257), (0x03, 0xFFFF)] {
        let mut body = vec![0u8; 7 + 300];
        body[5..7].copy_from_slice(&size.to_le_bytes());
        let bytes = envelope_with(tag, &body);
        assert_eq!(
            parse_frame(&bytes),
            Err(PlkError::SizeOutOfRange { size: size as usize, capacity: 256 }),
            "tag 0x{tag:02X}, size {size}"
        );
    }
}

/// Tests that the boundary size of exactly 256 octets is accepted.
#[test]
fn test_size_at_capacity_is_accepted() {
    let mut body = vec![0u8; 7 + 256];
    body[5..7].copy_from_slice(&256u16.to_le_bytes());
    let bytes = envelope_with(0x04, &body);
    let frame = parse_frame(&bytes).unwrap();
    match frame.data {
        powerlink_rs::frame::FrameData::Pres(pres) => assert_eq!(pres.payload().len(), 256),
        other => panic!("expected PRes body, got {other:?}"),
    }
}

/// Tests that error values render their diagnostic context.
#[test]
fn test_error_display() {
    let err = PlkError::TruncatedBuffer { required: 17, available: 3 };
    assert_eq!(err.to_string(), "Truncated buffer: required 17 octets, 3 available");

    let err = PlkError::UnknownMessageType(0x0E);
    assert_eq!(err.to_string(), "Unknown message type: 0x0E");

    let err = PlkError::SizeOutOfRange { size: 257, capacity: 256 };
    assert_eq!(
        err.to_string(),
        "Payload size out of range: 257 exceeds 256 octet capacity"
    );
}
