//! Property-based round-trip tests: for every well-formed envelope of each
//! decodable message type, `parse_frame(&pack_frame(&frame))` yields the
//! original value.

use powerlink_rs::constants::C_DLL_ETHERTYPE_EPL;
use powerlink_rs::frame::{
    pack_frame, parse_frame, AsndFrame, FrameData, NetTime, PlkFrame, PreqFrame, PresFrame,
    SoaFrame, SocFrame,
};
use proptest::prelude::*;

fn envelope(data: FrameData, dst_mac: [u8; 6], src_mac: [u8; 6], dst: u8, src: u8) -> PlkFrame {
    PlkFrame {
        dst_mac,
        src_mac,
        ether_type: C_DLL_ETHERTYPE_EPL,
        dst_node_id: dst,
        src_node_id: src,
        data,
    }
}

prop_compose! {
    fn arb_soc_frame()(
        dst_mac in any::<[u8; 6]>(),
        src_mac in any::<[u8; 6]>(),
        dst in any::<u8>(),
        src in any::<u8>(),
        reserved1 in any::<u8>(),
        flag1 in any::<u8>(),
        flag2 in any::<u8>(),
        sec in any::<u32>(),
        nsec in any::<u32>(),
        relative_time in any::<u64>(),
    ) -> PlkFrame {
        let body = SocFrame {
            reserved1,
            flag1,
            flag2,
            net_time: NetTime { sec, nsec },
            relative_time,
        };
        envelope(FrameData::Soc(body), dst_mac, src_mac, dst, src)
    }
}

prop_compose! {
    fn arb_preq_frame()(
        dst_mac in any::<[u8; 6]>(),
        src_mac in any::<[u8; 6]>(),
        dst in any::<u8>(),
        src in any::<u8>(),
        flag1 in any::<u8>(),
        pdo_version in any::<u8>(),
        payload in proptest::collection::vec(any::<u8>(), 0..=256),
    ) -> PlkFrame {
        let mut body = PreqFrame::with_payload(&payload).unwrap();
        body.flag1 = flag1;
        body.pdo_version = pdo_version;
        envelope(FrameData::Preq(body), dst_mac, src_mac, dst, src)
    }
}

prop_compose! {
    fn arb_pres_frame()(
        dst_mac in any::<[u8; 6]>(),
        src_mac in any::<[u8; 6]>(),
        dst in any::<u8>(),
        src in any::<u8>(),
        nmt_status in any::<u8>(),
        flag1 in any::<u8>(),
        flag2 in any::<u8>(),
        pdo_version in any::<u8>(),
        payload in proptest::collection::vec(any::<u8>(), 0..=256),
    ) -> PlkFrame {
        let mut body = PresFrame::with_payload(&payload).unwrap();
        body.nmt_status = nmt_status;
        body.flag1 = flag1;
        body.flag2 = flag2;
        body.pdo_version = pdo_version;
        envelope(FrameData::Pres(body), dst_mac, src_mac, dst, src)
    }
}

prop_compose! {
    fn arb_soa_frame()(
        dst_mac in any::<[u8; 6]>(),
        src_mac in any::<[u8; 6]>(),
        dst in any::<u8>(),
        src in any::<u8>(),
        raw in proptest::collection::vec(any::<u8>(), 0..64),
        asnd in any::<bool>(),
    ) -> PlkFrame {
        let data = if asnd {
            FrameData::Asnd(AsndFrame { raw })
        } else {
            FrameData::Soa(SoaFrame { raw })
        };
        envelope(data, dst_mac, src_mac, dst, src)
    }
}

proptest! {
    #[test]
    fn soc_roundtrip(frame in arb_soc_frame()) {
        let bytes = pack_frame(&frame);
        prop_assert_eq!(bytes.len(), frame.total_len());
        prop_assert_eq!(parse_frame(&bytes).unwrap(), frame);
    }

    #[test]
    fn preq_roundtrip(frame in arb_preq_frame()) {
        let bytes = pack_frame(&frame);
        prop_assert_eq!(bytes.len(), 17 + 263);
        prop_assert_eq!(parse_frame(&bytes).unwrap(), frame);
    }

    #[test]
    fn pres_roundtrip(frame in arb_pres_frame()) {
        let bytes = pack_frame(&frame);
        prop_assert_eq!(bytes.len(), 17 + 263);
        prop_assert_eq!(parse_frame(&bytes).unwrap(), frame);
    }

    #[test]
    fn soa_asnd_roundtrip(frame in arb_soa_frame()) {
        let bytes = pack_frame(&frame);
        prop_assert_eq!(parse_frame(&bytes).unwrap(), frame);
    }

    #[test]
    fn preq_decode_exposes_exactly_size_octets(
        payload in proptest::collection::vec(any::<u8>(), 0..=256),
    ) {
        let body = PreqFrame::with_payload(&payload).unwrap();
        let frame = envelope(FrameData::Preq(body), [0; 6], [0; 6], 1, 0xF0);
        let parsed = parse_frame(&pack_frame(&frame)).unwrap();
        match parsed.data {
            FrameData::Preq(body) => prop_assert_eq!(body.payload(), &payload[..]),
            ref other => prop_assert!(false, "expected PReq body, got {:?}", other),
        }
    }
}
