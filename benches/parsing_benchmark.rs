use criterion::{black_box, criterion_group, criterion_main, Criterion};
use powerlink_rs::constants::{C_ADR_BROADCAST, C_DLL_ETHERTYPE_EPL};
use powerlink_rs::frame::{pack_frame, parse_frame, FrameData, PlkFrame, PresFrame};

fn benchmark_frame_codec(c: &mut Criterion) {
    let mut body = PresFrame::with_payload(&[0x5A; 64]).expect("payload within capacity");
    body.nmt_status = 0xFD;
    body.flag1 = 0x31;
    let frame = PlkFrame {
        dst_mac: [0x01, 0x11, 0x1E, 0x00, 0x00, 0x02],
        src_mac: [0x00, 0x60, 0x65, 0x01, 0x02, 0x03],
        ether_type: C_DLL_ETHERTYPE_EPL,
        dst_node_id: C_ADR_BROADCAST,
        src_node_id: 0x01,
        data: FrameData::Pres(body),
    };
    let data = pack_frame(&frame);

    c.bench_function("parse_frame", |b| {
        b.iter(|| {
            let result = parse_frame(black_box(&data));
            let _ = black_box(result);
        })
    });

    c.bench_function("pack_frame", |b| {
        b.iter(|| {
            let bytes = pack_frame(black_box(&frame));
            let _ = black_box(bytes);
        })
    });
}

criterion_group!(benches, benchmark_frame_codec);
criterion_main!(benches);
