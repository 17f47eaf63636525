//! Benchmark: decode a fully populated pilot file, render it, and both in sequence.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tfrdump::reader::{write_u16, write_u32};
use tfrdump::{decode, render, Labels, FILE_LEN};

fn populated_pilot() -> Vec<u8> {
    let mut buf = vec![0u8; FILE_LEN];
    buf[2] = 5;
    buf[3] = 2;
    write_u32(&mut buf, 4, 9_999_999).expect("fixture fits");
    buf[90..97].copy_from_slice(&[4; 7]);
    for craft in 0..7 {
        buf[520 + 8 * craft..524 + 8 * craft].copy_from_slice(&[1; 4]);
    }
    buf[617..630].copy_from_slice(&[3; 13]);
    for i in 0..68 {
        write_u16(&mut buf, 1632 + 2 * i, i as u16 * 3).expect("fixture fits");
    }
    write_u32(&mut buf, 1908, 100_000).expect("fixture fits");
    write_u32(&mut buf, 1912, 41_234).expect("fixture fits");
    for i in 0..28 {
        write_u32(&mut buf, 2064 + 4 * i, 1000 + i as u32).expect("fixture fits");
    }
    for i in 0..104 {
        write_u32(&mut buf, 2914 + 4 * i, 2000 + i as u32).expect("fixture fits");
    }
    buf
}

fn bench_decode_render(c: &mut Criterion) {
    let bytes = populated_pilot();
    let labels = Labels::english();
    let record = decode(&bytes).expect("decode");

    c.bench_function("decode", |b| b.iter(|| decode(black_box(&bytes))));
    c.bench_function("render", |b| b.iter(|| render(black_box(&record), &labels)));
    c.bench_function("decode_render", |b| {
        b.iter(|| {
            let r = decode(black_box(&bytes)).expect("decode");
            render(&r, &labels)
        })
    });
}

criterion_group!(benches, bench_decode_render);
criterion_main!(benches);
