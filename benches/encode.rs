use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rust_qrgen::encoder::penalty::lost_point;
use rust_qrgen::encoder::reed_solomon::ec_codewords;
use rust_qrgen::{ECLevel, MaskPattern, QrEncoder, Version};

fn build(version: u8, payload: &str) -> QrEncoder {
    let mut qr = QrEncoder::new(Version::new(version).unwrap(), ECLevel::M);
    qr.add_segment(payload);
    qr
}

fn bench_build_small(c: &mut Criterion) {
    c.bench_function("build_v1_hello_world", |b| {
        b.iter(|| {
            let mut qr = build(1, "HELLO WORLD");
            qr.build().unwrap();
            black_box(qr.module_count())
        })
    });
}

fn bench_build_by_version(c: &mut Criterion) {
    let payload = "https://example.com/".repeat(4);
    let mut group = c.benchmark_group("build_by_version");
    for version in [5u8, 10, 20, 40] {
        group.bench_with_input(BenchmarkId::from_parameter(version), &version, |b, &v| {
            b.iter(|| {
                let mut qr = build(v, &payload);
                qr.build().unwrap();
                black_box(qr.mask_pattern())
            })
        });
    }
    group.finish();
}

fn bench_build_forced_mask(c: &mut Criterion) {
    c.bench_function("build_v40_forced_mask", |b| {
        b.iter(|| {
            let mut qr = build(40, "forced mask");
            qr.build_with_mask(MaskPattern::Pattern0).unwrap();
            black_box(qr.module_count())
        })
    });
}

fn bench_reed_solomon(c: &mut Criterion) {
    let data: Vec<u8> = (0..=118u8).collect();
    c.bench_function("ec_codewords_119_30", |b| {
        b.iter(|| ec_codewords(black_box(&data), black_box(30)))
    });
}

fn bench_penalty(c: &mut Criterion) {
    let mut qr = build(40, "penalty");
    qr.build().unwrap();
    c.bench_function("lost_point_v40", |b| b.iter(|| lost_point(black_box(qr.modules()))));
}

criterion_group!(
    benches,
    bench_build_small,
    bench_build_by_version,
    bench_build_forced_mask,
    bench_reed_solomon,
    bench_penalty
);
criterion_main!(benches);
