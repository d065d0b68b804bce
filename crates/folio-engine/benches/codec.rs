use criterion::{Criterion, black_box, criterion_group, criterion_main};
use folio_engine::content::{RawContent, decode, encode, extract_toc, render};
mod common;

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.sample_size(20);

    let blocks = RawContent::from(common::generate_block_json(200));
    group.bench_function("blocks", |b| {
        b.iter(|| black_box(decode(black_box(&blocks))));
    });

    let legacy = RawContent::from(common::generate_legacy_text(500));
    group.bench_function("plain_text_fallback", |b| {
        b.iter(|| black_box(decode(black_box(&legacy))));
    });

    group.finish();
}

fn bench_projections(c: &mut Criterion) {
    let mut group = c.benchmark_group("projections");
    group.sample_size(20);

    let doc = decode(&RawContent::from(common::generate_block_json(200)));

    group.bench_function("render", |b| {
        b.iter(|| black_box(render(black_box(&doc))));
    });
    group.bench_function("extract_toc", |b| {
        b.iter(|| black_box(extract_toc(black_box(&doc))));
    });
    group.bench_function("encode", |b| {
        b.iter(|| black_box(encode(black_box(&doc))));
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_projections);
criterion_main!(benches);
