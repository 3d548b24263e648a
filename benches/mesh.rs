//! Benchmarks for the two operations this crate spends its time on: the
//! identifier codec (pack/unpack/format) and the neighbor-finding traversal
//! across the mesh, at a range of depths and edges.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use d20::{build_path, format_path, get_pos, FaceIndex};

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    let digits = [1, 0, 2, 1, 3, 0, 2, 1];
    let path = build_path(&digits).expect("valid digits");

    group.bench_function("new", |b| {
        b.iter(|| {
            FaceIndex::new(
                black_box(digits.len() as u8),
                black_box(7),
                black_box(path),
            )
        })
    });

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let digits = [1, 0, 2, 1, 3, 0, 2, 1];
    let path = build_path(&digits).expect("valid digits");

    group.bench_function("build_path", |b| {
        b.iter(|| build_path(black_box(&digits)))
    });
    group.bench_function("get_pos", |b| {
        b.iter(|| get_pos(black_box(path), black_box(4)))
    });
    group.bench_function("format_path", |b| {
        b.iter(|| format_path(black_box(path), black_box(digits.len() as u8)))
    });

    group.finish();
}

fn bench_neighbor(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbor");

    group.bench_function("lod0", |b| {
        let f = FaceIndex::base(0).expect("valid base face");
        b.iter(|| f.neighbor(black_box(1)))
    });

    for lod in [1_u8, 4, 8, 16, 22] {
        let digits: Vec<u8> =
            (0..lod).map(|i| (i % 4).min(3)).collect();
        let path = build_path(&digits).expect("valid digits");
        let f = FaceIndex::new(lod, 7, path).expect("valid face");

        group.bench_with_input(
            BenchmarkId::new("deep", lod),
            &f,
            |b, &f| b.iter(|| f.neighbor(black_box(0))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pack, bench_codec, bench_neighbor);
criterion_main!(benches);
