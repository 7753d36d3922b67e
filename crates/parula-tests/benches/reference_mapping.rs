//! Core vs reference mapping benchmarks
//!
//! The reference works in f32 with no batching; this shows what the batch
//! kernels and the rayon path buy on realistic field sizes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use parula_core::Normalization;
use parula_tests::reference::reference_field;
use parula_tests::{FieldPattern, generate_field};

const FIELD_SIZES: &[usize] = &[256, 4096, 65536, 262144];

fn bench_field_auto(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_auto");

    for &len in FIELD_SIZES {
        let field = generate_field(FieldPattern::Random(1), len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("reference", len), &len, |b, _| {
            b.iter(|| reference_field(black_box(&field), None))
        });

        group.bench_with_input(BenchmarkId::new("core", len), &len, |b, _| {
            b.iter(|| parula_core::map_array_with(black_box(&field), Normalization::Auto))
        });

        group.bench_with_input(BenchmarkId::new("core_rayon", len), &len, |b, _| {
            b.iter(|| parula_core::par_map_array_with(black_box(&field), Normalization::Auto))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_field_auto);
criterion_main!(benches);
