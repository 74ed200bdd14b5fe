use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use skin_weight_normalize::{
    normalize_accessor, LayoutDescriptor, NormalizeSettings, NumericEncoding, RunStats,
};

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

const VECTOR_COUNT: usize = 262144;

/// Fills a buffer with a mix of vectors: some already normalized, some off, some zero.
fn generate_weights(encoding: NumericEncoding) -> Vec<u8> {
    let full_scale = encoding.full_scale();
    let mut buffer = vec![0u8; VECTOR_COUNT * encoding.vector_span()];
    for index in 0..VECTOR_COUNT {
        let vector = match index % 4 {
            0 => [full_scale, 0.0, 0.0, 0.0],
            1 => [0.0; 4],
            _ => {
                let part = full_scale * ((index % 97) as f64 + 1.0) / 400.0;
                [part * 2.0, part, part, 0.0].map(|c| if encoding.is_integer() { c.round() } else { c })
            }
        };
        encoding
            .encode(&mut buffer, index * encoding.vector_span(), &vector)
            .unwrap();
    }
    buffer
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Normalize Weights");
    let settings = NormalizeSettings::default();

    for (name, encoding) in [
        ("float", NumericEncoding::Float32),
        ("unsigned_short", NumericEncoding::UInt16),
        ("unsigned_byte", NumericEncoding::UInt8),
    ] {
        let input = generate_weights(encoding);
        let layout = LayoutDescriptor {
            accessor: 0,
            byte_offset: 0,
            byte_length: input.len(),
            byte_stride: encoding.default_stride(),
            encoding,
        };

        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(name, |b| {
            b.iter_batched_ref(
                || input.clone(),
                |buffer| {
                    let mut stats = RunStats::default();
                    normalize_accessor(&layout, buffer, &settings, &mut stats);
                    stats
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
