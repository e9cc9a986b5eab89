//! LFSR stepping and full graph generation benchmarks.
//!
//! Measures raw register throughput and the cost of enumerating and writing
//! every vertex pair for a range of graph sizes.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use std::hint::black_box;
use std::io;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use tapgraph_benches::GenerationBenchParams;
use tapgraph_core::{DEFAULT_SEED, GraphError, generate, step, write_adjacency_list};

/// Vertex counts to benchmark.
const VERTEX_COUNTS: &[usize] = &[100, 1_000, 3_000];

/// Register steps per iteration of the stepping benchmark.
const STEPS: u64 = 1 << 16;

fn lfsr_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("lfsr_step");
    group.throughput(Throughput::Elements(STEPS));
    group.bench_function("step", |b| {
        b.iter(|| (0..STEPS).fold(black_box(DEFAULT_SEED), |state, _| step(state)));
    });
    group.finish();
}

fn generation_impl(c: &mut Criterion) -> Result<(), GraphError> {
    let mut group = c.benchmark_group("generate");
    group.sample_size(20);

    for &vertices in VERTEX_COUNTS {
        let params = GenerationBenchParams {
            vertices,
            probability_level: 8,
        };
        // Validate once so setup failures surface before measurement.
        generate(params.vertices, params.probability_level, DEFAULT_SEED)?;
        group.throughput(Throughput::Elements(params.pairs()));

        group.bench_with_input(
            BenchmarkId::new("count_present", &params),
            &params,
            |b, run| {
                b.iter(|| {
                    generate(run.vertices, run.probability_level, DEFAULT_SEED)
                        .map(|stream| stream.filter(|edge| edge.is_present()).count())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("write_adjacency_list", &params),
            &params,
            |b, run| {
                b.iter(|| {
                    generate(run.vertices, run.probability_level, DEFAULT_SEED)
                        .map(|stream| write_adjacency_list(stream, io::sink()))
                });
            },
        );
    }

    group.finish();
    Ok(())
}

fn generation(c: &mut Criterion) {
    if let Err(err) = generation_impl(c) {
        panic!("generation benchmark setup failed: {err}");
    }
}

criterion_group!(benches, lfsr_step, generation);
criterion_main!(benches);
