//! Topological sort and cycle detection benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use depsort_benchmarks::{chain_graph, criterion_config, layered_graph, ring_graph};
use depsort_graph::SortOptions;

/// Benchmark ordering of long dependency chains
fn bench_chain_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_sort");

    for size in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let graph = chain_graph(*size);

        group.bench_with_input(BenchmarkId::new("services", size), &graph, |b, graph| {
            b.iter(|| black_box(graph.topological_sort()))
        });
    }

    group.finish();
}

/// Benchmark both tie-break rules on wide, densely connected layers
fn bench_layered_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("layered_sort");
    let graph = layered_graph(20, 25);
    group.throughput(Throughput::Elements(graph.len() as u64));

    group.bench_function("registration", |b| {
        b.iter(|| black_box(graph.topological_sort_with(&SortOptions::default())))
    });
    group.bench_function("lexical", |b| {
        b.iter(|| black_box(graph.topological_sort_with(&SortOptions::lexical())))
    });

    group.finish();
}

/// Benchmark cycle detection, including the failing sort path
fn bench_cycle_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_detection");

    for size in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let acyclic = chain_graph(*size);
        let ring = ring_graph(*size);

        group.bench_with_input(BenchmarkId::new("is_dag", size), &acyclic, |b, graph| {
            b.iter(|| black_box(graph.is_dag().is_ok()))
        });
        group.bench_with_input(BenchmarkId::new("sort_with_cycle", size), &ring, |b, graph| {
            b.iter(|| black_box(graph.topological_sort().is_err()))
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = bench_chain_sort, bench_layered_sort, bench_cycle_detection
}
criterion_main!(benches);
