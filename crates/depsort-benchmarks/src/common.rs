//! Common utilities for benchmarks

use criterion::Criterion;
use depsort_core::types::Service;
use depsort_graph::DependencyGraph;
use pprof::criterion::{Output, PProfProfiler};

/// Configure criterion with flamegraph profiling support
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(3))
        .measurement_time(std::time::Duration::from_secs(10))
        .sample_size(100)
        .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

/// A single chain where each service depends on the previous one
pub fn chain_graph(size: usize) -> DependencyGraph {
    (0..size)
        .map(|i| match i {
            0 => Service::new("svc-0"),
            _ => Service::new(format!("svc-{}", i)).depends_on(format!("svc-{}", i - 1)),
        })
        .collect()
}

/// Layers of `width` services, each depending on every service of the layer below
pub fn layered_graph(layers: usize, width: usize) -> DependencyGraph {
    let name = |layer: usize, slot: usize| format!("l{}-s{}", layer, slot);

    (0..layers)
        .flat_map(|layer| (0..width).map(move |slot| (layer, slot)))
        .map(|(layer, slot)| {
            let deps = match layer {
                0 => Vec::new(),
                _ => (0..width).map(|below| name(layer - 1, below)).collect(),
            };
            Service::with_dependencies(name(layer, slot), deps)
        })
        .collect()
}

/// A chain whose last service depends on the first, closing one long cycle
pub fn ring_graph(size: usize) -> DependencyGraph {
    let mut graph = chain_graph(size);
    graph.add_entity("svc-0", [format!("svc-{}", size.saturating_sub(1))]);
    graph
}
