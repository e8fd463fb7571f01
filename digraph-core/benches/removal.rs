use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use digraph_core::graph::{Digraph, SimpleEdge};

/// Every node points at the next `fan_out` nodes, wrapping around.
fn ring(size: usize, fan_out: usize) -> Digraph<usize> {
    let mut graph = Digraph::with_capacity(size);
    for origin in 0..size {
        for step in 1..=fan_out {
            graph
                .add_edge(SimpleEdge::new(origin, (origin + step) % size))
                .expect("well-formed edge");
        }
    }
    graph
}

fn bench_node_removal(c: &mut Criterion) {
    let size = 1000;

    c.bench_function("digraph_remove_node_sparse", |b| {
        b.iter_batched(
            || ring(size, 1),
            |mut graph| {
                black_box(graph.try_remove_node(&(size / 2)));
                graph
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("digraph_remove_node_dense", |b| {
        b.iter_batched(
            || ring(size, 16),
            |mut graph| {
                black_box(graph.try_remove_node(&(size / 2)));
                graph
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_edge_insertion(c: &mut Criterion) {
    c.bench_function("digraph_add_edges", |b| {
        b.iter(|| black_box(ring(1000, 4)));
    });
}

criterion_group!(benches, bench_node_removal, bench_edge_insertion);
criterion_main!(benches);
