//! 遍历算法基准测试
//!
//! ```bash
//! cargo bench --bench traversal
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphscan::{AdjacencyMatrix, BfsLevelEngine, ComponentScanner, DfsEngine, DotImporter, Graph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_graph(n: usize, directed: bool) -> Graph {
    let mut rng = StdRng::seed_from_u64(n as u64);
    let mut graph = Graph::new(directed);
    for i in 0..n {
        graph.add_vertex(&format!("v{}", i), None);
    }
    for _ in 0..n * 3 {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        graph.add_edge(&format!("v{}", a), &format!("v{}", b), None);
    }
    graph
}

fn chain_dot(n: usize) -> String {
    let mut dot = String::from("digraph chain {\n");
    for i in 1..n {
        dot.push_str(&format!("  n{} -> n{};\n", i - 1, i));
    }
    dot.push_str("}\n");
    dot
}

fn bench_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("import");
    for &n in &[100usize, 1_000, 10_000] {
        let dot = chain_dot(n);
        group.bench_with_input(BenchmarkId::new("chain", n), &dot, |b, dot| {
            b.iter(|| DotImporter::new().parse_str(black_box(dot)).unwrap())
        });
    }
    group.finish();
}

fn bench_matrix_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");
    for &n in &[50usize, 200, 500] {
        let graph = random_graph(n, true);
        group.bench_with_input(BenchmarkId::new("build_and_levels", n), &graph, |b, g| {
            b.iter(|| {
                let matrix = AdjacencyMatrix::from_graph(g);
                BfsLevelEngine::new(&matrix).levels()
            })
        });
    }
    group.finish();
}

fn bench_dfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("dfs");
    for &n in &[1_000usize, 10_000, 100_000] {
        let graph = random_graph(n, false);
        group.bench_with_input(BenchmarkId::new("random", n), &graph, |b, g| {
            b.iter(|| DfsEngine::new(black_box(g)).run())
        });
    }
    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("components");
    for &n in &[1_000usize, 10_000, 100_000] {
        let graph = random_graph(n, false);
        group.bench_with_input(BenchmarkId::new("random", n), &graph, |b, g| {
            b.iter(|| ComponentScanner::new(black_box(g)).run())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_import,
    bench_matrix_levels,
    bench_dfs,
    bench_components
);
criterion_main!(benches);
