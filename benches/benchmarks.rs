//! Criterion benchmarks for abcore.

use std::io::Write;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use tempfile::NamedTempFile;

use abcore::engine::{CoreQuery, CoreTimeCalculator, QueryEngine};
use abcore::format::EdgeReader;
use abcore::graph::{GraphBuilder, TemporalBipartiteGraph};
use abcore::index::{PairIndex, SuperiorIndex, SuperiorIndexBuilder, VertexIndex};
use abcore::types::{IndexConfig, Vertex};

/// Random temporal bipartite graph with `edges` edges over `[1, tmax]`.
fn make_graph(uppers: u64, lowers: u64, tmax: u64, edges: usize) -> TemporalBipartiteGraph {
    let mut rng = rand::thread_rng();
    let mut builder = GraphBuilder::new();
    for _ in 0..edges {
        builder.add_edge(
            rng.gen_range(1..=uppers),
            rng.gen_range(1..=lowers),
            rng.gen_range(1..=tmax),
        );
    }
    builder.build()
}

/// Bounded config so the grid stays small on dense graphs.
fn make_config(graph: &TemporalBipartiteGraph) -> IndexConfig {
    let config = IndexConfig::from_graph(graph);
    config
        .with_max_alpha(config.max_alpha.min(6))
        .with_max_beta(config.max_beta.min(6))
}

fn bench_parse_edges_10k(c: &mut Criterion) {
    let graph = make_graph(500, 500, 200, 10_000);
    let mut tmp = NamedTempFile::new().unwrap();
    for edge in graph.edges() {
        writeln!(tmp, "{} {} {}", edge.upper, edge.lower, edge.time).unwrap();
    }
    tmp.flush().unwrap();

    c.bench_function("parse_edges_10k", |b| {
        b.iter(|| {
            let _ = EdgeReader::read_from_file(tmp.path()).unwrap();
        })
    });
}

fn bench_core_time_sweep(c: &mut Criterion) {
    let graph = make_graph(50, 50, 200, 5_000);
    let config = make_config(&graph);
    let calculator = CoreTimeCalculator::new(&graph, &config);
    let vertices: Vec<Vertex> = graph.vertices().collect();

    c.bench_function("core_time_sweep_5k", |b| {
        b.iter(|| {
            for &v in &vertices {
                let _ = calculator.qualifying_ends(v, 3);
            }
        })
    });
}

fn bench_build_vertex_index(c: &mut Criterion) {
    let graph = make_graph(50, 50, 100, 2_000);
    let config = make_config(&graph);

    c.bench_function("build_vertex_index_2k", |b| {
        b.iter(|| {
            let _ = VertexIndex::build(&graph, &config);
        })
    });
}

fn bench_build_pair_index(c: &mut Criterion) {
    let graph = make_graph(50, 50, 100, 2_000);
    let config = make_config(&graph);

    c.bench_function("build_pair_index_2k", |b| {
        b.iter(|| {
            let _ = PairIndex::build(&graph, &config);
        })
    });
}

fn bench_build_superior_index(c: &mut Criterion) {
    let graph = make_graph(50, 50, 100, 2_000);
    let config = make_config(&graph);

    c.bench_function("build_superior_index_2k", |b| {
        b.iter(|| {
            let _ = SuperiorIndex::build(&graph, &config);
        })
    });

    let pair_index = PairIndex::build(&graph, &config);
    c.bench_function("superior_from_pair_index_2k", |b| {
        b.iter(|| {
            let _ = SuperiorIndexBuilder::from_pair_index(&pair_index, &graph, &config);
        })
    });
}

fn bench_queries(c: &mut Criterion) {
    let graph = make_graph(50, 50, 100, 2_000);
    let config = make_config(&graph);
    let vertex_index = VertexIndex::build(&graph, &config);
    let pair_index = PairIndex::build(&graph, &config);
    let superior = SuperiorIndex::build(&graph, &config);
    let engine = QueryEngine::new();
    let query = CoreQuery::new(2, 2, 10, 60).unwrap();

    c.bench_function("query_superior", |b| {
        b.iter(|| {
            let _ = engine.query(&superior, &query);
        })
    });
    c.bench_function("query_pair_index", |b| {
        b.iter(|| {
            let _ = engine.query_pair_index(&pair_index, &query);
        })
    });
    c.bench_function("query_vertex_index", |b| {
        b.iter(|| {
            let _ = engine.query_vertex_index(&vertex_index, &query);
        })
    });
}

criterion_group!(
    benches,
    bench_parse_edges_10k,
    bench_core_time_sweep,
    bench_build_vertex_index,
    bench_build_pair_index,
    bench_build_superior_index,
    bench_queries,
);
criterion_main!(benches);
