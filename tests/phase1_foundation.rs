//! Phase 1 tests: Data structures, edge-list input and configuration.

use std::collections::BTreeSet;
use std::io::{Cursor, Write};

use tempfile::NamedTempFile;

use abcore::engine::CoreQuery;
use abcore::format::EdgeReader;
use abcore::graph::{GraphBuilder, TemporalBipartiteGraph};
use abcore::types::{
    collect_within, AbcError, CorenessPair, Edge, IndexConfig, Layer, QualifiedTimeWindow,
    TimeWindow, Vertex,
};

// ==================== Helpers ====================

/// U1-L1@1, U1-L2@2, U2-L1@3, U2-L2@4.
fn scenario_graph() -> TemporalBipartiteGraph {
    GraphBuilder::new()
        .add_edge(1, 1, 1)
        .add_edge(1, 2, 2)
        .add_edge(2, 1, 3)
        .add_edge(2, 2, 4)
        .build()
}

// ==================== Data Structure Tests ====================

#[test]
fn test_pair_dominance() {
    let a = CorenessPair::new(3, 2);
    let b = CorenessPair::new(2, 2);
    let c = CorenessPair::new(3, 1);

    assert!(a.dominates(&b));
    assert!(a.dominates(&c));
    assert!(!b.dominates(&a));
    assert!(!b.dominates(&c));
    assert!(!c.dominates(&b));
    assert!(!a.dominates(&a));
    assert!(a.covers(&a));
}

#[test]
fn test_pair_manhattan() {
    let a = CorenessPair::new(1, 5);
    let b = CorenessPair::new(4, 3);
    assert_eq!(a.manhattan(&b), 5);
    assert_eq!(b.manhattan(&a), 5);
    assert_eq!(a.manhattan(&a), 0);
}

#[test]
fn test_pair_manhattan_extreme_thresholds() {
    let low = CorenessPair::new(1, 1);
    let high = CorenessPair::new(u32::MAX, u32::MAX);
    assert_eq!(low.manhattan(&high), 2 * (u32::MAX as u64 - 1));
}

#[test]
fn test_pair_threshold_by_layer() {
    let pair = CorenessPair::new(3, 7);
    assert_eq!(pair.threshold(Layer::Upper), 3);
    assert_eq!(pair.threshold(Layer::Lower), 7);
}

#[test]
fn test_pair_grid() {
    let grid: Vec<CorenessPair> = CorenessPair::grid(2, 3).collect();
    assert_eq!(grid.len(), 6);
    assert_eq!(grid[0], CorenessPair::new(1, 1));
    assert_eq!(grid[2], CorenessPair::new(1, 3));
    assert_eq!(grid[5], CorenessPair::new(2, 3));
    assert_eq!(CorenessPair::grid(0, 4).count(), 0);
}

#[test]
fn test_pair_display() {
    assert_eq!(CorenessPair::new(2, 5).to_string(), "(2, 5)");
}

#[test]
fn test_vertex_names() {
    assert_eq!(Vertex::upper(7).to_string(), "u7");
    assert_eq!(Vertex::lower(3).to_string(), "l3");
    assert_eq!(Vertex::from_name("u7"), Some(Vertex::upper(7)));
    assert_eq!(Vertex::from_name("L3"), Some(Vertex::lower(3)));
    assert_eq!(Vertex::from_name("x1"), None);
    assert_eq!(Vertex::from_name("u"), None);
    assert_eq!(Vertex::from_name(""), None);
}

#[test]
fn test_vertex_layers_are_distinct() {
    assert_ne!(Vertex::upper(1), Vertex::lower(1));
    assert!(Vertex::upper(9) < Vertex::lower(1));
    assert_eq!(Layer::Upper.opposite(), Layer::Lower);
}

#[test]
fn test_edge_endpoints() {
    let edge = Edge::new(4, 9, 12);
    assert_eq!(edge.upper_vertex(), Vertex::upper(4));
    assert_eq!(edge.lower_vertex(), Vertex::lower(9));
    assert_eq!(edge.endpoint(Layer::Lower), Vertex::lower(9));
}

#[test]
fn test_time_window_within() {
    let w = TimeWindow::new(3, 5);
    assert!(w.within(3, 5));
    assert!(w.within(1, 9));
    assert!(!w.within(4, 9));
    assert!(!w.within(1, 4));
}

#[test]
fn test_collect_within() {
    let mut a = QualifiedTimeWindow::new(1, 2);
    a.vertices.insert(Vertex::upper(1));
    let mut b = QualifiedTimeWindow::new(2, 6);
    b.vertices.insert(Vertex::upper(2));
    let mut c = QualifiedTimeWindow::new(3, 4);
    c.vertices.insert(Vertex::lower(1));
    let mut d = QualifiedTimeWindow::new(7, 7);
    d.vertices.insert(Vertex::lower(2));
    let qtws = vec![a, b, c, d];

    let mut out = BTreeSet::new();
    collect_within(&qtws, 2, 5, &mut out);
    assert_eq!(out, BTreeSet::from([Vertex::lower(1)]));

    let mut out = BTreeSet::new();
    collect_within(&qtws, 1, 7, &mut out);
    assert_eq!(out.len(), 4);

    let mut out = BTreeSet::new();
    collect_within(&qtws, 8, 9, &mut out);
    assert!(out.is_empty());
}

// ==================== Edge List Input Tests ====================

#[test]
fn test_malformed_line_truncates() {
    let edges = EdgeReader::parse_str("1 2 3\n4 5 6\nfoo bar baz\n7 8 9\n");
    assert_eq!(edges, vec![Edge::new(1, 2, 3), Edge::new(4, 5, 6)]);
}

#[test]
fn test_short_line_truncates() {
    let edges = EdgeReader::parse_str("1 2 3\n4 5\n7 8 9\n");
    assert_eq!(edges.len(), 1);
}

#[test]
fn test_blank_line_truncates() {
    let edges = EdgeReader::parse_str("1 2 3\n\n7 8 9\n");
    assert_eq!(edges.len(), 1);
}

#[test]
fn test_extra_tokens_ignored() {
    let edges = EdgeReader::parse_str("1 2 3 0.5\n4\t5   6\n");
    assert_eq!(edges, vec![Edge::new(1, 2, 3), Edge::new(4, 5, 6)]);
}

#[test]
fn test_negative_value_truncates() {
    let edges = EdgeReader::parse_str("1 2 3\n1 2 -3\n");
    assert_eq!(edges.len(), 1);
}

#[test]
fn test_read_from_reader() {
    let edges = EdgeReader::read_from(Cursor::new("1 1 1\n1 2 2\nx\n")).unwrap();
    assert_eq!(edges.len(), 2);
}

#[test]
fn test_invalid_utf8_line_truncates() {
    let mut bytes = b"1 1 1\n1 2 2\n".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
    bytes.extend_from_slice(b"2 1 3\n");

    let edges = EdgeReader::read_from(Cursor::new(bytes)).unwrap();
    assert_eq!(edges, vec![Edge::new(1, 1, 1), Edge::new(1, 2, 2)]);
}

#[test]
fn test_crlf_line_endings() {
    let edges = EdgeReader::read_from(Cursor::new("1 1 1\r\n1 2 2\r\n")).unwrap();
    assert_eq!(edges.len(), 2);
}

#[test]
fn test_read_from_file() {
    let mut tmp = NamedTempFile::new().unwrap();
    writeln!(tmp, "1 1 1").unwrap();
    writeln!(tmp, "1 2 2").unwrap();
    writeln!(tmp, "% comment stops reading").unwrap();
    writeln!(tmp, "2 1 3").unwrap();
    tmp.flush().unwrap();

    let graph = EdgeReader::read_from_file(tmp.path()).unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.max_timestamp(), 2);
}

#[test]
fn test_read_missing_file() {
    let result = EdgeReader::read_from_file(std::path::Path::new("/nonexistent/edges.txt"));
    assert!(matches!(result, Err(AbcError::Io(_))));
}

// ==================== Graph Tests ====================

#[test]
fn test_graph_counts() {
    let graph = scenario_graph();
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.layer_count(Layer::Upper), 2);
    assert_eq!(graph.layer_count(Layer::Lower), 2);
    assert_eq!(graph.max_timestamp(), 4);
    assert_eq!(graph.min_timestamp(), 1);
    assert!(!graph.is_empty());
}

#[test]
fn test_graph_edges_sorted_by_time() {
    let graph = GraphBuilder::new()
        .add_edge(1, 1, 9)
        .add_edge(2, 2, 3)
        .add_edge(3, 3, 5)
        .build();
    let times: Vec<u64> = graph.edges().iter().map(|e| e.time).collect();
    assert_eq!(times, vec![3, 5, 9]);
    let incident = graph.incident(Vertex::upper(1)).to_vec();
    assert_eq!(incident, vec![(9u64, 1u64)]);
}

#[test]
fn test_graph_window_degree() {
    let graph = scenario_graph();
    assert_eq!(graph.degree(Vertex::upper(1), 1, 4), 2);
    assert_eq!(graph.degree(Vertex::upper(1), 1, 1), 1);
    assert_eq!(graph.degree(Vertex::upper(1), 3, 4), 0);
    assert_eq!(graph.degree(Vertex::lower(1), 2, 3), 1);
    assert_eq!(graph.degree(Vertex::lower(2), 1, 4), 2);
    assert_eq!(graph.degree(Vertex::upper(99), 1, 4), 0);
}

#[test]
fn test_degree_counts_distinct_neighbours() {
    let graph = GraphBuilder::new()
        .add_edge(1, 1, 1)
        .add_edge(1, 1, 2)
        .add_edge(1, 2, 3)
        .build();
    assert_eq!(graph.degree(Vertex::upper(1), 1, 2), 1);
    assert_eq!(graph.degree(Vertex::upper(1), 1, 3), 2);
    assert_eq!(graph.full_degree(Vertex::lower(1)), 1);
}

#[test]
fn test_same_id_on_both_layers() {
    let graph = GraphBuilder::new().add_edge(1, 1, 5).build();
    assert_eq!(graph.vertex_count(), 2);
    assert!(graph.contains_vertex(Vertex::upper(1)));
    assert!(graph.contains_vertex(Vertex::lower(1)));
}

#[test]
fn test_empty_graph() {
    let graph = TemporalBipartiteGraph::from_edges(Vec::new());
    assert!(graph.is_empty());
    assert_eq!(graph.max_timestamp(), 0);
    assert_eq!(graph.max_degree(Layer::Upper), 0);
}

// ==================== Configuration Tests ====================

#[test]
fn test_config_from_graph() {
    let graph = GraphBuilder::new()
        .add_edge(1, 1, 1)
        .add_edge(1, 2, 2)
        .add_edge(1, 3, 7)
        .add_edge(2, 1, 3)
        .build();
    let config = IndexConfig::from_graph(&graph);
    assert_eq!(config.max_alpha, 3);
    assert_eq!(config.max_beta, 2);
    assert_eq!(config.tmax, 7);
    assert_eq!(config.pair_count(), 6);
}

#[test]
fn test_config_overrides() {
    let config = IndexConfig::from_graph(&scenario_graph())
        .with_max_alpha(5)
        .with_max_beta(1)
        .with_tmax(3);
    assert_eq!(config, IndexConfig::new(5, 1, 3));
}

#[test]
fn test_config_check_against() {
    let graph = scenario_graph();
    assert!(IndexConfig::from_graph(&graph).check_against(&graph));
    assert!(!IndexConfig::new(2, 2, 3).check_against(&graph));
}

// ==================== Query Validation Tests ====================

#[test]
fn test_query_validation() {
    assert!(CoreQuery::new(1, 1, 1, 1).is_ok());
    assert!(matches!(
        CoreQuery::new(0, 1, 1, 4),
        Err(AbcError::InvalidThreshold { alpha: 0, beta: 1 })
    ));
    assert!(matches!(
        CoreQuery::new(1, 0, 1, 4),
        Err(AbcError::InvalidThreshold { .. })
    ));
    assert!(matches!(
        CoreQuery::new(1, 1, 0, 4),
        Err(AbcError::InvalidWindow { ts: 0, te: 4 })
    ));
    assert!(matches!(
        CoreQuery::new(1, 1, 5, 4),
        Err(AbcError::InvalidWindow { .. })
    ));
}

#[test]
fn test_query_pair() {
    let q = CoreQuery::new(3, 2, 1, 10).unwrap();
    assert_eq!(q.pair(), CorenessPair::new(3, 2));
}
