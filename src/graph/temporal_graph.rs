//! Core graph structure: timestamped bipartite edges with per-vertex incidence.

use std::collections::{BTreeMap, HashSet};

use crate::types::{Edge, Layer, Timestamp, Vertex, VertexId};

/// An immutable temporal bipartite graph.
///
/// Every vertex keeps its incident interactions as `(time, neighbour)` pairs
/// sorted by time, so window scans are a binary search plus a linear walk.
pub struct TemporalBipartiteGraph {
    /// All edges, sorted by time then endpoints.
    edges: Vec<Edge>,
    /// Typed vertex -> (time, neighbour id) sorted ascending.
    incidence: BTreeMap<Vertex, Vec<(Timestamp, VertexId)>>,
    /// Largest timestamp in the data (0 when empty).
    max_timestamp: Timestamp,
}

impl TemporalBipartiteGraph {
    /// Build the graph from a list of edges in any order.
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        let mut sorted_edges = edges;
        sorted_edges.sort_unstable_by(|a, b| {
            a.time
                .cmp(&b.time)
                .then(a.upper.cmp(&b.upper))
                .then(a.lower.cmp(&b.lower))
        });

        let mut incidence: BTreeMap<Vertex, Vec<(Timestamp, VertexId)>> = BTreeMap::new();
        for edge in &sorted_edges {
            incidence
                .entry(edge.upper_vertex())
                .or_default()
                .push((edge.time, edge.lower));
            incidence
                .entry(edge.lower_vertex())
                .or_default()
                .push((edge.time, edge.upper));
        }
        // Edges were visited in time order, so each list is already sorted by time.

        let max_timestamp = sorted_edges.last().map(|e| e.time).unwrap_or(0);
        log::debug!(
            "graph: {} edges, {} vertices, tmax={}",
            sorted_edges.len(),
            incidence.len(),
            max_timestamp
        );

        Self {
            edges: sorted_edges,
            incidence,
            max_timestamp,
        }
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of vertices across both layers.
    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    /// Number of vertices on one layer.
    pub fn layer_count(&self, layer: Layer) -> usize {
        self.incidence.keys().filter(|v| v.layer == layer).count()
    }

    /// Whether the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// All edges sorted by time.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All vertices in `(layer, id)` order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.incidence.keys().copied()
    }

    /// Whether the vertex appears in any edge.
    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        self.incidence.contains_key(&vertex)
    }

    /// Incident `(time, neighbour)` pairs of a vertex sorted by time.
    pub fn incident(&self, vertex: Vertex) -> &[(Timestamp, VertexId)] {
        self.incidence
            .get(&vertex)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of distinct neighbours of `vertex` over edges with
    /// `ts <= time <= te`.
    pub fn degree(&self, vertex: Vertex, ts: Timestamp, te: Timestamp) -> u32 {
        let incident = self.incident(vertex);
        let lo = incident.partition_point(|(t, _)| *t < ts);
        let hi = incident.partition_point(|(t, _)| *t <= te);
        if lo >= hi {
            return 0;
        }
        let neighbours: HashSet<VertexId> = incident[lo..hi].iter().map(|(_, n)| *n).collect();
        neighbours.len() as u32
    }

    /// Number of distinct neighbours over the whole timeline.
    pub fn full_degree(&self, vertex: Vertex) -> u32 {
        self.degree(vertex, Timestamp::MIN, Timestamp::MAX)
    }

    /// Largest full-timeline degree among the vertices of `layer`.
    pub fn max_degree(&self, layer: Layer) -> u32 {
        self.incidence
            .keys()
            .filter(|v| v.layer == layer)
            .map(|&v| self.full_degree(v))
            .max()
            .unwrap_or(0)
    }

    /// Largest timestamp in the data.
    pub fn max_timestamp(&self) -> Timestamp {
        self.max_timestamp
    }

    /// Smallest timestamp in the data.
    pub fn min_timestamp(&self) -> Timestamp {
        self.edges.first().map(|e| e.time).unwrap_or(0)
    }
}
