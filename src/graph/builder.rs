//! Fluent API for building TemporalBipartiteGraph instances.

use crate::types::{Edge, Timestamp, VertexId};

use super::TemporalBipartiteGraph;

/// Fluent builder for constructing a TemporalBipartiteGraph.
pub struct GraphBuilder {
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Add an interaction between upper vertex `upper` and lower vertex `lower`.
    pub fn add_edge(&mut self, upper: VertexId, lower: VertexId, time: Timestamp) -> &mut Self {
        self.edges.push(Edge::new(upper, lower, time));
        self
    }

    /// Add several edges at once.
    pub fn extend<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = Edge>,
    {
        self.edges.extend(edges);
        self
    }

    /// Number of edges added so far.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether no edge has been added.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Build the final graph.
    pub fn build(&self) -> TemporalBipartiteGraph {
        TemporalBipartiteGraph::from_edges(self.edges.clone())
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
