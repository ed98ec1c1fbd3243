//! In-memory temporal bipartite graph: the edge store every builder reads.

pub mod builder;
pub mod temporal_graph;

pub use builder::GraphBuilder;
pub use temporal_graph::TemporalBipartiteGraph;
