//! abcore: temporal (alpha, beta)-core index for bipartite edge streams.
//!
//! Builds qualified time windows for every vertex and coreness pair, stores
//! them in a vertex index, a pair index and a compact superior index over the
//! dominant pairs, and answers "which vertices are in the (alpha, beta)-core
//! during [ts, te]?" by walking the superior index's hub links.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    pareto_frontier, CoreQuery, CoreTimeCalculator, DominantPairSelector, HubLinker, HubLinks,
    QualifiedWindowBuilder, QueryEngine, QueryResult,
};
pub use format::EdgeReader;
pub use graph::{GraphBuilder, TemporalBipartiteGraph};
pub use index::{IndexStats, PairIndex, SuperiorIndex, SuperiorIndexBuilder, VertexIndex};
pub use types::{
    AbcError, AbcResult, CorenessPair, Edge, IndexConfig, Layer, QualifiedTimeWindow, TimeWindow,
    Timestamp, Vertex, VertexId,
};
