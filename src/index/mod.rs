//! Index structures, from the full vertex index down to the compact superior index.

pub mod pair_index;
pub mod stats;
pub mod superior_index;
pub mod vertex_index;

pub use pair_index::PairIndex;
pub use stats::IndexStats;
pub use superior_index::{SuperiorIndex, SuperiorIndexBuilder};
pub use vertex_index::{VertexEntry, VertexIndex};
