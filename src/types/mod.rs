//! All data types for the abcore library.

pub mod config;
pub mod edge;
pub mod error;
pub mod pair;
pub mod window;

pub use config::IndexConfig;
pub use edge::{Edge, Layer, Vertex};
pub use error::{AbcError, AbcResult};
pub use pair::CorenessPair;
pub use window::{collect_within, QualifiedTimeWindow, TimeWindow};

/// Vertex id as it appears in the edge list.
pub type VertexId = u64;

/// Edge timestamp. Windows start at 1.
pub type Timestamp = u64;

/// First timestamp a window may start at.
pub const FIRST_TIMESTAMP: Timestamp = 1;
