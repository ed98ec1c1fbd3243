//! Index construction algorithms and the query engine.

pub mod core_time;
pub mod dominance;
pub mod linker;
pub mod query;
pub mod windows;

pub use core_time::CoreTimeCalculator;
pub use dominance::{pareto_frontier, DominantPairSelector};
pub use linker::{link_hubs, HubLinker, HubLinks};
pub use query::{CoreQuery, QueryEngine, QueryResult};
pub use windows::{merge_windows, QualifiedWindowBuilder};
