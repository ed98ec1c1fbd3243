//! Size comparison across the three index representations.

use serde::Serialize;

use super::{PairIndex, SuperiorIndex, VertexIndex};

/// Entry and window counts of each index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// `(vertex, pair)` entries of the vertex index.
    pub vertex_entries: usize,
    /// Windows stored by the vertex index.
    pub vertex_windows: usize,
    /// Keys of the pair index.
    pub pair_keys: usize,
    /// QTWs stored by the pair index.
    pub pair_windows: usize,
    /// Hubs of the superior index.
    pub superior_hubs: usize,
    /// QTWs stored by the superior index.
    pub superior_windows: usize,
    /// Undirected hub links.
    pub links: usize,
    /// Hubs with at least one link.
    pub linked_hubs: usize,
}

impl IndexStats {
    /// Collect counts from built indexes.
    pub fn collect(vertex: &VertexIndex, pair: &PairIndex, superior: &SuperiorIndex) -> Self {
        Self {
            vertex_entries: vertex.entry_count(),
            vertex_windows: vertex.window_count(),
            pair_keys: pair.len(),
            pair_windows: pair.window_count(),
            superior_hubs: superior.hub_count(),
            superior_windows: superior.window_count(),
            links: superior.links().link_count(),
            linked_hubs: superior.links().linked_hub_count(),
        }
    }

    /// Superior-index windows as a fraction of pair-index windows.
    pub fn compaction_ratio(&self) -> f64 {
        if self.pair_windows == 0 {
            return 0.0;
        }
        self.superior_windows as f64 / self.pair_windows as f64
    }
}
