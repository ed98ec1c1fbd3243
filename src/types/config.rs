//! Index construction configuration.

use serde::Serialize;

use crate::graph::TemporalBipartiteGraph;

use super::{Layer, Timestamp};

/// Bounds every builder works within.
///
/// Coreness pairs are drawn from `[1, max_alpha] x [1, max_beta]` and window
/// starts from `[1, tmax]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexConfig {
    /// Largest alpha to index.
    pub max_alpha: u32,
    /// Largest beta to index.
    pub max_beta: u32,
    /// Largest timestamp a window may reach.
    pub tmax: Timestamp,
}

impl IndexConfig {
    /// Create a configuration from explicit bounds.
    pub fn new(max_alpha: u32, max_beta: u32, tmax: Timestamp) -> Self {
        Self {
            max_alpha,
            max_beta,
            tmax,
        }
    }

    /// Derive bounds from the data: the largest timestamp and the largest
    /// full-timeline degree on each layer. No vertex can satisfy a threshold
    /// above its layer's maximum degree, so larger bounds only add empty work.
    pub fn from_graph(graph: &TemporalBipartiteGraph) -> Self {
        let config = Self {
            max_alpha: graph.max_degree(Layer::Upper),
            max_beta: graph.max_degree(Layer::Lower),
            tmax: graph.max_timestamp(),
        };
        log::debug!(
            "derived config: max_alpha={} max_beta={} tmax={}",
            config.max_alpha,
            config.max_beta,
            config.tmax
        );
        config
    }

    /// Override the alpha bound.
    pub fn with_max_alpha(mut self, max_alpha: u32) -> Self {
        self.max_alpha = max_alpha;
        self
    }

    /// Override the beta bound.
    pub fn with_max_beta(mut self, max_beta: u32) -> Self {
        self.max_beta = max_beta;
        self
    }

    /// Override the timestamp bound.
    pub fn with_tmax(mut self, tmax: Timestamp) -> Self {
        self.tmax = tmax;
        self
    }

    /// Number of coreness pairs in the indexed grid.
    pub fn pair_count(&self) -> usize {
        self.max_alpha as usize * self.max_beta as usize
    }

    /// Warn about bounds that silently drop data. Returns `true` when the
    /// configuration covers every edge of `graph`.
    pub fn check_against(&self, graph: &TemporalBipartiteGraph) -> bool {
        let data_tmax = graph.max_timestamp();
        if self.tmax < data_tmax {
            log::warn!(
                "tmax {} is below the largest timestamp {}; later edges are never reached",
                self.tmax,
                data_tmax
            );
            return false;
        }
        true
    }
}
