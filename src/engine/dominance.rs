//! Dominant coreness pairs: the non-dominated frontier of satisfied pairs.

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;

use crate::graph::TemporalBipartiteGraph;
use crate::types::{CorenessPair, IndexConfig, Timestamp, Vertex};

/// Reduces the satisfied coreness pairs of a vertex to the dominant ones.
///
/// A vertex satisfies `(alpha, beta)` within a window when its degree there is
/// at least both components. Core membership is monotone, so every satisfied
/// pair is covered by some dominant pair.
#[derive(Clone, Copy)]
pub struct DominantPairSelector<'g> {
    graph: &'g TemporalBipartiteGraph,
    config: IndexConfig,
}

impl<'g> DominantPairSelector<'g> {
    /// Create a selector over the `[1, max_alpha] x [1, max_beta]` grid.
    pub fn new(graph: &'g TemporalBipartiteGraph, config: &IndexConfig) -> Self {
        Self {
            graph,
            config: *config,
        }
    }

    /// Dominant pairs of `vertex` for its degree within `[ts, te]`.
    pub fn dominant_pairs(&self, vertex: Vertex, ts: Timestamp, te: Timestamp) -> BTreeSet<CorenessPair> {
        let degree = self.graph.degree(vertex, ts, te.min(self.config.tmax));
        // Within a row the satisfied betas form a prefix, so only the row
        // maximum can be on the frontier.
        let candidates = (1..=self.config.max_alpha).filter_map(|alpha| {
            self.row_max_beta(degree, alpha)
                .map(|beta| CorenessPair::new(alpha, beta))
        });
        pareto_frontier(candidates)
    }

    /// Dominant pairs of every vertex in `vertices` for a fixed window.
    pub fn dominant_hubs(
        &self,
        vertices: &[Vertex],
        ts: Timestamp,
        te: Timestamp,
    ) -> BTreeMap<Vertex, BTreeSet<CorenessPair>> {
        vertices
            .par_iter()
            .map(|&v| (v, self.dominant_pairs(v, ts, te)))
            .collect::<Vec<_>>()
            .into_iter()
            .collect()
    }

    /// Largest beta in `[1, max_beta]` such that `(alpha, beta)` is satisfied
    /// by a vertex with `degree`.
    fn row_max_beta(&self, degree: u32, alpha: u32) -> Option<u32> {
        if self.config.max_beta == 0 || alpha > degree {
            return None;
        }
        Some(degree.min(self.config.max_beta))
    }
}

/// The pairs of `pairs` not dominated by another pair of `pairs`.
///
/// Sorting by alpha descending (beta descending on ties) means a pair is
/// dominated exactly when an earlier pair already reached its beta.
pub fn pareto_frontier<I>(pairs: I) -> BTreeSet<CorenessPair>
where
    I: IntoIterator<Item = CorenessPair>,
{
    let mut sorted: Vec<CorenessPair> = pairs.into_iter().collect();
    sorted.sort_unstable_by(|a, b| b.alpha.cmp(&a.alpha).then(b.beta.cmp(&a.beta)));
    sorted.dedup();

    let mut frontier = BTreeSet::new();
    let mut best_beta: Option<u32> = None;
    for pair in sorted {
        if best_beta.map_or(true, |b| pair.beta > b) {
            frontier.insert(pair);
            best_beta = Some(pair.beta);
        }
    }
    frontier
}
