//! Vertex index: per vertex, the coreness pairs it qualifies for and their windows.

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;

use crate::engine::CoreTimeCalculator;
use crate::graph::TemporalBipartiteGraph;
use crate::types::{CorenessPair, IndexConfig, Layer, TimeWindow, Timestamp, Vertex};

/// One `(pair, windows)` entry of a vertex.
pub type VertexEntry = (CorenessPair, BTreeSet<TimeWindow>);

/// Maps each vertex to every pair of the grid it ever qualifies for.
pub struct VertexIndex {
    entries: BTreeMap<Vertex, Vec<VertexEntry>>,
    config: IndexConfig,
}

impl VertexIndex {
    /// Build the index over the `[1, max_alpha] x [1, max_beta]` grid.
    pub fn build(graph: &TemporalBipartiteGraph, config: &IndexConfig) -> Self {
        let calculator = CoreTimeCalculator::new(graph, config);
        let vertices: Vec<Vertex> = graph.vertices().collect();
        let entries: BTreeMap<Vertex, Vec<VertexEntry>> = vertices
            .par_iter()
            .map(|&v| (v, vertex_entries(&calculator, v, config)))
            .collect::<Vec<_>>()
            .into_iter()
            .collect();

        let index = Self {
            entries,
            config: *config,
        };
        log::info!(
            "vertex index: {} vertices, {} entries, {} windows",
            index.vertex_count(),
            index.entry_count(),
            index.window_count()
        );
        index
    }

    /// The pairs a vertex qualifies for, in pair order.
    pub fn pairs(&self, vertex: Vertex) -> &[VertexEntry] {
        self.entries
            .get(&vertex)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// The windows of `vertex` for `pair`, if it ever qualifies.
    pub fn windows(&self, vertex: Vertex, pair: CorenessPair) -> Option<&BTreeSet<TimeWindow>> {
        let entries = self.pairs(vertex);
        entries
            .binary_search_by(|(p, _)| p.cmp(&pair))
            .ok()
            .map(|pos| &entries[pos].1)
    }

    /// Whether one of the vertex's windows for `pair` lies inside `[ts, te]`.
    pub fn qualifies(&self, vertex: Vertex, pair: CorenessPair, ts: Timestamp, te: Timestamp) -> bool {
        match self.windows(vertex, pair) {
            Some(windows) => windows
                .range(TimeWindow::new(ts, Timestamp::MIN)..)
                .take_while(|w| w.ts <= te)
                .any(|w| w.te <= te),
            None => false,
        }
    }

    /// Vertices with at least one entry.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.entries
            .iter()
            .filter(|(_, e)| !e.is_empty())
            .map(|(&v, _)| v)
    }

    /// Number of indexed vertices.
    pub fn vertex_count(&self) -> usize {
        self.entries.len()
    }

    /// Total `(vertex, pair)` entries.
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(|e| e.len()).sum()
    }

    /// Total stored windows.
    pub fn window_count(&self) -> usize {
        self.entries
            .values()
            .flat_map(|e| e.iter())
            .map(|(_, w)| w.len())
            .sum()
    }

    /// Whether no vertex has any entry.
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// The configuration the index was built with.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }
}

/// Windows only depend on the threshold governing the vertex's layer, so each
/// threshold is computed once and shared by every pair of the row or column.
fn vertex_entries(
    calculator: &CoreTimeCalculator<'_>,
    vertex: Vertex,
    config: &IndexConfig,
) -> Vec<VertexEntry> {
    let max_threshold = match vertex.layer {
        Layer::Upper => config.max_alpha,
        Layer::Lower => config.max_beta,
    };
    // Higher thresholds are never easier to reach, so stop at the first empty set.
    let by_threshold: Vec<BTreeSet<TimeWindow>> = (1..=max_threshold)
        .map(|k| {
            calculator
                .qualifying_ends(vertex, k)
                .into_iter()
                .collect::<BTreeSet<_>>()
        })
        .take_while(|windows| !windows.is_empty())
        .collect();

    CorenessPair::grid(config.max_alpha, config.max_beta)
        .filter_map(|pair| {
            let k = pair.threshold(vertex.layer) as usize;
            by_threshold
                .get(k - 1)
                .map(|windows| (pair, windows.clone()))
        })
        .collect()
}
