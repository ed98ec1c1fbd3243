//! Qualified time windows per vertex and aggregated per coreness pair.

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;

use crate::graph::TemporalBipartiteGraph;
use crate::types::{CorenessPair, IndexConfig, QualifiedTimeWindow, TimeWindow, Vertex};

use super::CoreTimeCalculator;

/// Turns earliest-end results into qualified time windows.
#[derive(Clone, Copy)]
pub struct QualifiedWindowBuilder<'g> {
    graph: &'g TemporalBipartiteGraph,
    calculator: CoreTimeCalculator<'g>,
}

impl<'g> QualifiedWindowBuilder<'g> {
    /// Create a builder over `graph`.
    pub fn new(graph: &'g TemporalBipartiteGraph, config: &IndexConfig) -> Self {
        Self {
            graph,
            calculator: CoreTimeCalculator::new(graph, config),
        }
    }

    /// Every `(ts, te)` with `ts` in `[1, tmax]` for which `vertex` reaches its
    /// layer threshold of `pair` by `te <= tmax`.
    pub fn qualified_windows(&self, vertex: Vertex, pair: CorenessPair) -> BTreeSet<TimeWindow> {
        self.calculator
            .qualifying_ends(vertex, pair.threshold(vertex.layer))
            .into_iter()
            .collect()
    }

    /// Windows of every vertex for `pair`, with vertices sharing an identical
    /// `(ts, te)` merged into one entry, sorted by `ts`.
    pub fn qualified_windows_for_pair(&self, pair: CorenessPair) -> Vec<QualifiedTimeWindow> {
        let vertices: Vec<Vertex> = self.graph.vertices().collect();
        let per_vertex: Vec<(Vertex, Vec<TimeWindow>)> = vertices
            .par_iter()
            .map(|&v| {
                (
                    v,
                    self.calculator.qualifying_ends(v, pair.threshold(v.layer)),
                )
            })
            .collect();
        merge_windows(per_vertex)
    }
}

/// Group per-vertex windows by identical `(ts, te)`.
///
/// The result is sorted by `ts` (then `te`) and holds no duplicate windows.
pub fn merge_windows<I, W>(per_vertex: I) -> Vec<QualifiedTimeWindow>
where
    I: IntoIterator<Item = (Vertex, W)>,
    W: IntoIterator<Item = TimeWindow>,
{
    let mut grouped: BTreeMap<TimeWindow, BTreeSet<Vertex>> = BTreeMap::new();
    for (vertex, windows) in per_vertex {
        for window in windows {
            grouped.entry(window).or_default().insert(vertex);
        }
    }
    grouped
        .into_iter()
        .map(|(window, vertices)| QualifiedTimeWindow {
            ts: window.ts,
            te: window.te,
            vertices,
        })
        .collect()
}
