//! Pair index: per coreness pair, the merged qualified time windows.

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;

use crate::engine::QualifiedWindowBuilder;
use crate::graph::TemporalBipartiteGraph;
use crate::types::{collect_within, CorenessPair, IndexConfig, QualifiedTimeWindow, Timestamp, Vertex};

/// Maps every pair of the grid to its QTW list, sorted by `ts`.
pub struct PairIndex {
    entries: BTreeMap<CorenessPair, Vec<QualifiedTimeWindow>>,
    config: IndexConfig,
}

impl PairIndex {
    /// Build the index over the `[1, max_alpha] x [1, max_beta]` grid.
    pub fn build(graph: &TemporalBipartiteGraph, config: &IndexConfig) -> Self {
        let builder = QualifiedWindowBuilder::new(graph, config);
        let pairs: Vec<CorenessPair> = CorenessPair::grid(config.max_alpha, config.max_beta).collect();
        let entries: BTreeMap<CorenessPair, Vec<QualifiedTimeWindow>> = pairs
            .par_iter()
            .map(|&pair| (pair, builder.qualified_windows_for_pair(pair)))
            .collect::<Vec<_>>()
            .into_iter()
            .collect();

        let index = Self {
            entries,
            config: *config,
        };
        log::info!(
            "pair index: {} pairs, {} windows",
            index.len(),
            index.window_count()
        );
        index
    }

    /// QTWs of `pair` (empty when the pair is outside the grid or never met).
    pub fn get(&self, pair: CorenessPair) -> &[QualifiedTimeWindow] {
        self.entries
            .get(&pair)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `pair` is a key of the index.
    pub fn contains(&self, pair: CorenessPair) -> bool {
        self.entries.contains_key(&pair)
    }

    /// All keys in pair order.
    pub fn keys(&self) -> impl Iterator<Item = CorenessPair> + '_ {
        self.entries.keys().copied()
    }

    /// Iterate `(pair, qtws)`.
    pub fn iter(&self) -> impl Iterator<Item = (CorenessPair, &[QualifiedTimeWindow])> {
        self.entries.iter().map(|(&p, q)| (p, q.as_slice()))
    }

    /// Vertices of `pair` whose window lies inside `[ts, te]`.
    pub fn scan(&self, pair: CorenessPair, ts: Timestamp, te: Timestamp) -> BTreeSet<Vertex> {
        let mut out = BTreeSet::new();
        collect_within(self.get(pair), ts, te, &mut out);
        out
    }

    /// Copy of the entries whose key is in `keys`.
    pub fn restrict_to(
        &self,
        keys: &BTreeSet<CorenessPair>,
    ) -> BTreeMap<CorenessPair, Vec<QualifiedTimeWindow>> {
        keys.iter()
            .filter_map(|k| self.entries.get(k).map(|q| (*k, q.clone())))
            .collect()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total stored QTWs.
    pub fn window_count(&self) -> usize {
        self.entries.values().map(|q| q.len()).sum()
    }

    /// The configuration the index was built with.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }
}
