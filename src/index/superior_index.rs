//! Superior index: QTWs of the dominant coreness pairs only, linked into a
//! navigable hub graph.

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;

use crate::engine::{DominantPairSelector, HubLinker, HubLinks, QualifiedWindowBuilder};
use crate::graph::TemporalBipartiteGraph;
use crate::types::{CorenessPair, IndexConfig, QualifiedTimeWindow, Vertex, FIRST_TIMESTAMP};

use super::PairIndex;

/// The compact index used at query time.
///
/// Keys ("hubs") are the pairs that are dominant for at least one vertex over
/// the whole timeline. Each hub holds the same QTW list the pair index holds
/// for that pair. Immutable once built.
pub struct SuperiorIndex {
    hubs: BTreeMap<CorenessPair, Vec<QualifiedTimeWindow>>,
    links: HubLinks,
    config: IndexConfig,
}

impl SuperiorIndex {
    /// Build the index from a graph.
    pub fn build(graph: &TemporalBipartiteGraph, config: &IndexConfig) -> Self {
        SuperiorIndexBuilder::new(graph, config).build()
    }

    /// Assemble an index from finalized hubs and link them.
    pub fn from_hubs(hubs: BTreeMap<CorenessPair, Vec<QualifiedTimeWindow>>, config: &IndexConfig) -> Self {
        let keys: BTreeSet<CorenessPair> = hubs.keys().copied().collect();
        let links = HubLinker::new(&keys).link();
        let index = Self {
            hubs,
            links,
            config: *config,
        };
        log::info!(
            "superior index: {} hubs, {} windows, {} links",
            index.hub_count(),
            index.window_count(),
            index.links.link_count()
        );
        index
    }

    /// QTWs of a hub.
    pub fn get(&self, hub: CorenessPair) -> Option<&[QualifiedTimeWindow]> {
        self.hubs.get(&hub).map(|q| q.as_slice())
    }

    /// Whether `pair` is a hub.
    pub fn contains_hub(&self, pair: CorenessPair) -> bool {
        self.hubs.contains_key(&pair)
    }

    /// Hub keys in pair order.
    pub fn keys(&self) -> impl Iterator<Item = CorenessPair> + '_ {
        self.hubs.keys().copied()
    }

    /// Iterate `(hub, qtws)`.
    pub fn hubs(&self) -> impl Iterator<Item = (CorenessPair, &[QualifiedTimeWindow])> {
        self.hubs.iter().map(|(&p, q)| (p, q.as_slice()))
    }

    /// The hub link relation.
    pub fn links(&self) -> &HubLinks {
        &self.links
    }

    /// Number of hubs.
    pub fn hub_count(&self) -> usize {
        self.hubs.len()
    }

    /// Total stored QTWs.
    pub fn window_count(&self) -> usize {
        self.hubs.values().map(|q| q.len()).sum()
    }

    /// Whether there are no hubs.
    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty()
    }

    /// The configuration the index was built with.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }
}

/// Composes dominant-pair selection, window aggregation and hub linking.
pub struct SuperiorIndexBuilder<'g> {
    graph: &'g TemporalBipartiteGraph,
    config: IndexConfig,
}

impl<'g> SuperiorIndexBuilder<'g> {
    /// Create a builder.
    pub fn new(graph: &'g TemporalBipartiteGraph, config: &IndexConfig) -> Self {
        Self {
            graph,
            config: *config,
        }
    }

    /// Dominant pairs of every vertex over `[1, tmax]`.
    pub fn dominant_pairs_by_vertex(&self) -> BTreeMap<Vertex, BTreeSet<CorenessPair>> {
        let vertices: Vec<Vertex> = self.graph.vertices().collect();
        DominantPairSelector::new(self.graph, &self.config).dominant_hubs(
            &vertices,
            FIRST_TIMESTAMP,
            self.config.tmax,
        )
    }

    /// Pairs that are dominant for at least one vertex.
    pub fn dominant_keys(&self) -> BTreeSet<CorenessPair> {
        self.dominant_pairs_by_vertex()
            .into_values()
            .flatten()
            .collect()
    }

    /// Build the superior index.
    pub fn build(&self) -> SuperiorIndex {
        let keys: Vec<CorenessPair> = self.dominant_keys().into_iter().collect();
        log::debug!("{} dominant keys out of {} grid pairs", keys.len(), self.config.pair_count());

        let builder = QualifiedWindowBuilder::new(self.graph, &self.config);
        let hubs: BTreeMap<CorenessPair, Vec<QualifiedTimeWindow>> = keys
            .par_iter()
            .map(|&pair| (pair, builder.qualified_windows_for_pair(pair)))
            .collect::<Vec<_>>()
            .into_iter()
            .filter(|(_, qtws)| !qtws.is_empty())
            .collect();

        SuperiorIndex::from_hubs(hubs, &self.config)
    }

    /// Derive the superior index by restricting an existing pair index to the
    /// dominant keys.
    pub fn from_pair_index(
        pair_index: &PairIndex,
        graph: &TemporalBipartiteGraph,
        config: &IndexConfig,
    ) -> SuperiorIndex {
        let keys = SuperiorIndexBuilder::new(graph, config).dominant_keys();
        let hubs = pair_index
            .restrict_to(&keys)
            .into_iter()
            .filter(|(_, qtws)| !qtws.is_empty())
            .collect();
        SuperiorIndex::from_hubs(hubs, config)
    }
}
