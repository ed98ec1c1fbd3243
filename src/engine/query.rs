//! Query executor: resolves (alpha, beta, ts, te) core queries.

use std::collections::{BTreeSet, HashSet, VecDeque};

use serde::Serialize;

use crate::index::{PairIndex, SuperiorIndex, VertexIndex};
use crate::types::{
    collect_within, AbcError, AbcResult, CorenessPair, Timestamp, Vertex, FIRST_TIMESTAMP,
};

/// A validated core query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoreQuery {
    /// Upper-layer degree threshold.
    pub alpha: u32,
    /// Lower-layer degree threshold.
    pub beta: u32,
    /// Window start.
    pub ts: Timestamp,
    /// Window end.
    pub te: Timestamp,
}

impl CoreQuery {
    /// Create a query; requires `alpha, beta >= 1` and `1 <= ts <= te`.
    pub fn new(alpha: u32, beta: u32, ts: Timestamp, te: Timestamp) -> AbcResult<Self> {
        if alpha == 0 || beta == 0 {
            return Err(AbcError::InvalidThreshold { alpha, beta });
        }
        if ts < FIRST_TIMESTAMP || ts > te {
            return Err(AbcError::InvalidWindow { ts, te });
        }
        Ok(Self {
            alpha,
            beta,
            ts,
            te,
        })
    }

    /// The queried coreness pair.
    pub fn pair(&self) -> CorenessPair {
        CorenessPair::new(self.alpha, self.beta)
    }
}

/// Result of a superior-index query.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    /// Vertices found in the queried core.
    pub vertices: BTreeSet<Vertex>,
    /// Hub the traversal started from (`None` for an empty index).
    pub start_hub: Option<CorenessPair>,
    /// Whether the start hub is the queried pair itself.
    pub exact: bool,
    /// Hubs in BFS visiting order.
    pub visited: Vec<CorenessPair>,
}

/// The query engine supports all query operations.
pub struct QueryEngine;

impl QueryEngine {
    /// Create a new query engine.
    pub fn new() -> Self {
        Self
    }

    /// Vertices of the queried core within the query window.
    pub fn query(&self, index: &SuperiorIndex, query: &CoreQuery) -> BTreeSet<Vertex> {
        self.resolve(index, query).vertices
    }

    /// Resolve a query by a breadth-first walk over the hub links.
    ///
    /// Only hubs covering the queried pair contribute vertices: membership in
    /// a stronger core within the window implies membership in the queried one.
    pub fn resolve(&self, index: &SuperiorIndex, query: &CoreQuery) -> QueryResult {
        let target = query.pair();
        let start = match self.nearest_hub(index, target) {
            Some(hub) => hub,
            None => {
                return QueryResult {
                    vertices: BTreeSet::new(),
                    start_hub: None,
                    exact: false,
                    visited: Vec::new(),
                }
            }
        };

        let mut vertices: BTreeSet<Vertex> = BTreeSet::new();
        let mut visited: HashSet<CorenessPair> = HashSet::new();
        let mut visited_order: Vec<CorenessPair> = Vec::new();
        let mut queue: VecDeque<CorenessPair> = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(hub) = queue.pop_front() {
            visited_order.push(hub);

            if hub.covers(&target) {
                if let Some(qtws) = index.get(hub) {
                    collect_within(qtws, query.ts, query.te, &mut vertices);
                }
            }

            for neighbor in index.links().neighbors(hub) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        log::debug!(
            "query {} [{}, {}]: start {} ({} hubs visited) -> {} vertices",
            target,
            query.ts,
            query.te,
            start,
            visited_order.len(),
            vertices.len()
        );

        QueryResult {
            vertices,
            start_hub: Some(start),
            exact: start == target,
            visited: visited_order,
        }
    }

    /// The queried pair if it is a hub, else the hub at the smallest Manhattan
    /// distance. Ties go to the lexicographically smallest `(alpha, beta)`.
    pub fn nearest_hub(&self, index: &SuperiorIndex, pair: CorenessPair) -> Option<CorenessPair> {
        if index.contains_hub(pair) {
            return Some(pair);
        }
        let mut best: Option<(u64, CorenessPair)> = None;
        // Keys iterate in ascending order, so a strict comparison keeps the
        // first of equally distant hubs.
        for hub in index.keys() {
            let dist = hub.manhattan(&pair);
            if best.map_or(true, |(d, _)| dist < d) {
                best = Some((dist, hub));
            }
        }
        best.map(|(_, hub)| hub)
    }

    /// Exact-pair scan of the pair index, without fallback.
    pub fn query_pair_index(&self, index: &PairIndex, query: &CoreQuery) -> BTreeSet<Vertex> {
        index.scan(query.pair(), query.ts, query.te)
    }

    /// Exact-pair lookup in the vertex index, vertex by vertex.
    pub fn query_vertex_index(&self, index: &VertexIndex, query: &CoreQuery) -> BTreeSet<Vertex> {
        let pair = query.pair();
        index
            .vertices()
            .filter(|&v| index.qualifies(v, pair, query.ts, query.te))
            .collect()
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}
