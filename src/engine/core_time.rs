//! Earliest qualifying window end for a vertex and a degree threshold.

use std::collections::{HashMap, HashSet};

use crate::graph::TemporalBipartiteGraph;
use crate::types::{
    CorenessPair, IndexConfig, TimeWindow, Timestamp, Vertex, VertexId, FIRST_TIMESTAMP,
};

/// Computes, for a window start `ts`, the smallest `te` such that a vertex has
/// at least its layer threshold of distinct neighbours within `[ts, te]`.
///
/// Edges later than the configured `tmax` are never reached.
#[derive(Clone, Copy)]
pub struct CoreTimeCalculator<'g> {
    graph: &'g TemporalBipartiteGraph,
    tmax: Timestamp,
}

impl<'g> CoreTimeCalculator<'g> {
    /// Create a calculator bounded by `config.tmax`.
    pub fn new(graph: &'g TemporalBipartiteGraph, config: &IndexConfig) -> Self {
        Self {
            graph,
            tmax: config.tmax,
        }
    }

    /// The timestamp bound in use.
    pub fn tmax(&self) -> Timestamp {
        self.tmax
    }

    /// Earliest end for `vertex` starting at `ts` under `pair`, using the
    /// component that governs the vertex's layer.
    pub fn shortest_qualifying_end(
        &self,
        vertex: Vertex,
        ts: Timestamp,
        pair: CorenessPair,
    ) -> Option<Timestamp> {
        self.earliest_end(vertex, ts, pair.threshold(vertex.layer))
    }

    /// Earliest end for `vertex` starting at `ts` for a raw degree threshold.
    ///
    /// Walks the incident edges from `ts` forward one timestamp at a time and
    /// stops as soon as the distinct-neighbour count reaches `threshold`.
    pub fn earliest_end(&self, vertex: Vertex, ts: Timestamp, threshold: u32) -> Option<Timestamp> {
        if ts > self.tmax {
            return None;
        }
        if threshold == 0 {
            return Some(ts);
        }
        let incident = self.graph.incident(vertex);
        let start = incident.partition_point(|(t, _)| *t < ts);
        let mut neighbours: HashSet<VertexId> = HashSet::new();
        for &(time, neighbour) in &incident[start..] {
            if time > self.tmax {
                break;
            }
            if neighbours.insert(neighbour) && neighbours.len() as u32 >= threshold {
                return Some(time);
            }
        }
        None
    }

    /// Earliest end for every start in `[1, tmax]`, as `(ts, te)` windows.
    ///
    /// One two-pointer sweep over the time-sorted incidence list: the end
    /// pointer never moves backwards because dropping edges from the front of
    /// a window can only lower the degree. Agrees with calling
    /// [`Self::earliest_end`] for each start.
    pub fn qualifying_ends(&self, vertex: Vertex, threshold: u32) -> Vec<TimeWindow> {
        if threshold == 0 {
            return (FIRST_TIMESTAMP..=self.tmax)
                .map(|ts| TimeWindow::new(ts, ts))
                .collect();
        }

        let incident = self.graph.incident(vertex);
        let usable = &incident[..incident.partition_point(|(t, _)| *t <= self.tmax)];

        let mut windows = Vec::new();
        let mut counts: HashMap<VertexId, u32> = HashMap::new();
        // `counts` covers exactly usable[lo..hi].
        let (mut lo, mut hi) = (0usize, 0usize);

        for ts in FIRST_TIMESTAMP..=self.tmax {
            while lo < usable.len() && usable[lo].0 < ts {
                if lo < hi {
                    release(&mut counts, usable[lo].1);
                }
                lo += 1;
            }
            if hi < lo {
                hi = lo;
            }
            while (counts.len() as u32) < threshold && hi < usable.len() {
                *counts.entry(usable[hi].1).or_insert(0) += 1;
                hi += 1;
            }
            if (counts.len() as u32) < threshold {
                // Every remaining edge is already counted; later starts only lose edges.
                break;
            }
            windows.push(TimeWindow::new(ts, usable[hi - 1].0));
        }

        windows
    }
}

fn release(counts: &mut HashMap<VertexId, u32>, neighbour: VertexId) {
    if let Some(count) = counts.get_mut(&neighbour) {
        *count -= 1;
        if *count == 0 {
            counts.remove(&neighbour);
        }
    }
}
