//! Time windows and qualified time windows (QTWs).

use std::collections::BTreeSet;

use serde::Serialize;

use super::{Timestamp, Vertex};

/// A closed interval `[ts, te]` of timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TimeWindow {
    /// Window start (inclusive).
    pub ts: Timestamp,
    /// Window end (inclusive).
    pub te: Timestamp,
}

impl TimeWindow {
    /// Create a new window.
    pub fn new(ts: Timestamp, te: Timestamp) -> Self {
        Self { ts, te }
    }

    /// Whether this window lies inside `[ts, te]`.
    pub fn within(&self, ts: Timestamp, te: Timestamp) -> bool {
        self.ts >= ts && self.te <= te
    }
}

/// A minimal window shared by one or more vertices for a coreness pair.
///
/// From `ts`, every vertex in `vertices` reaches its layer threshold exactly at
/// `te`, so it also qualifies on any `[ts, te']` with `te' >= te`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualifiedTimeWindow {
    /// Window start.
    pub ts: Timestamp,
    /// Earliest qualifying end.
    pub te: Timestamp,
    /// Vertices sharing this exact window.
    pub vertices: BTreeSet<Vertex>,
}

impl QualifiedTimeWindow {
    /// Create a QTW with no vertices.
    pub fn new(ts: Timestamp, te: Timestamp) -> Self {
        Self {
            ts,
            te,
            vertices: BTreeSet::new(),
        }
    }

    /// The `[ts, te]` part of this entry.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.ts, self.te)
    }
}

/// Add the vertices of every QTW lying inside `[ts, te]` to `out`.
///
/// `qtws` must be sorted by `ts`. Entries starting before `ts` are skipped by
/// binary search, and the scan stops at the first entry starting after `te`.
pub fn collect_within(
    qtws: &[QualifiedTimeWindow],
    ts: Timestamp,
    te: Timestamp,
    out: &mut BTreeSet<Vertex>,
) {
    let lo = qtws.partition_point(|q| q.ts < ts);
    let hi = qtws.partition_point(|q| q.ts <= te);
    if lo >= hi {
        return;
    }
    for qtw in &qtws[lo..hi] {
        if qtw.te <= te {
            out.extend(qtw.vertices.iter().copied());
        }
    }
}
