//! Hub linking: connects superior-index hubs into a navigable graph.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::types::CorenessPair;

/// Symmetric adjacency between hubs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HubLinks {
    adjacency: BTreeMap<CorenessPair, BTreeSet<CorenessPair>>,
}

impl HubLinks {
    /// Create an empty link relation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `a -- b` in both directions. Self-links are ignored.
    fn connect(&mut self, a: CorenessPair, b: CorenessPair) {
        if a == b {
            return;
        }
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
    }

    /// Hubs linked to `hub`, in pair order.
    pub fn neighbors(&self, hub: CorenessPair) -> impl Iterator<Item = CorenessPair> + '_ {
        self.adjacency.get(&hub).into_iter().flatten().copied()
    }

    /// Whether `a` links to `b`.
    pub fn is_linked(&self, a: CorenessPair, b: CorenessPair) -> bool {
        self.adjacency.get(&a).is_some_and(|set| set.contains(&b))
    }

    /// Number of undirected links.
    pub fn link_count(&self) -> usize {
        self.adjacency.values().map(|s| s.len()).sum::<usize>() / 2
    }

    /// Number of hubs with at least one link.
    pub fn linked_hub_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether every recorded link has its back-link.
    pub fn is_symmetric(&self) -> bool {
        self.adjacency
            .iter()
            .all(|(&a, targets)| targets.iter().all(|&b| self.is_linked(b, a)))
    }

    /// Iterate `(hub, linked hubs)`.
    pub fn iter(&self) -> impl Iterator<Item = (CorenessPair, &BTreeSet<CorenessPair>)> {
        self.adjacency.iter().map(|(&hub, set)| (hub, set))
    }
}

/// Links each hub to its nearest indexed neighbours towards larger pairs.
///
/// Scans are bounded by the largest alpha (`alpha_m`) and beta (`beta_m`)
/// among the hubs.
pub struct HubLinker<'k> {
    hubs: &'k BTreeSet<CorenessPair>,
    alpha_m: u32,
    beta_m: u32,
}

impl<'k> HubLinker<'k> {
    /// Create a linker over a finalized hub set.
    pub fn new(hubs: &'k BTreeSet<CorenessPair>) -> Self {
        Self {
            hubs,
            alpha_m: hubs.iter().map(|p| p.alpha).max().unwrap_or(0),
            beta_m: hubs.iter().map(|p| p.beta).max().unwrap_or(0),
        }
    }

    /// Build the link relation for every hub.
    pub fn link(&self) -> HubLinks {
        let mut links = HubLinks::new();
        let (mut direct, mut skip, mut isolated) = (0usize, 0usize, 0usize);

        for &hub in self.hubs {
            let out = self.direct_link_out(hub);
            let inn = self.direct_link_in(hub);
            for target in out.iter().chain(inn.iter()) {
                links.connect(hub, *target);
                direct += 1;
            }
            if out.is_none() && inn.is_none() {
                match self.skip_link(hub) {
                    Some(target) => {
                        links.connect(hub, target);
                        skip += 1;
                    }
                    None => isolated += 1,
                }
            }
        }

        log::debug!(
            "hub linking: {} hubs, {} direct, {} skip, {} without outgoing link",
            self.hubs.len(),
            direct,
            skip,
            isolated
        );
        links
    }

    /// Nearest hub along beta, falling back to the nearest along alpha.
    pub fn direct_link_out(&self, hub: CorenessPair) -> Option<CorenessPair> {
        self.scan_beta(hub).or_else(|| self.scan_alpha(hub))
    }

    /// Mirror of [`Self::direct_link_out`]: alpha first, then beta.
    pub fn direct_link_in(&self, hub: CorenessPair) -> Option<CorenessPair> {
        self.scan_alpha(hub).or_else(|| self.scan_beta(hub))
    }

    /// First hub strictly above `hub` in both components, scanning beta in
    /// the outer loop and alpha in the inner one.
    pub fn skip_link(&self, hub: CorenessPair) -> Option<CorenessPair> {
        for beta in hub.beta.saturating_add(1)..=self.beta_m {
            for alpha in hub.alpha.saturating_add(1)..=self.alpha_m {
                let candidate = CorenessPair::new(alpha, beta);
                if self.hubs.contains(&candidate) {
                    return Some(candidate);
                }
            }
        }
        None
    }

    fn scan_beta(&self, hub: CorenessPair) -> Option<CorenessPair> {
        (hub.beta.saturating_add(1)..=self.beta_m)
            .map(|beta| CorenessPair::new(hub.alpha, beta))
            .find(|p| self.hubs.contains(p))
    }

    fn scan_alpha(&self, hub: CorenessPair) -> Option<CorenessPair> {
        (hub.alpha.saturating_add(1)..=self.alpha_m)
            .map(|alpha| CorenessPair::new(alpha, hub.beta))
            .find(|p| self.hubs.contains(p))
    }
}

/// Link a hub set in one call.
pub fn link_hubs(hubs: &BTreeSet<CorenessPair>) -> HubLinks {
    HubLinker::new(hubs).link()
}
